// SPDX-License-Identifier: MIT OR Apache-2.0

//! The small set of numeric traits the generic vector code is written against.

use core::ops::{Add, Div, Mul, Sub};

macro_rules! closed_ops {
    ( $( $name:ident => $op:ident ),* $(,)? ) => {
        $(
            #[doc = concat!("A type whose [`", stringify!($op), "`] implementation returns the same type.")]
            pub trait $name: Sized + $op<Output = Self> {}

            impl<T: Sized + $op<Output = T>> $name for T {}
        )*
    };
}

closed_ops! {
    ClosedAdd => Add,
    ClosedSub => Sub,
    ClosedMul => Mul,
    ClosedDiv => Div,
}

/// The additive identity.
#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity.
#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

/// The trigonometric functions needed to build rotation matrices.
pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;

    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// Linearly interpolates between `start` and `target`.
///
/// Evaluated as `start + (target - start) * t`, so `t == 0` returns `start` exactly.
#[must_use]
#[inline]
pub fn lerp<T>(start: T, target: T, t: T) -> T
where
    T: Copy + ClosedAdd + ClosedSub + ClosedMul,
{
    start + (target - start) * t
}

macro_rules! identities {
    ( $( $zero:literal, $one:literal => [ $( $ty:ty ),+ ] );* $(;)? ) => {
        $($(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }

            impl One for $ty {
                const ONE: Self = $one;
            }
        )+)*
    };
}

identities! {
    0, 1 => [u8, u16, u32, u64, usize, i8, i16, i32, i64, isize];
    0.0, 1.0 => [f32, f64];
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [const { T::ZERO }; N];
}

/// Float intrinsics backed by `std`, named after their `libm` counterparts.
#[cfg(feature = "std")]
mod intrinsics {
    macro_rules! forward {
        ( $( $name:ident($ty:ty) => $method:ident ),* $(,)? ) => {
            $(
                #[inline(always)]
                pub(super) fn $name(x: $ty) -> $ty {
                    x.$method()
                }
            )*
        };
    }

    forward! {
        sqrtf(f32) => sqrt,
        sinf(f32) => sin,
        cosf(f32) => cos,
        sqrt(f64) => sqrt,
        sin(f64) => sin,
        cos(f64) => cos,
    }
}

#[cfg(all(feature = "libm", not(feature = "std")))]
use libm as intrinsics;

macro_rules! impl_float_traits {
    ( $( $ty:ty => ($sqrt:ident, $sin:ident, $cos:ident) ),* $(,)? ) => {
        $(
            #[cfg(any(feature = "std", feature = "libm"))]
            impl Sqrt for $ty {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    intrinsics::$sqrt(self)
                }
            }

            #[cfg(any(feature = "std", feature = "libm"))]
            impl Trig for $ty {
                #[inline]
                fn sin(self) -> Self {
                    intrinsics::$sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    intrinsics::$cos(self)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32 => (sqrtf, sinf, cosf),
    f64 => (sqrt, sin, cos),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(10, 20, 2), 30);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_float_intrinsics() {
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert_eq!(Sqrt::sqrt(2.25f64), 1.5);

        let (sin, cos) = Trig::sin_cos(0.0f32);
        assert_eq!((sin, cos), (0.0, 1.0));
        assert_eq!(Trig::sin(0.5f64), 0.5f64.sin());
    }

    #[test]
    fn test_identities() {
        assert_eq!(<[i16; 3]>::ZERO, [0, 0, 0]);
        assert_eq!(u8::ONE + u8::ONE, 2);
        assert_eq!(f32::ZERO, 0.0);
    }
}
