//! Row-major 3x3 and 4x4 single precision matrices, and the small fixed-size vectors they transform.
//!
//! Vectors are treated as rows multiplied on the left of a matrix (`v * M`), so `v * a * b` applies
//! `a` first and then `b`.
//!
//! ```
//! use rowmat::{matrix::Matrix4, vector::{Vector3, Vector4}};
//!
//! let model = Matrix4::uniform_scaling(2.0) * Matrix4::translation(Vector3::new([1.0, 2.0, 3.0]));
//! let point = Vector4::new([1.0, 1.0, 1.0, 1.0]) * model;
//!
//! assert_eq!(point.to_array(), [3.0, 4.0, 5.0, 1.0]);
//! ```
//!
//! The hot operations (matrix product, scalar product, vector transform and raw copy) are routed through
//! [`backend::Active`], which is chosen when the crate is built: the portable [`backend::Generic`]
//! implementation by default, or the vectorized one when the `simd` feature is enabled.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(feature = "simd", feature(portable_simd))]

/// Implements the `approx` comparison traits for a type by comparing its flat element slices.
macro_rules! impl_approx_eq {
    ( [ $( $generics:tt )* ] $ty:ty => $elem:ty ) => {
        #[cfg(any(test, feature = "approx"))]
        impl<$( $generics )*> approx::AbsDiffEq for $ty
        where
            $elem: approx::AbsDiffEq,
            <$elem as approx::AbsDiffEq>::Epsilon: Copy,
        {
            type Epsilon = <$elem as approx::AbsDiffEq>::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <$elem as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                approx::AbsDiffEq::abs_diff_eq(self.as_slice(), other.as_slice(), epsilon)
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl<$( $generics )*> approx::RelativeEq for $ty
        where
            $elem: approx::RelativeEq,
            <$elem as approx::AbsDiffEq>::Epsilon: Copy,
        {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <$elem as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                approx::RelativeEq::relative_eq(
                    self.as_slice(),
                    other.as_slice(),
                    epsilon,
                    max_relative,
                )
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl<$( $generics )*> approx::UlpsEq for $ty
        where
            $elem: approx::UlpsEq,
            <$elem as approx::AbsDiffEq>::Epsilon: Copy,
        {
            #[inline]
            fn default_max_ulps() -> u32 {
                <$elem as approx::UlpsEq>::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                approx::UlpsEq::ulps_eq(self.as_slice(), other.as_slice(), epsilon, max_ulps)
            }
        }
    };
}

pub mod backend;
pub mod fields;
pub mod matrix;
pub mod utils;
pub mod vector;
