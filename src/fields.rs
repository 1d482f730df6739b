// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named-component views over the small vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] dereference into these types so that components can be read
//! and written as `v.x`, `v.y`, `v.z` and `v.w`.
//!
//! [`Vector2`]: crate::vector::Vector2
//! [`Vector3`]: crate::vector::Vector3
//! [`Vector4`]: crate::vector::Vector4

use crate::{utils::num::Zero, vector::Vector};
use core::{
    mem::{align_of, size_of},
    ops::{Deref, DerefMut},
};

macro_rules! component_views {
    ( $( $view:ident [$dim:literal] { $( $comp:ident ),+ } )* ) => {
        $(
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $view<T> {
                $( pub $comp: T ),+
            }

            impl<T> $view<T> {
                #[must_use]
                #[inline]
                pub const fn new($( $comp: T ),+) -> Self {
                    Self { $( $comp ),+ }
                }
            }

            impl<T: Zero> Zero for $view<T> {
                const ZERO: Self = Self { $( $comp: T::ZERO ),+ };
            }

            impl<T> From<$view<T>> for Vector<T, $dim> {
                #[inline]
                fn from(view: $view<T>) -> Self {
                    Vector::new([$( view.$comp ),+])
                }
            }

            impl<T> From<Vector<T, $dim>> for $view<T> {
                #[inline]
                fn from(vector: Vector<T, $dim>) -> Self {
                    let [$( $comp ),+] = vector.to_array();
                    Self { $( $comp ),+ }
                }
            }

            impl<T> Deref for Vector<T, $dim> {
                type Target = $view<T>;

                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const {
                        assert!(size_of::<Vector<f32, $dim>>() == size_of::<$view<f32>>());
                        assert!(size_of::<Vector<u8, $dim>>() == size_of::<$view<u8>>());
                        assert!(align_of::<Vector<f64, $dim>>() == align_of::<$view<f64>>());
                    }

                    // SAFETY: both are `repr(C)` and hold exactly `$dim` values of `T` with no padding.
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }

            impl<T> DerefMut for Vector<T, $dim> {
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: see `Deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
                }
            }
        )*
    };
}

component_views! {
    Xy [2] { x, y }
    Xyz [3] { x, y, z }
    Xyzw [4] { x, y, z, w }
}
