// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    backend::Backend,
    utils::{column, sum, zip_map},
};
use core::{array, ops::Mul};

/// The portable reference backend.
///
/// Each dot product is accumulated starting from `0.0`, adding the products in index order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Generic;

impl Backend for Generic {
    #[inline]
    fn mat_mul<const N: usize>(lhs: &[[f32; N]; N], rhs: &[[f32; N]; N]) -> [[f32; N]; N] {
        array::from_fn(|row| {
            array::from_fn(|col| sum(zip_map(lhs[row], column(rhs, col), Mul::mul)))
        })
    }

    #[inline]
    fn mat_scale<const N: usize>(matrix: &[[f32; N]; N], scalar: f32) -> [[f32; N]; N] {
        matrix.map(|row| row.map(|elem| elem * scalar))
    }

    #[inline]
    fn vec_transform<const N: usize>(vector: &[f32; N], matrix: &[[f32; N]; N]) -> [f32; N] {
        array::from_fn(|col| sum(zip_map(*vector, column(matrix, col), Mul::mul)))
    }

    #[inline]
    fn copy<const N: usize>(src: &[[f32; N]; N], dst: &mut [[f32; N]; N]) {
        *dst = *src;
    }
}
