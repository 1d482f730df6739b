// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::backend::{Backend, Generic};
use core::simd::f32x4;

const LANES: usize = 4;

/// A backend which keeps one matrix row per `f32x4` register.
///
/// Rows shorter than four elements are padded with zeros; the padding lanes are discarded when the
/// result is stored. Matrices wider than four columns are forwarded to [`Generic`].
///
/// Products are accumulated with broadcast-multiply-add starting from a zero register, in the same
/// order as [`Generic`], so both backends produce identical bits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Simd;

#[must_use]
#[inline(always)]
fn load<const N: usize>(row: &[f32; N]) -> f32x4 {
    let mut lanes = [0.0; LANES];
    lanes[..N].copy_from_slice(row);
    f32x4::from_array(lanes)
}

#[inline(always)]
fn store<const N: usize>(lanes: f32x4, row: &mut [f32; N]) {
    row.copy_from_slice(&lanes.as_array()[..N]);
}

/// Computes `Σ_k vector[k] * rows[k]` lane-wise.
#[must_use]
#[inline(always)]
fn combine_rows<const N: usize>(vector: &[f32; N], rows: &[f32x4; N]) -> f32x4 {
    let mut acc = f32x4::splat(0.0);
    for (&scale, row) in vector.iter().zip(rows) {
        acc += f32x4::splat(scale) * *row;
    }
    acc
}

impl Backend for Simd {
    #[inline]
    fn mat_mul<const N: usize>(lhs: &[[f32; N]; N], rhs: &[[f32; N]; N]) -> [[f32; N]; N] {
        if N > LANES {
            return Generic::mat_mul(lhs, rhs);
        }

        let rhs_rows = rhs.each_ref().map(load);
        let mut out = [[0.0; N]; N];
        for (out_row, lhs_row) in out.iter_mut().zip(lhs) {
            store(combine_rows(lhs_row, &rhs_rows), out_row);
        }

        out
    }

    #[inline]
    fn mat_scale<const N: usize>(matrix: &[[f32; N]; N], scalar: f32) -> [[f32; N]; N] {
        if N > LANES {
            return Generic::mat_scale(matrix, scalar);
        }

        let scalar = f32x4::splat(scalar);
        let mut out = [[0.0; N]; N];
        for (out_row, row) in out.iter_mut().zip(matrix) {
            store(load(row) * scalar, out_row);
        }

        out
    }

    #[inline]
    fn vec_transform<const N: usize>(vector: &[f32; N], matrix: &[[f32; N]; N]) -> [f32; N] {
        if N > LANES {
            return Generic::vec_transform(vector, matrix);
        }

        let rows = matrix.each_ref().map(load);
        let mut out = [0.0; N];
        store(combine_rows(vector, &rows), &mut out);

        out
    }

    #[inline]
    fn copy<const N: usize>(src: &[[f32; N]; N], dst: &mut [[f32; N]; N]) {
        if N > LANES {
            return Generic::copy(src, dst);
        }

        for (dst_row, src_row) in dst.iter_mut().zip(src) {
            store(load(src_row), dst_row);
        }
    }
}
