// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interchangeable implementations of the hot matrix routines.
//!
//! Every operator on [`Matrix`] that multiplies, scales, transforms a vector or copies a whole matrix
//! calls into [`Active`]. Which implementation that alias names is fixed when the crate is compiled:
//!
//! * [`Generic`] is the portable reference implementation, used unless another backend is selected.
//! * `Simd` (enabled with the `simd` feature, nightly only) packs each matrix row into a four lane
//!   vector register.
//!
//! Every backend must return exactly the same bits as [`Generic`] for the same inputs. The tests in
//! this module check the active backend against it.
//!
//! [`Matrix`]: crate::matrix::Matrix

mod generic;
#[cfg(feature = "simd")]
mod simd;

pub use self::generic::Generic;
#[cfg(feature = "simd")]
pub use self::simd::Simd;

/// The backend every matrix operator dispatches to.
#[cfg(not(feature = "simd"))]
pub type Active = Generic;

/// The backend every matrix operator dispatches to.
#[cfg(feature = "simd")]
pub type Active = Simd;

/// A set of low-level routines operating directly on packed row-major `f32` buffers.
///
/// Implementations are selected at build time through [`Active`], never per call.
pub trait Backend {
    /// Multiplies `lhs` by `rhs`, where each output element is the dot product of a row of `lhs`
    /// with a column of `rhs`.
    #[must_use]
    fn mat_mul<const N: usize>(lhs: &[[f32; N]; N], rhs: &[[f32; N]; N]) -> [[f32; N]; N];

    /// Multiplies every element of `matrix` by `scalar`.
    #[must_use]
    fn mat_scale<const N: usize>(matrix: &[[f32; N]; N], scalar: f32) -> [[f32; N]; N];

    /// Multiplies the row vector `vector` by `matrix`.
    ///
    /// Component `j` of the result is the dot product of `vector` with column `j` of `matrix`.
    #[must_use]
    fn vec_transform<const N: usize>(vector: &[f32; N], matrix: &[[f32; N]; N]) -> [f32; N];

    /// Copies every element of `src` into `dst`.
    fn copy<const N: usize>(src: &[[f32; N]; N], dst: &mut [[f32; N]; N]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const LHS: [[f32; 4]; 4] = [
        [15.0, 07.0, -9.5, 10.0],
        [02.0, 0.25, 03.0, -8.0],
        [-0.0, 10.0, 02.0, 0.03],
        [03.0, -3.0, 04.0, 8.75],
    ];

    #[rustfmt::skip]
    const RHS: [[f32; 4]; 4] = [
        [3.0, 10.0, 12.0, 18.0],
        [1.2, -1.0, 04.0, 09.0],
        [9.0, 0.10, -0.0, 02.0],
        [0.3, 12.0, 04.0, 1e-3],
    ];

    fn bits<const N: usize>(matrix: [[f32; N]; N]) -> [[u32; N]; N] {
        matrix.map(|row| row.map(f32::to_bits))
    }

    fn shrink(matrix: [[f32; 4]; 4]) -> [[f32; 3]; 3] {
        core::array::from_fn(|row| core::array::from_fn(|col| matrix[row][col]))
    }

    #[test]
    fn test_generic_mat_mul() {
        #[rustfmt::skip]
        let lhs = [
            [15.0, 07.0, 09.0, 10.0],
            [02.0, 03.0, 03.0, 08.0],
            [08.0, 10.0, 02.0, 03.0],
            [03.0, 03.0, 04.0, 08.0],
        ];

        #[rustfmt::skip]
        let rhs = [
            [03.0, 10.0, 12.0, 18.0],
            [12.0, 01.0, 04.0, 09.0],
            [09.0, 10.0, 12.0, 02.0],
            [03.0, 12.0, 04.0, 10.0],
        ];

        #[rustfmt::skip]
        let expected = [
            [240.0, 367.0, 356.0, 451.0],
            [093.0, 149.0, 104.0, 149.0],
            [171.0, 146.0, 172.0, 268.0],
            [105.0, 169.0, 128.0, 169.0],
        ];

        assert_eq!(Generic::mat_mul(&lhs, &rhs), expected);
    }

    #[test]
    fn test_generic_vec_transform() {
        #[rustfmt::skip]
        let matrix = [
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ];

        assert_eq!(Generic::vec_transform(&[1.0, 0.0, 0.0], &matrix), [1.0, 2.0, 3.0]);
        assert_eq!(Generic::vec_transform(&[1.0, 1.0, 1.0], &matrix), [12.0, 15.0, 18.0]);
    }

    #[test]
    fn test_generic_scale_and_copy() {
        let scaled = Generic::mat_scale(&[[1.0, -2.0], [0.5, 4.0]], 2.0);
        assert_eq!(scaled, [[2.0, -4.0], [1.0, 8.0]]);

        let mut dst = [[0.0; 2]; 2];
        Generic::copy(&scaled, &mut dst);
        assert_eq!(dst, scaled);
    }

    #[test]
    fn test_active_matches_generic() {
        assert_eq!(
            bits(Active::mat_mul(&LHS, &RHS)),
            bits(Generic::mat_mul(&LHS, &RHS))
        );
        assert_eq!(
            bits(Active::mat_mul(&shrink(LHS), &shrink(RHS))),
            bits(Generic::mat_mul(&shrink(LHS), &shrink(RHS)))
        );

        for scalar in [0.0, -0.0, 1.5, -3.25, 1e-7] {
            assert_eq!(
                bits(Active::mat_scale(&LHS, scalar)),
                bits(Generic::mat_scale(&LHS, scalar))
            );
            assert_eq!(
                bits(Active::mat_scale(&shrink(RHS), scalar)),
                bits(Generic::mat_scale(&shrink(RHS), scalar))
            );
        }

        for vector in [[1.0, 0.0, 0.0, 1.0], [-0.0, 2.5, 3.0, -1.0], [0.1, 0.2, 0.3, 0.4]] {
            assert_eq!(
                Active::vec_transform(&vector, &LHS).map(f32::to_bits),
                Generic::vec_transform(&vector, &LHS).map(f32::to_bits)
            );

            let short = [vector[0], vector[1], vector[2]];
            assert_eq!(
                Active::vec_transform(&short, &shrink(RHS)).map(f32::to_bits),
                Generic::vec_transform(&short, &shrink(RHS)).map(f32::to_bits)
            );
        }

        let mut dst = [[f32::NAN; 4]; 4];
        Active::copy(&LHS, &mut dst);
        assert_eq!(bits(dst), bits(LHS));
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_falls_back_for_wide_matrices() {
        let lhs: [[f32; 5]; 5] =
            core::array::from_fn(|row| core::array::from_fn(|col| (row * 5 + col) as f32));
        let rhs: [[f32; 5]; 5] =
            core::array::from_fn(|row| core::array::from_fn(|col| (col * 3) as f32 - row as f32));

        assert_eq!(bits(Simd::mat_mul(&lhs, &rhs)), bits(Generic::mat_mul(&lhs, &rhs)));
        assert_eq!(
            Simd::vec_transform(&[1.0, 2.0, 3.0, 4.0, 5.0], &lhs),
            Generic::vec_transform(&[1.0, 2.0, 3.0, 4.0, 5.0], &lhs)
        );
    }
}
