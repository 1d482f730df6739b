// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Matrix, Matrix3};
use crate::vector::Vector3;

impl Matrix3 {
    /// Calculates the determinant by cofactor expansion along the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::{matrix::Matrix3, vector::Vector3};
    /// let matrix = Matrix3::scaling(Vector3::new([2.0, 3.0, 4.0]));
    /// assert_eq!(matrix.determinant(), 24.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(self) -> f32 {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.data;

        a00 * (a11 * a22 - a12 * a21) - a01 * (a10 * a22 - a12 * a20)
            + a02 * (a10 * a21 - a11 * a20)
    }

    /// Returns `true` if the determinant is not zero.
    #[must_use]
    #[inline]
    pub fn has_inverse(self) -> bool {
        self.determinant() != 0.0
    }

    #[must_use]
    #[inline]
    pub const fn uniform_scaling(factor: f32) -> Self {
        Matrix::new([
            [factor, 0.0, 0.0],
            [0.0, factor, 0.0],
            [0.0, 0.0, factor],
        ])
    }

    /// Returns a matrix which scales each axis by the matching element of `scale`.
    #[must_use]
    #[inline]
    pub fn scaling(scale: Vector3<f32>) -> Self {
        let [x, y, z] = scale.to_array();
        Matrix::new([
            [x, 0.0, 0.0],
            [0.0, y, 0.0],
            [0.0, 0.0, z],
        ])
    }

    /// Returns a rotation matrix which will transform row vectors by `theta` radians around
    /// the X-axis.
    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn x_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 1, 2)
    }

    /// Returns a rotation matrix which will transform row vectors by `theta` radians around
    /// the Y-axis.
    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn y_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 2, 0)
    }

    /// Returns a rotation matrix which will transform row vectors by `theta` radians around
    /// the Z-axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::{matrix::Matrix3, vector::Vector3};
    /// let rotated = Vector3::<f32>::X * Matrix3::z_axis_rotation(core::f32::consts::FRAC_PI_2);
    /// assert!((rotated.y - 1.0).abs() < 1e-6);
    /// ```
    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn z_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 0, 1)
    }
}

impl From<[f32; 9]> for Matrix3 {
    /// Builds a matrix from nine elements in row-major order.
    #[inline]
    fn from(value: [f32; 9]) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = value;
        Matrix::new([[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]])
    }
}
