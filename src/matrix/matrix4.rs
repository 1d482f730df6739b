// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Matrix, Matrix3, Matrix4};
use crate::vector::Vector3;

impl Matrix4 {
    /// Calculates the determinant from the 2x2 minors of the bottom two rows.
    #[must_use]
    #[inline]
    pub fn determinant(self) -> f32 {
        let [
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ] = self.data;

        let b00 = m22 * m33 - m23 * m32;
        let b01 = m21 * m33 - m23 * m31;
        let b02 = m21 * m32 - m22 * m31;
        let b03 = m20 * m33 - m23 * m30;
        let b04 = m20 * m32 - m22 * m30;
        let b05 = m20 * m31 - m21 * m30;

        let cof0 = m11 * b00 - m12 * b01 + m13 * b02;
        let cof1 = m10 * b00 - m12 * b03 + m13 * b04;
        let cof2 = m10 * b01 - m11 * b03 + m13 * b05;
        let cof3 = m10 * b02 - m11 * b04 + m12 * b05;

        m00 * cof0 - m01 * cof1 + m02 * cof2 - m03 * cof3
    }

    /// Returns `true` if the determinant is not zero.
    #[must_use]
    #[inline]
    pub fn has_inverse(self) -> bool {
        self.determinant() != 0.0
    }

    /// Scales `x`, `y` and `z` by `factor`, leaving `w` unchanged.
    #[must_use]
    #[inline]
    pub const fn uniform_scaling(factor: f32) -> Self {
        Matrix::new([
            [factor, 0.0, 0.0, 0.0],
            [0.0, factor, 0.0, 0.0],
            [0.0, 0.0, factor, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    #[inline]
    pub fn scaling(scale: Vector3<f32>) -> Self {
        let [x, y, z] = scale.to_array();
        Matrix::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns a matrix which moves points by `offset`.
    ///
    /// The offset is stored in the last row, as row vectors are multiplied on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::{matrix::Matrix4, vector::{Vector3, Vector4}};
    /// let translation = Matrix4::translation(Vector3::new([1.0, 2.0, 3.0]));
    /// let moved = Vector4::<f32>::W * translation;
    ///
    /// assert_eq!(moved.to_array(), [1.0, 2.0, 3.0, 1.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn translation(offset: Vector3<f32>) -> Self {
        let [x, y, z] = offset.to_array();
        Matrix::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Returns a perspective projection for a view plane of `width` by `height` at distance `near`.
    ///
    /// Depth is copied into `w`, so the projected vector still needs a
    /// [`Vector4::homogenize()`] to finish the perspective divide.
    ///
    /// [`Vector4::homogenize()`]: crate::vector::Vector4::homogenize
    #[must_use]
    #[inline]
    pub fn projection(width: f32, height: f32, near: f32) -> Self {
        let two_near = 2.0 * near;
        Matrix::new([
            [two_near / width, 0.0, 0.0, 0.0],
            [0.0, two_near / height, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 0.0],
        ])
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn x_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 1, 2)
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn y_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 2, 0)
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[must_use]
    #[inline]
    pub fn z_axis_rotation(theta: f32) -> Self {
        Matrix::plane_rotation(theta, 0, 1)
    }
}

impl From<[f32; 16]> for Matrix4 {
    /// Builds a matrix from sixteen elements in row-major order.
    #[inline]
    fn from(value: [f32; 16]) -> Self {
        #[rustfmt::skip]
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = value;

        Matrix::new([
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ])
    }
}

impl From<Matrix3> for Matrix4 {
    /// Embeds a 3x3 matrix in the upper left corner of a 4x4 identity matrix.
    #[inline]
    fn from(value: Matrix3) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = value.to_array();
        Matrix::new([
            [a00, a01, a02, 0.0],
            [a10, a11, a12, 0.0],
            [a20, a21, a22, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
