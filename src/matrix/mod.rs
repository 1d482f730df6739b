// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    backend::{Active, Backend},
    utils::{
        column,
        num::{One, Zero},
    },
    vector::Vector,
};
#[cfg(any(feature = "std", feature = "libm"))]
use crate::utils::num::Trig;
use core::{
    array,
    borrow::{Borrow, BorrowMut},
    error::Error,
    fmt,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub, SubAssign},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

mod matrix3;
mod matrix4;


/// A square, row-major matrix of `f32` elements.
///
/// Vectors are treated as rows and multiplied on the left, so `v * a * b` applies `a` first and `b`
/// second. The product operators are evaluated by [`backend::Active`].
///
/// [`backend::Active`]: crate::backend::Active
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(C)]
pub struct Matrix<const N: usize = 4> {
    data: [[f32; N]; N],
}

pub type Matrix3 = Matrix<3>;
pub type Matrix4 = Matrix<4>;

impl<const N: usize> Default for Matrix<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

/// The error returned by [`Matrix::try_get()`] when an index is outside of the matrix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IndexOutOfBounds {
    pub row: usize,
    pub col: usize,
    pub dim: usize,
}

impl fmt::Display for IndexOutOfBounds {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmtr,
            "index ({}, {}) is out of bounds for a {}x{} matrix",
            self.row, self.col, self.dim, self.dim
        )
    }
}

impl Error for IndexOutOfBounds {}

impl<const N: usize> Matrix<N> {
    pub const NUM_ELEMENTS: usize = N * N;

    /// Create a new `Matrix` from the given nested array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::matrix::Matrix;
    /// let matrix: Matrix<2> = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(matrix[(1, 0)], 3.0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[f32; N]; N]) -> Self {
        Self { data }
    }

    #[must_use]
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new([[value; N]; N])
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> f32>(mut f: F) -> Self {
        Self::new(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }

    /// The matrix with ones on the diagonal and zeros elsewhere.
    ///
    /// ```
    /// # use rowmat::matrix::Matrix3;
    /// let eye = Matrix3::identity();
    /// assert_eq!(eye.diagonal(), [1.0; 3]);
    /// assert_eq!(eye.as_slice().iter().sum::<f32>(), 3.0);
    /// ```
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        let mut data = [[0.0; N]; N];

        let mut i = 0;
        while i < N {
            data[i][i] = 1.0;
            i += 1;
        }

        Self::new(data)
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[f32; N]; N] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [[f32; N]; N] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [[f32; N]; N] {
        self.data
    }

    /// Views the elements in row-major order.
    ///
    /// ```
    /// # use rowmat::matrix::Matrix;
    /// let m: Matrix<2> = Matrix::new([[9.0, 8.0], [7.0, 6.0]]);
    /// assert_eq!(m.as_slice(), &[9.0, 8.0, 7.0, 6.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_flattened()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.data.as_flattened_mut()
    }

    /// Bounds-checked access to the element in `row`, `col`.
    ///
    /// ```
    /// use rowmat::{matrix::Matrix4, vector::Vector3};
    ///
    /// let shift = Matrix4::translation(Vector3::new([7.0, -2.0, 0.5]));
    /// assert_eq!(shift.get(3, 1), Some(&-2.0));
    /// assert_eq!(shift.get(0, 4), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&f32> {
        self.data.get(row)?.get(col)
    }

    /// Mutable counterpart of [`Matrix::get`].
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f32> {
        self.data.get_mut(row)?.get_mut(col)
    }

    /// Returns a copy of the element at `Matrix[row][col]`, or an [`IndexOutOfBounds`] error
    /// describing the rejected index.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowmat::matrix::{IndexOutOfBounds, Matrix3};
    ///
    /// let matrix = Matrix3::identity();
    /// assert_eq!(matrix.try_get(2, 2), Ok(1.0));
    /// assert_eq!(
    ///     matrix.try_get(3, 0),
    ///     Err(IndexOutOfBounds { row: 3, col: 0, dim: 3 }),
    /// );
    /// ```
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, IndexOutOfBounds> {
        self.get(row, col)
            .copied()
            .ok_or(IndexOutOfBounds { row, col, dim: N })
    }

    /// Element access that skips the bounds check outside debug builds.
    ///
    /// # Safety
    ///
    /// Both `row` and `col` must be less than `N`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &f32 {
        debug_assert!(row < N && col < N, "matrix index out of bounds");
        unsafe { self.data.get_unchecked(row).get_unchecked(col) }
    }

    /// # Safety
    ///
    /// Both `row` and `col` must be less than `N`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        debug_assert!(row < N && col < N, "matrix index out of bounds");
        unsafe { self.data.get_unchecked_mut(row).get_unchecked_mut(col) }
    }

    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn row(&self, n: usize) -> [f32; N] {
        self.data[n]
    }

    /// Returns a copy of column `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    ///
    /// assert_eq!(matrix.col(1), [2.0, 5.0, 8.0]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn col(&self, n: usize) -> [f32; N] {
        column(&self.data, n)
    }

    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, row_idx: usize, row: [f32; N]) {
        self.data[row_idx] = row;
    }

    /// Overwrites column `col_idx`. Panics if the index is out of range.
    #[track_caller]
    #[inline]
    pub fn set_col(&mut self, col_idx: usize, col: [f32; N]) {
        assert!(col_idx < N, "Column index out of bounds");
        for (row, elem) in self.data.iter_mut().zip(col) {
            row[col_idx] = elem;
        }
    }

    #[must_use]
    #[inline]
    pub fn diagonal(&self) -> [f32; N] {
        array::from_fn(|i| self.data[i][i])
    }

    #[inline]
    pub fn map<F: FnMut(f32) -> f32>(self, mut f: F) -> Self {
        Self::new(self.data.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose of the matrix, swapping `data[i][j]` with `data[j][i]`.
    ///
    /// This is also available as the `!` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([[1.0, 3.0], [2.0, 4.0]]));
    /// assert_eq!(!!matrix, matrix);
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Self {
        Self::from_fn(|row, col| self.data[col][row])
    }

    #[inline]
    pub fn transpose_in_place(&mut self) {
        for row in 1..N {
            for col in 0..row {
                let upper = self.data[col][row];
                self.data[col][row] = self.data[row][col];
                self.data[row][col] = upper;
            }
        }
    }

    /// Calculates the inverse of the matrix by Gauss-Jordan elimination.
    ///
    /// A singular matrix yields the all-zero matrix. Use [`inverse_checked()`] to tell the two
    /// apart, or test [`has_inverse()`] beforehand.
    ///
    /// Pivots are compared against zero exactly. A pivot which is tiny but not zero is accepted, and
    /// the result may then contain very large values, infinities or NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::matrix::Matrix3;
    /// let singular = Matrix3::new([
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0],
    ///     [0.0, 1.0, 0.0],
    /// ]);
    ///
    /// assert_eq!(singular.inverse(), Matrix3::new([[0.0; 3]; 3]));
    /// ```
    ///
    /// [`inverse_checked()`]: Matrix::inverse_checked
    /// [`has_inverse()`]: Matrix::has_inverse
    #[must_use]
    #[inline]
    pub fn inverse(self) -> Self {
        self.inverse_checked().unwrap_or(Self::ZERO)
    }

    /// Calculates the inverse of the matrix, or returns `None` if the matrix is singular.
    ///
    /// The elimination swaps a zero pivot with the first row below it which has a non-zero
    /// element in the pivot column. No largest-magnitude pivot selection is performed.
    #[must_use]
    pub fn inverse_checked(self) -> Option<Self> {
        let mut mat = self.data;
        let mut out = Self::identity().data;

        for i in 0..N {
            if mat[i][i] == 0.0 {
                let Some(swap_row) = (i + 1..N).find(|&row| mat[row][i] != 0.0) else {
                    #[cfg(feature = "log")]
                    log::trace!("matrix is singular: no non-zero pivot in column {i}");
                    return None;
                };

                mat.swap(i, swap_row);
                out.swap(i, swap_row);
            }

            let pivot_inv = 1.0 / mat[i][i];
            scale_row(&mut mat[i], pivot_inv);
            scale_row(&mut out[i], pivot_inv);

            let (pivot_mat, pivot_out) = (mat[i], out[i]);
            for row in 0..N {
                if row == i {
                    continue;
                }

                let factor = mat[row][i];
                sub_scaled_row(&mut mat[row], &pivot_mat, factor);
                sub_scaled_row(&mut out[row], &pivot_out, factor);
            }
        }

        Some(Self::new(out))
    }

    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// A rotation within the plane spanned by axes `a` and `b`, with `+sin` at `[a][b]`.
    #[cfg(any(feature = "std", feature = "libm"))]
    #[inline]
    pub(crate) fn plane_rotation(theta: f32, a: usize, b: usize) -> Self {
        let (sin_t, cos_t) = Trig::sin_cos(theta);

        let mut result = Self::identity();
        result[a][a] = cos_t;
        result[a][b] = sin_t;
        result[b][a] = -sin_t;
        result[b][b] = cos_t;

        result
    }
}

#[inline]
fn scale_row<const N: usize>(row: &mut [f32; N], factor: f32) {
    for elem in row {
        *elem *= factor;
    }
}

#[inline]
fn sub_scaled_row<const N: usize>(row: &mut [f32; N], pivot: &[f32; N], factor: f32) {
    for (elem, pivot_elem) in row.iter_mut().zip(pivot) {
        *elem -= factor * *pivot_elem;
    }
}

impl<const N: usize> Zero for Matrix<N> {
    const ZERO: Self = Matrix::splat(0.0);
}

impl<const N: usize> One for Matrix<N> {
    const ONE: Self = Matrix::identity();
}

impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = [f32; N];
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;
    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(Active::mat_mul(&self.data, &rhs.data))
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        let product = Active::mat_mul(&self.data, &rhs.data);
        Active::copy(&product, &mut self.data);
    }
}

impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(Active::mat_scale(&self.data, rhs))
    }
}

impl<const N: usize> Mul<Matrix<N>> for f32 {
    type Output = Matrix<N>;
    #[inline]
    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> MulAssign<f32> for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        let scaled = Active::mat_scale(&self.data, rhs);
        Active::copy(&scaled, &mut self.data);
    }
}

impl<const N: usize> Mul<Matrix<N>> for Vector<f32, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        Vector::new(Active::vec_transform(self.as_array(), &rhs.data))
    }
}

impl<const N: usize> MulAssign<Matrix<N>> for Vector<f32, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<N>) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Add for Matrix<N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const N: usize> AddAssign for Matrix<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (l, r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *l += *r;
        }
    }
}

impl<const N: usize> Sub for Matrix<N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<const N: usize> SubAssign for Matrix<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (l, r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *l -= *r;
        }
    }
}

impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<const N: usize> Not for Matrix<N> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        self.transpose()
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn from(value: [[f32; N]; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<Matrix<N>> for [[f32; N]; N] {
    #[inline]
    fn from(value: Matrix<N>) -> Self {
        value.data
    }
}

impl<const N: usize> AsRef<[f32]> for Matrix<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl<const N: usize> AsMut<[f32]> for Matrix<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

impl<const N: usize> AsRef<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn as_ref(&self) -> &[[f32; N]; N] {
        &self.data
    }
}

impl<const N: usize> AsMut<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [[f32; N]; N] {
        &mut self.data
    }
}

impl<const N: usize> Borrow<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn borrow(&self) -> &[[f32; N]; N] {
        &self.data
    }
}

impl<const N: usize> BorrowMut<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [[f32; N]; N] {
        &mut self.data
    }
}

macro_rules! impl_mint_matrix_conversions {
    ( $( $dim:literal => ($row_matrix:ident, $col_matrix:ident) [ $( $vecs:ident ),* $(,)? ] ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl From<mint::$row_matrix<f32>> for Matrix<$dim> {
                #[inline]
                fn from(value: mint::$row_matrix<f32>) -> Self {
                    Matrix::new([
                        $( value.$vecs.into(), )*
                    ])
                }
            }

            #[cfg(feature = "mint")]
            impl From<Matrix<$dim>> for mint::$row_matrix<f32> {
                #[inline]
                fn from(value: Matrix<$dim>) -> Self {
                    mint::$row_matrix::from(value.to_array())
                }
            }

            #[cfg(feature = "mint")]
            impl From<mint::$col_matrix<f32>> for Matrix<$dim> {
                #[inline]
                fn from(value: mint::$col_matrix<f32>) -> Self {
                    Matrix::new([
                        $( value.$vecs.into(), )*
                    ])
                    .transpose()
                }
            }

            #[cfg(feature = "mint")]
            impl From<Matrix<$dim>> for mint::$col_matrix<f32> {
                #[inline]
                fn from(value: Matrix<$dim>) -> Self {
                    mint::$col_matrix::from(value.transpose().to_array())
                }
            }

            #[cfg(feature = "mint")]
            impl mint::IntoMint for Matrix<$dim> {
                type MintType = mint::$row_matrix<f32>;
            }
        )*
    };
}

impl_mint_matrix_conversions! {
    3 => (RowMatrix3, ColumnMatrix3) [x, y, z],
    4 => (RowMatrix4, ColumnMatrix4) [x, y, z, w],
}

#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}

#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl_approx_eq! { [const N: usize] Matrix<N> => f32 }

/// Serialized as a sequence of rows, each a sequence of `N` numbers.
#[cfg(feature = "serde")]
impl<const N: usize> Serialize for Matrix<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Vector::new(self.data.map(Vector::new)).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> Deserialize<'de> for Matrix<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vector::<Vector<f32, N>, N>::deserialize(deserializer)?;
        Ok(Matrix::new(rows.to_array().map(Vector::to_array)))
    }
}
