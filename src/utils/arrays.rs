// SPDX-License-Identifier: MIT OR Apache-2.0

/// Zips two arrays together and applies the function `f` to each memberwise element, returning a fixed
/// size array of the results.
///
/// # Examples
///
/// ```
/// # use rowmat::utils::zip_map;
/// let sums = zip_map([1, 2, 3], [10, 20, 30], |x, y| x + y);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let mut rhs = rhs.into_iter();
    lhs.map(|lhs| match rhs.next() {
        Some(rhs) => f(lhs, rhs),
        None => unreachable!("arrays have the same length"),
    })
}

/// Returns the column `col` of a row-major nested array.
#[must_use]
#[inline]
pub const fn column<const ROWS: usize, const COLS: usize>(
    array: &[[f32; COLS]; ROWS],
    col: usize,
) -> [f32; ROWS] {
    let mut result = [0.0; ROWS];

    let mut row = 0;
    while row < ROWS {
        result[row] = array[row][col];
        row += 1;
    }

    result
}
