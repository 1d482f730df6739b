// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::{
    num::{ClosedAdd, ClosedDiv, ClosedMul, ClosedSub, One, Sqrt, Zero, lerp as lerp_scalar},
    sum, zip_map,
};
#[cfg(feature = "serde")]
use core::{fmt, marker::PhantomData, mem::MaybeUninit};
use core::{
    array::{self, IntoIter},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::{Iter, IterMut},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer, Error, IgnoredAny, SeqAccess, Visitor},
    ser::{Serialize, SerializeTuple, Serializer},
};

/// A fixed-size vector of `N` elements of type `T`.
///
/// Two, three and four element vectors dereference into [`Xy`], [`Xyz`] and [`Xyzw`] respectively, so
/// their components can be accessed by name.
///
/// [`Xy`]: crate::fields::Xy
/// [`Xyz`]: crate::fields::Xyz
/// [`Xyzw`]: crate::fields::Xyzw
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Vector<T = f32, const N: usize = 3> {
    data: [T; N],
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Vector::from_fn(|_| T::default())
    }
}

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

pub type Vec2 = Vector2<i32>;
pub type Vec2h = Vector2<i16>;
pub type Vec2f = Vector2<f32>;

pub type Vec3 = Vector3<i32>;
pub type Vec3h = Vector3<i16>;
pub type Vec3f = Vector3<f32>;

pub type Vec4 = Vector4<i32>;
pub type Vec4h = Vector4<i16>;
pub type Vec4f = Vector4<f32>;

impl<T: One + Zero> Vector2<T> {
    pub const X: Self = Vector::new([T::ONE, T::ZERO]);
    pub const Y: Self = Vector::new([T::ZERO, T::ONE]);
}

impl<T: One + Zero> Vector3<T> {
    /// A vector where the X-axis is set to `1`, and other elements are set to `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::vector::Vector3;
    /// let vector = Vector3::<i32>::X;
    /// assert_eq!(vector.x, 1);
    /// assert_eq!(vector.y, 0);
    /// assert_eq!(vector.z, 0);
    /// ```
    pub const X: Self = Vector::new([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Vector::new([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Vector::new([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: One + Zero> Vector4<T> {
    pub const X: Self = Vector::new([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Vector::new([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Vector::new([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Vector::new([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    pub const LENGTH: usize = N;

    /// Returns a new vector, initializing every element from the given `array`.
    ///
    /// # Example
    ///
    /// ```
    /// # use rowmat::vector::Vector;
    /// let vector: Vector<i32, 4> = Vector::new([1, 2, 3, 4]);
    /// assert_eq!(vector.w, 4);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self { data: array }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(self, rhs: Vector<U, N>, f: F) -> Vector<Ret, N> {
        Vector {
            data: zip_map(self.data, rhs.data, f),
        }
    }

    #[must_use]
    #[inline]
    pub fn dot<U>(self, rhs: Vector<U, N>) -> T::Output
    where
        T: Mul<U>,
        T::Output: Zero + ClosedAdd,
    {
        sum(zip_map(self.data, rhs.data, Mul::mul))
    }

    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a new `Vector` with each element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::vector::Vector;
    /// let vector = Vector::<_, 3>::splat(21);
    /// assert_eq!(vector.to_array(), [21, 21, 21]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }
}

impl<T: Zero + PartialEq, const N: usize> Vector<T, N> {
    /// Returns `true` if every element equals zero.
    #[must_use]
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|elem| *elem == T::ZERO)
    }
}

impl<T: ClosedMul + Copy + Zero + ClosedAdd, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len_squared(self) -> T {
        Self::dot(self, self)
    }

    #[must_use]
    #[inline]
    pub fn distance_squared(self, other: Self) -> T
    where
        T: ClosedSub,
    {
        (self - other).len_squared()
    }
}

impl<T: ClosedMul + Copy + ClosedAdd + Zero + Sqrt, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len(self) -> T {
        self.len_squared().sqrt()
    }

    #[must_use]
    #[inline]
    pub fn distance(self, other: Self) -> T
    where
        T: ClosedSub,
    {
        (self - other).len()
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: ClosedMul + Copy + ClosedAdd + ClosedDiv + Zero + Sqrt + PartialEq,
{
    /// Returns this vector scaled to unit length, or the zero vector if its length is zero.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Vector<T, N> {
        self.normalized_checked().unwrap_or(Zero::ZERO)
    }

    /// Returns this vector scaled to unit length, or `None` if its length is zero.
    #[must_use]
    #[inline]
    pub fn normalized_checked(self) -> Option<Vector<T, N>> {
        let len = self.len();
        if len == T::ZERO {
            None
        } else {
            Some(self / len)
        }
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
}

impl<T: ClosedMul + Copy + ClosedAdd + Zero + One + Sqrt + PartialEq, const N: usize> Vector<T, N> {
    /// Whether the length is exactly one. No tolerance is applied.
    #[must_use]
    #[inline]
    pub fn is_normalized(self) -> bool {
        self.len() == T::ONE
    }
}

impl<T: Copy + ClosedAdd + ClosedSub + ClosedMul, const N: usize> Vector<T, N> {
    /// Linearly interpolates each element between `self` (at `t == 0`) and `target` (at `t == 1`).
    #[must_use]
    #[inline]
    pub fn lerp(self, target: Self, t: T) -> Self {
        self.zip_map(target, |start, end| lerp_scalar(start, end, t))
    }
}

impl<T: Copy + PartialOrd, const N: usize> Vector<T, N> {
    /// Restricts every element to the range `[min, max]`.
    #[must_use]
    #[inline]
    pub fn clamp(self, min: T, max: T) -> Self {
        self.map(|elem| {
            if elem < min {
                min
            } else if elem > max {
                max
            } else {
                elem
            }
        })
    }

    /// Returns the elementwise minimum of `self` and `other`.
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, |lhs, rhs| if lhs < rhs { lhs } else { rhs })
    }

    /// Returns the elementwise maximum of `self` and `other`.
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, |lhs, rhs| if lhs > rhs { lhs } else { rhs })
    }
}

impl<T> Vector2<T> {
    /// Appends `z`, producing a three element vector.
    #[must_use]
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        let [x, y] = self.data;
        Vector::new([x, y, z])
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Vector2<T> {
    /// The two dimensional cross product, `x0 * y1 - y0 * x1`.
    ///
    /// This is the z component of the cross product of both vectors extended with `z = 0`.
    #[must_use]
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> T {
        let [x0, y0] = self.data;
        let [x1, y1] = rhs.data;

        (x0 * y1) - (y0 * x1)
    }
}

impl<T> Vector3<T> {
    /// Appends `w`, producing a four element vector.
    #[must_use]
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        let [x, y, z] = self.data;
        Vector::new([x, y, z, w])
    }

    /// Drops the `z` element.
    #[must_use]
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        let [x, y, _] = self.data;
        Vector::new([x, y])
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Vector3<T> {
    /// Returns the vector perpendicular to both `self` and `rhs`, following the right-hand rule.
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [x0, y0, z0] = self.data;
        let [x1, y1, z1] = rhs.data;

        Vector::new([
            y0 * z1 - z0 * y1,
            z0 * x1 - x0 * z1,
            x0 * y1 - y0 * x1,
        ])
    }
}

impl<T> Vector4<T> {
    /// Drops the `w` element.
    #[must_use]
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        let [x, y, z, _] = self.data;
        Vector::new([x, y, z])
    }
}

impl<T: Copy + ClosedDiv> Vector4<T> {
    /// Performs the perspective divide on `x` and `y`.
    ///
    /// `z` is left untouched so it keeps carrying depth after a [`Matrix4::projection`], and `w` is
    /// left as is. For floats a `w` of zero yields infinities or NaNs; integer vectors panic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmat::vector::Vector4;
    /// let mut v = Vector4::new([4.0, 8.0, 3.0, 2.0]);
    /// v.homogenize();
    /// assert_eq!(v.to_array(), [2.0, 4.0, 3.0, 2.0]);
    /// ```
    ///
    /// [`Matrix4::projection`]: crate::matrix::Matrix4::projection
    #[inline]
    pub fn homogenize(&mut self) {
        let w = self.data[3];
        self.data[0] = self.data[0] / w;
        self.data[1] = self.data[1] / w;
    }

    #[must_use]
    #[inline]
    pub fn homogenized(mut self) -> Self {
        self.homogenize();
        self
    }
}

impl<T: One> From<Vector3<T>> for Vector4<T> {
    /// Converts a point into homogeneous coordinates, with `w = 1`.
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        value.extend(T::ONE)
    }
}

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self::new(Zero::ZERO);
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

macro_rules! scalar_ops {
    ( $( $op:ident::$op_fn:ident, $assign:ident::$assign_fn:ident; )* ) => {
        $(
            impl<T: $op + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Vector<T::Output, N>;
                #[inline]
                fn $op_fn(self, rhs: T) -> Self::Output {
                    self.map(|elem| $op::$op_fn(elem, rhs))
                }
            }

            impl<T: $assign + Copy, const N: usize> $assign<T> for Vector<T, N> {
                #[inline]
                fn $assign_fn(&mut self, rhs: T) {
                    self.iter_mut().for_each(|elem| $assign::$assign_fn(elem, rhs));
                }
            }
        )*
    };
}

scalar_ops! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

macro_rules! scalar_lhs_mul {
    ( $( $scalar:ty ),* $(,)? ) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;
                #[inline]
                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )*
    };
}

scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! componentwise_ops {
    ( $( $op:ident::$op_fn:ident, $assign:ident::$assign_fn:ident; )* ) => {
        $(
            impl<T: $op<U>, U, const N: usize> $op<Vector<U, N>> for Vector<T, N> {
                type Output = Vector<T::Output, N>;
                #[inline]
                fn $op_fn(self, rhs: Vector<U, N>) -> Self::Output {
                    self.zip_map(rhs, $op::$op_fn)
                }
            }

            impl<T: $assign<U>, U, const N: usize> $assign<Vector<U, N>> for Vector<T, N> {
                #[inline]
                fn $assign_fn(&mut self, rhs: Vector<U, N>) {
                    self.iter_mut()
                        .zip(rhs)
                        .for_each(|(lhs, rhs)| $assign::$assign_fn(lhs, rhs));
                }
            }
        )*
    };
}

componentwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        Index::index(&self.data, index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.data, index)
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}


macro_rules! impl_mint_vector_conversions {
    ( $( $mint_type:ident => $dim:literal ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Vector<T, $dim> {
                #[inline]
                fn from(value: mint::$mint_type<T>) -> Self {
                    let array: [T; $dim] = value.into();
                    Vector::new(array)
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Vector<T, $dim>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Vector<T, $dim>) -> Self {
                    From::from(value.data)
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $dim> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

impl_mint_vector_conversions! {
    Vector2 => 2,
    Vector3 => 3,
    Vector4 => 4,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {
    #[inline]
    fn zeroed() -> Self {
        Vector::from_fn(|_| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl_approx_eq! { [T, const N: usize] Vector<T, N> => T }

#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in self {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
struct VectorVisitor<T, const N: usize>(PhantomData<[T; N]>);

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N> {
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of exactly {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = [const { MaybeUninit::<T>::uninit() }; N];
        for (filled, slot) in buf.iter_mut().enumerate() {
            match seq.next_element()? {
                Some(elem) => {
                    slot.write(elem);
                }
                None => return Err(A::Error::invalid_length(filled, &self)),
            }
        }

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(A::Error::invalid_length(N + 1, &self));
        }

        // SAFETY: the loop above either wrote all `N` slots or returned early.
        Ok(Vector::new(buf.map(|slot| unsafe { slot.assume_init() })))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fields() {
        let mut v = Vector4::new([1, 2, 3, 4]);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));

        v.w = 9;
        v.x += 10;
        assert_eq!(v.to_array(), [11, 2, 3, 9]);

        let v: Vec2h = Vector::new([-3, 7]);
        assert_eq!(v.y, 7);
    }

    #[test]
    fn test_cross() {
        let a = Vec3f::new([2.0, -1.0, 3.0]);
        let b = Vec3f::new([4.0, 0.0, -2.0]);

        assert_eq!(a.cross(b).to_array(), [2.0, 16.0, 4.0]);
        assert_eq!(b.cross(a).to_array(), [-2.0, -16.0, -4.0]);
        assert_eq!(a.cross(b).dot(a), 0.0);

        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::new([1, 2, 3]).cross(Vec3::new([4, 5, 6])).to_array(), [-3, 6, -3]);
    }

    #[test]
    fn test_perp_dot() {
        let x = Vector2::<f32>::X;
        let y = Vector2::<f32>::Y;

        assert_eq!(x.perp_dot(y), 1.0);
        assert_eq!(y.perp_dot(x), -1.0);
        assert_eq!(Vec2::new([2, 3]).perp_dot(Vec2::new([4, 6])), 0);
    }

    #[test]
    fn test_dot() {
        let a = Vector::new([2.0, -1.0, 0.5]);
        let b = Vector::new([4.0, 3.0, 8.0]);

        assert_eq!(a.dot(b), 9.0);
        assert_eq!(Vec4::splat(2).dot(Vec4::new([1, 2, 3, 4])), 20);
        assert_eq!((Vector4::X * 60.0f32).len_squared(), 3600.0);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_normalize() {
        assert_eq!((Vector4::X * 60.0f32).len(), 60.0);

        let mut v = Vector3::new([3.0f32, 0.0, 4.0]);
        v.normalize();

        assert_relative_eq!(v, Vector3::new([0.6, 0.0, 0.8]));
        assert_relative_eq!(v.len(), 1.0);

        let zero = Vector3::<f32>::ZERO;
        assert_eq!(zero.normalized(), Vector3::ZERO);
        assert_eq!(zero.normalized_checked(), None);
        assert!(zero.is_zero());
        assert!(!v.is_zero());

        assert!(Vector3::<f32>::Z.is_normalized());
        assert!((-Vector4::<f32>::W).is_normalized());
        assert!(!Vector3::new([3.0f32, 0.0, 4.0]).is_normalized());
        assert!(!zero.is_normalized());
    }

    #[test]
    fn test_arithmetic() {
        let mut v = Vec3f::new([1.0, 2.0, 3.0]);
        let u = Vec3f::new([0.5, -1.0, 2.0]);

        assert_eq!((v + u).to_array(), [1.5, 1.0, 5.0]);
        assert_eq!((v - u).to_array(), [0.5, 3.0, 1.0]);
        assert_eq!((-v).to_array(), [-1.0, -2.0, -3.0]);
        assert_eq!((v / 2.0).to_array(), [0.5, 1.0, 1.5]);

        v += u;
        v *= 2.0;
        assert_eq!(v.to_array(), [3.0, 2.0, 10.0]);

        v -= u;
        v /= 0.5;
        assert_eq!(v.to_array(), [5.0, 6.0, 16.0]);
    }

    #[test]
    fn test_lerp_clamp_min_max() {
        let a = Vector2::new([0.0, 10.0]);
        let b = Vector2::new([10.0, 20.0]);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5).to_array(), [5.0, 15.0]);

        let v = Vec4::new([-5, 2, 11, 7]);
        assert_eq!(v.clamp(0, 10).to_array(), [0, 2, 10, 7]);

        let u = Vec4::new([1, 1, 20, -7]);
        assert_eq!(v.min(u).to_array(), [-5, 1, 11, -7]);
        assert_eq!(v.max(u).to_array(), [1, 2, 20, 7]);
    }

    #[test]
    fn test_distance() {
        let a = Vector3::new([1.0f32, 2.0, 3.0]);
        let b = Vector3::new([4.0, 6.0, 3.0]);

        assert_eq!(a.distance_squared(b), 25.0);
        #[cfg(any(feature = "std", feature = "libm"))]
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_dimension_conversions() {
        let v2 = Vector2::new([1, 2]);
        let v3 = v2.extend(3);
        let v4 = v3.extend(4);

        assert_eq!(v3.to_array(), [1, 2, 3]);
        assert_eq!(v4.to_array(), [1, 2, 3, 4]);
        assert_eq!(v4.truncate(), v3);
        assert_eq!(v3.truncate(), v2);

        let homogeneous: Vector4<f32> = Vector3::new([5.0, 6.0, 7.0]).into();
        assert_eq!(homogeneous.to_array(), [5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn test_homogenize() {
        let v = Vector4::new([3.0f32, -6.0, 5.0, 3.0]).homogenized();
        assert_eq!(v.to_array(), [1.0, -2.0, 5.0, 3.0]);

        let v = Vector4::new([1.0f32, 0.0, 1.0, 0.0]).homogenized();
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());

        assert_eq!(Vec4::new([8, 4, 3, 2]).homogenized().to_array(), [4, 2, 3, 2]);
        assert_eq!(Vec4h::new([-9, 7, 1, 3]).homogenized().to_array(), [-3, 2, 1, 3]);
    }

    #[test]
    #[should_panic]
    fn test_integer_homogenize_zero_w() {
        let _ = Vec4::new([1, 2, 3, 0]).homogenized();
    }

    #[test]
    fn test_scalar_on_the_left() {
        assert_eq!((2.0f32 * Vec3f::new([1.0, -0.5, 4.0])).to_array(), [2.0, -1.0, 8.0]);
        assert_eq!((3 * Vec2::new([4, -2])).to_array(), [12, -6]);
        assert_eq!(0.5f64 * Vector2::new([2.0f64, 6.0]), Vector2::new([2.0, 6.0]) * 0.5);
    }

    #[test]
    fn test_checked_access() {
        let mut v = Vector3::new([1, 2, 3]);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
        assert!(v.get_mut(5).is_none());

        v[1] = 8;
        assert_eq!(v[1], 8);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vector2::new([1, 2]);
        let _ = v[2];
    }

    #[cfg(feature = "mint")]
    #[test]
    fn test_mint_conversions() {
        let mint_vector = mint::Vector3 { x: 1.0, y: 2.0, z: 3.0 };
        let vector: Vector3<f32> = mint_vector.into();

        assert_eq!(vector.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(mint::Vector3::from(vector), mint_vector);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let vector = Vector4::new([1.0f32, 2.0, 3.0, 4.0]);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");

        let back: Vector4<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);

        assert!(serde_json::from_str::<Vector4<f32>>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector4<f32>>("[1.0,2.0,3.0,4.0,5.0]").is_err());
    }
}
