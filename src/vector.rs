use std::{array, fmt};

use crate::{
    traits::{Number, Sqrt},
    MinMax, One, Zero,
};

mod ops;
pub(crate) mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`i64`] elements.
pub type Vec2l = Vec2<i64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`i64`] elements.
pub type Vec3l = Vec3<i64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`i64`] elements.
pub type Vec4l = Vec4<i64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are the unit vectors along each axis.
/// - The [`Default`] implementation yields the zero vector, except for 4-dimensional vectors
///   with real elements, which default to `(0, 0, 0, 1)`: the origin of homogeneous space,
///   so that a default 4-vector is a *point* rather than a direction.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays; indexing out of
///   bounds panics.
/// - [`Vector::as_array`], [`Vector::as_slice`] and their `mut` counterparts, as well as
///   [`Vector::into_array`], expose the underlying elements directly.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    ///
    /// This doubles as the origin of homogeneous space: a point at `(0, 0, 0)` with weight 1.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction to preserve, so it normalizes to itself instead of
    /// producing NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length == T::ZERO {
            self
        } else {
            self / length
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[i] * other[i])
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vec2(1.0, 2.0).distance(vec2(1.0, -2.0)), 4.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Computed as `self + (other - self) * t`, which reproduces the endpoints exactly, even
    /// for integer element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = vec2(0.0, -8.0);
    /// let b = vec2(4.0, 8.0);
    /// assert_eq!(a.lerp(b, 0.0), a);
    /// assert_eq!(a.lerp(b, 1.0), b);
    /// assert_eq!(a.lerp(b, 0.5), vec2(2.0, 0.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Returns `self + other * s` in a single call.
    pub fn add_scaled(self, other: Self, s: T) -> Self
    where
        T: Number,
    {
        self + other * s
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// This clamps each element of `self` from above by the corresponding element of `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// This clamps each element of `self` from below by the corresponding element of `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-5, 2, 9);
    /// let lo = vec3(0, 0, 0);
    /// let hi = vec3(4, 4, 4);
    /// assert_eq!(v.clamp(lo, hi), vec3(0, 2, 4));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Clamps every element of `self` into the range `[min, max]`.
    pub fn clamp_scalar(self, min: T, max: T) -> Self
    where
        T: MinMax + Copy,
    {
        self.map(|elem| elem.clamp(min, max))
    }

    /// Returns the component of `self` that points along `onto`.
    ///
    /// Projecting onto a perpendicular vector (or onto the zero vector) yields the zero
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec2(3.0, 4.0);
    /// assert_eq!(v.project_onto(vec2(2.0, 0.0)), vec2(3.0, 0.0));
    /// assert_eq!(Vec2f::X.project_onto(Vec2f::Y), Vec2f::ZERO);
    /// ```
    pub fn project_onto(self, onto: Self) -> Self
    where
        T: Number,
    {
        let denom = onto.length2();
        if denom == T::ZERO {
            Self::ZERO
        } else {
            onto * (self.dot(onto) / denom)
        }
    }

    /// Derives a pair of perpendicular unit vectors from `a` and `b` via Gram-Schmidt.
    ///
    /// The first output is `a.normalize()`; the second is the direction of `b` with its
    /// component along `a` removed.
    pub fn orthonormalize(a: Self, b: Self) -> (Self, Self)
    where
        T: Number + Sqrt,
    {
        let u = a.normalize();
        let v = (b - b.project_onto(u)).normalize();
        (u, v)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T: Zero> Default for Vector<T, 2> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Zero> Default for Vector<T, 3> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// 4-dimensional vectors follow the homogeneous-point convention for real elements: the
// default is `(0, 0, 0, 1)`. Integer 4-vectors are plain tuples and default to zero.
macro_rules! homogeneous_default {
    ($($real:ty),+) => {
        $(
            impl Default for Vector<$real, 4> {
                #[inline]
                fn default() -> Self {
                    Self::W
                }
            }
        )+
    };
}
homogeneous_default!(f32, f64);

macro_rules! zero_default {
    ($($int:ty),+) => {
        $(
            impl Default for Vector<$int, 4> {
                #[inline]
                fn default() -> Self {
                    Self::ZERO
                }
            }
        )+
    };
}
zero_default!(i32, i64);

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let _ = vec2(1, 2)[2];
    }

    #[test]
    fn defaults() {
        assert_eq!(Vec2i::default(), Vec2i::ZERO);
        assert_eq!(Vec3d::default(), Vec3d::ZERO);
        // Real 4-vectors default to a homogeneous point, integer ones to zero.
        assert_eq!(Vec4f::default(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vec4d::default(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vec4i::default(), Vec4i::ZERO);
        assert_eq!(Vec4l::default(), Vec4l::ZERO);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(1, -2)), "(1, -2)");
    }

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(10, 20, 30);
        assert_eq!(a + b, vec3(11, 22, 33));
        assert_eq!(b - a, vec3(9, 18, 27));
        assert_eq!(-a, vec3(-1, -2, -3));
        assert_eq!(a * 2, vec3(2, 4, 6));
        assert_eq!(b / 10, vec3(1, 2, 3));
        assert_eq!(a.add_scaled(b, 2), vec3(21, 42, 63));

        let mut c = a;
        c += b;
        assert_eq!(c, vec3(11, 22, 33));
        c -= a;
        assert_eq!(c, b);
        c *= 3;
        assert_eq!(c, vec3(30, 60, 90));
        c /= 3;
        assert_eq!(c, b);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        // Parallel vectors have no cross product.
        assert_eq!(vec3(2, 4, 6).cross(vec3(1, 2, 3)), Vec3i::ZERO);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec2(1.0, 2.0).distance(vec2(1.0, -2.0)), 4.0);
        assert_eq!(vec2(1.0, 2.0).distance2(vec2(1.0, -2.0)), 16.0);
        assert_eq!(vec2(-1.0, 0.0).distance(vec2(2.0, 4.0)), 5.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3d::Z);
        assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);

        fastrand::seed(7);
        for _ in 0..100 {
            let v = vec3(
                fastrand::f64() * 20.0 - 10.0,
                fastrand::f64() * 20.0 - 10.0,
                fastrand::f64() * 20.0 - 10.0,
            );
            if v.length2() == 0.0 {
                continue;
            }
            assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn lerp_endpoints() {
        // Integer endpoints are reproduced exactly.
        let a = vec3(1, -2, 3);
        let b = vec3(-40, 50, -60);
        assert_eq!(a.lerp(b, 0), a);
        assert_eq!(a.lerp(b, 1), b);

        let p = vec4(0.25, -1.5, 3.75, 1.0);
        let q = vec4(8.5, 0.5, -2.25, 1.0);
        assert_eq!(p.lerp(q, 0.0), p);
        assert_eq!(p.lerp(q, 1.0), q);
        assert_relative_eq!(p.lerp(q, 0.5), (p + q) * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn clamping() {
        let v = vec3(-5, 2, 9);
        assert_eq!(v.min(Vector::splat(4)), vec3(-5, 2, 4));
        assert_eq!(v.max(Vector::splat(0)), vec3(0, 2, 9));
        assert_eq!(v.clamp(Vector::splat(0), Vector::splat(4)), vec3(0, 2, 4));
        assert_eq!(v.clamp_scalar(0, 4), vec3(0, 2, 4));

        let f = vec2(1.5, -0.25);
        assert_eq!(f.clamp_scalar(0.0, 1.0), vec2(1.0, 0.0));
    }

    #[test]
    fn projection() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.project_onto(vec2(10.0, 0.0)), vec2(3.0, 0.0));
        // Projecting onto a perpendicular vector yields the zero vector.
        assert_eq!(Vec2d::X.project_onto(Vec2d::Y), Vec2d::ZERO);
        // ... as does projecting onto the zero vector.
        assert_eq!(v.project_onto(Vec2d::ZERO), Vec2d::ZERO);
    }

    #[test]
    fn orthonormalization() {
        let (u, v) = Vector::orthonormalize(vec3(2.0, 0.0, 0.0), vec3(3.0, 5.0, 0.0));
        assert_eq!(u, Vec3d::X);
        assert_abs_diff_eq!(v, Vec3d::Y, epsilon = 1e-12);

        fastrand::seed(11);
        for _ in 0..100 {
            let a = vec3(fastrand::f64() - 0.5, fastrand::f64() - 0.5, fastrand::f64() - 0.5);
            let b = vec3(fastrand::f64() - 0.5, fastrand::f64() - 0.5, fastrand::f64() - 0.5);
            if a.length2() < 1e-3 || a.cross(b).length2() < 1e-3 {
                continue;
            }
            let (u, v) = Vector::orthonormalize(a, b);
            assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(u.dot(v), 0.0, epsilon = 1e-9);
            // The first output keeps the direction of the first input.
            assert_abs_diff_eq!(u.dot(a.normalize()), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }
}
