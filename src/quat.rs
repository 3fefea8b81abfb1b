use std::fmt;

use crate::{vec3, vec4, Matrix, Number, One, Real, Sqrt, Trig, Vector, Zero};

mod ops;
mod view;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary components and a real component.
///
/// Unit-length quaternions are used to represent rotations in 3D space: a rotation by angle
/// `θ` around the unit axis `v` is the quaternion `(v * sin(θ/2), cos(θ/2))`, as built by
/// [`Quat::from_axis_angle`].
///
/// Quaternions are represented like a 4-dimensional vector with `x`, `y`, `z` and `w`
/// components, where `w` is the real part. The [`Default`] value is [`Quat::IDENTITY`], the
/// rotation that leaves every vector unchanged.
///
/// Multiplication is the *Hamilton product*: `q1 * q0` is the rotation that applies `q0`
/// first and `q1` second. It is not commutative.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity: the quaternion that does not rotate anything.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the imaginary parts, while the `w`
    /// component corresponds to the real part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its four components.
    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components as a 4-dimensional [`Vector`] `(x, y, z, w)`.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must be a unit vector. It is *not* normalized here; passing a non-unit axis
    /// yields a quaternion that scales in addition to rotating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quatf::from_axis_angle(Vec3f::Z, TAU / 2.0);
    /// let v = q.rotate(vec3(1.0, 2.0, 0.0));
    /// assert!((v.x - -1.0).abs() < 1e-6);
    /// assert!((v.y - -2.0).abs() < 1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vector<T, 3>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        let (sin, cos) = (half.sin(), half.cos());
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::from_components(half.sin(), T::ZERO, T::ZERO, half.cos())
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::from_components(T::ZERO, half.sin(), T::ZERO, half.cos())
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        Self::from_components(T::ZERO, T::ZERO, half.sin(), half.cos())
    }

    /// Extracts a quaternion from a 3x3 rotation matrix.
    ///
    /// The matrix is assumed to be a proper rotation (orthonormal, determinant +1). Uses
    /// Shepperd's method: branching on the trace and the largest diagonal element keeps the
    /// divisor away from zero for every input rotation.
    pub fn from_rotation_matrix(mat: &Matrix<T, 3>) -> Self
    where
        T: Real,
    {
        let two = T::ONE + T::ONE;
        let quarter = Self::one_half() * Self::one_half();
        let (m00, m11, m22) = (mat[(0, 0)], mat[(1, 1)], mat[(2, 2)]);
        let trace = m00 + m11 + m22;

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * two; // s = 4w
            Self::from_components(
                (mat[(2, 1)] - mat[(1, 2)]) / s,
                (mat[(0, 2)] - mat[(2, 0)]) / s,
                (mat[(1, 0)] - mat[(0, 1)]) / s,
                quarter * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (T::ONE + m00 - m11 - m22).sqrt() * two; // s = 4x
            Self::from_components(
                quarter * s,
                (mat[(0, 1)] + mat[(1, 0)]) / s,
                (mat[(0, 2)] + mat[(2, 0)]) / s,
                (mat[(2, 1)] - mat[(1, 2)]) / s,
            )
        } else if m11 > m22 {
            let s = (T::ONE + m11 - m00 - m22).sqrt() * two; // s = 4y
            Self::from_components(
                (mat[(0, 1)] + mat[(1, 0)]) / s,
                quarter * s,
                (mat[(1, 2)] + mat[(2, 1)]) / s,
                (mat[(0, 2)] - mat[(2, 0)]) / s,
            )
        } else {
            let s = (T::ONE + m22 - m00 - m11).sqrt() * two; // s = 4z
            Self::from_components(
                (mat[(0, 2)] + mat[(2, 0)]) / s,
                (mat[(1, 2)] + mat[(2, 1)]) / s,
                quarter * s,
                (mat[(1, 0)] - mat[(0, 1)]) / s,
            )
        }
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, applying the quaternion to a vector will scale the
    /// vector in addition to rotating it.
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Like [`Vector::normalize`], the zero quaternion normalizes to itself.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the dot product of the components of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion: the vector part is negated, the real part
    /// kept.
    ///
    /// Conjugation is its own inverse, and for unit quaternions the conjugate represents the
    /// opposite rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let q = Quatf::from_components(1.0, -2.0, 3.0, 4.0);
    /// assert_eq!(q.conjugate(), Quatf::from_components(-1.0, 2.0, -3.0, 4.0));
    /// assert_eq!(q.conjugate().conjugate(), q);
    /// ```
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_components(-self.x, -self.y, -self.z, self.w)
    }

    /// Linearly interpolates the components of `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// The result is generally not unit length; normalize it if it is meant to be used as a
    /// rotation. See [`Quat::slerp`] for the constant-velocity alternative.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.vec.lerp(other.vec, t),
        }
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Interpolation always takes the shorter of the two arcs between the rotations (`q` and
    /// `-q` represent the same rotation). When the endpoints are nearly identical the
    /// spherical weights degenerate and a normalized [`lerp`][Quat::lerp] is used instead.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Real,
    {
        let mut dot = self.dot(other);
        let mut end = other;
        if dot < T::ZERO {
            dot = -dot;
            end = -end;
        }

        let theta = dot.min(T::ONE).acos();
        let sin_theta = theta.sin();
        if sin_theta <= T::EPSILON {
            return self.lerp(end, t).normalize();
        }

        let s0 = ((T::ONE - t) * theta).sin() / sin_theta;
        let s1 = (t * theta).sin() / sin_theta;
        Self::from_vec(self.vec * s0 + end.vec * s1)
    }

    /// Applies this rotation to a 3-dimensional vector.
    ///
    /// `self` must be a unit quaternion.
    pub fn rotate(self, v: Vector<T, 3>) -> Vector<T, 3>
    where
        T: Number,
    {
        let u = vec3(self.x, self.y, self.z);
        let t = u.cross(v) * (T::ONE + T::ONE);
        v + t * self.w + u.cross(t)
    }

    /// Writes this rotation into a 3x3 matrix.
    ///
    /// For any axis and angle, `Quat::from_axis_angle(axis, angle).to_mat3()` agrees with
    /// [`Matrix::from_axis_angle`] for the same axis and angle.
    pub fn to_mat3(&self) -> Matrix<T, 3>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2) = (x * two, y * two, z * two);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [T::ONE - (yy + zz), xy - wz,            xz + wy           ],
            [xy + wz,            T::ONE - (xx + zz), yz - wx           ],
            [xz - wy,            yz + wx,            T::ONE - (xx + yy)],
        ]);
        mat
    }

    /// Writes this rotation into a 4x4 homogeneous matrix.
    ///
    /// The upper-left 3x3 block is [`to_mat3`][Quat::to_mat3]; the remaining row and column
    /// are those of the identity.
    pub fn to_mat4(&self) -> Matrix<T, 4>
    where
        T: Number,
    {
        Matrix::from_mat3(self.to_mat3())
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// The identity quaternion.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quat")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .field(&self.w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use approx::assert_abs_diff_eq;

    use crate::{vec3, vec4, Mat3d, Mat4d, Vec3d};

    use super::*;

    fn random_unit_axis() -> Vec3d {
        loop {
            let v = vec3(
                fastrand::f64() * 2.0 - 1.0,
                fastrand::f64() * 2.0 - 1.0,
                fastrand::f64() * 2.0 - 1.0,
            );
            if v.length2() > 1e-3 {
                return v.normalize();
            }
        }
    }

    fn random_rotation() -> Quatd {
        Quat::from_axis_angle(random_unit_axis(), (fastrand::f64() - 0.5) * 2.0 * TAU)
    }

    #[test]
    fn identity() {
        assert_eq!(Quatd::default(), Quatd::IDENTITY);
        assert_eq!(Quatd::IDENTITY.into_vec(), vec4(0.0, 0.0, 0.0, 1.0));

        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!(Quatd::IDENTITY.rotate(v), v);
        assert_eq!(Quatd::IDENTITY.to_mat3(), Mat3d::IDENTITY);
        assert_eq!(Quatd::IDENTITY.to_mat4(), Mat4d::IDENTITY);
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", Quatf::IDENTITY),
            "Quat(0.0, 0.0, 0.0, 1.0)"
        );
        assert_eq!(format!("{}", Quatf::IDENTITY), "(0, 0, 0, 1)");
    }

    #[test]
    fn axis_angle() {
        // A quarter turn around X.
        let q = Quatd::from_axis_angle(Vec3d::X, TAU / 4.0);
        assert_abs_diff_eq!(q.x, 0.70710678, epsilon = 1e-6);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q.z, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q.w, 0.70710678, epsilon = 1e-6);

        assert_eq!(
            Quatd::from_rotation_x(0.8).into_vec(),
            Quatd::from_axis_angle(Vec3d::X, 0.8).into_vec(),
        );
        assert_eq!(
            Quatd::from_rotation_y(0.8).into_vec(),
            Quatd::from_axis_angle(Vec3d::Y, 0.8).into_vec(),
        );
        assert_eq!(
            Quatd::from_rotation_z(0.8).into_vec(),
            Quatd::from_axis_angle(Vec3d::Z, 0.8).into_vec(),
        );
    }

    #[test]
    fn matrix_conversion_matches_axis_angle_matrix() {
        // The central consistency property: building the rotation matrix through a quaternion
        // must agree with building it directly from the axis and angle.
        fastrand::seed(5);
        for _ in 0..100 {
            let axis = random_unit_axis();
            let angle = (fastrand::f64() - 0.5) * 2.0 * TAU;

            let via_quat = Quat::from_axis_angle(axis, angle).to_mat4();
            let direct = Mat4d::from_axis_angle(axis, angle);
            assert_abs_diff_eq!(via_quat, direct, epsilon = 1e-12);
        }
    }

    #[test]
    fn hamilton_product() {
        fastrand::seed(9);
        for _ in 0..100 {
            let q0 = random_rotation();
            let q1 = random_rotation();

            // Composition order: `q1 * q0` applies `q0` first.
            let v = vec3(
                fastrand::f64() * 2.0 - 1.0,
                fastrand::f64() * 2.0 - 1.0,
                fastrand::f64() * 2.0 - 1.0,
            );
            assert_abs_diff_eq!((q1 * q0).rotate(v), q1.rotate(q0.rotate(v)), epsilon = 1e-9);
            assert_abs_diff_eq!(
                (q1 * q0).to_mat3(),
                q1.to_mat3() * q0.to_mat3(),
                epsilon = 1e-12
            );
        }

        // Multiplying by the identity changes nothing.
        let q = Quatd::from_rotation_z(0.3);
        assert_abs_diff_eq!((q * Quatd::IDENTITY).into_vec(), q.into_vec(), epsilon = 1e-15);
        assert_abs_diff_eq!((Quatd::IDENTITY * q).into_vec(), q.into_vec(), epsilon = 1e-15);
    }

    #[test]
    fn rotation_matches_matrix() {
        fastrand::seed(13);
        for _ in 0..100 {
            let q = random_rotation();
            let v = vec3(
                fastrand::f64() * 4.0 - 2.0,
                fastrand::f64() * 4.0 - 2.0,
                fastrand::f64() * 4.0 - 2.0,
            );
            assert_abs_diff_eq!(q.to_mat3() * v, q.rotate(v), epsilon = 1e-12);
        }
    }

    #[test]
    fn conjugate_inverts_rotation() {
        fastrand::seed(17);
        for _ in 0..100 {
            let q = random_rotation();
            let v = vec3(fastrand::f64(), fastrand::f64(), fastrand::f64());
            assert_abs_diff_eq!(q.conjugate().rotate(q.rotate(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalization() {
        let q = Quatd::from_components(1.0, 2.0, -2.0, 4.0);
        assert_abs_diff_eq!(q.normalize().length(), 1.0, epsilon = 1e-12);
        assert_eq!(q.length2(), 25.0);
        assert_eq!(q.length(), 5.0);

        let zero = Quatd::from_components(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize().into_vec(), vec4(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_matrix_round_trip() {
        fastrand::seed(19);
        for _ in 0..100 {
            let mat = random_rotation().to_mat3();
            let recovered = Quat::from_rotation_matrix(&mat);
            assert_abs_diff_eq!(recovered.to_mat3(), mat, epsilon = 1e-9);
        }

        // Half-turns drive the trace to -1 and exercise the per-axis branches.
        for axis in [Vec3d::X, Vec3d::Y, Vec3d::Z] {
            let mat = Quat::from_axis_angle(axis, TAU / 2.0).to_mat3();
            let recovered = Quat::from_rotation_matrix(&mat);
            assert_abs_diff_eq!(recovered.to_mat3(), mat, epsilon = 1e-9);
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = Quatd::from_rotation_x(0.4);
        let b = Quatd::from_rotation_y(1.2);
        assert_abs_diff_eq!(a.lerp(b, 0.0).into_vec(), a.into_vec(), epsilon = 1e-15);
        assert_abs_diff_eq!(a.lerp(b, 1.0).into_vec(), b.into_vec(), epsilon = 1e-15);
    }

    #[test]
    fn slerp() {
        let a = Quatd::IDENTITY;
        let b = Quatd::from_rotation_y(TAU / 4.0);

        assert_abs_diff_eq!(a.slerp(b, 0.0).into_vec(), a.into_vec(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.slerp(b, 1.0).into_vec(), b.into_vec(), epsilon = 1e-12);

        // The halfway point of a quarter turn is an eighth turn.
        let expected = Quatd::from_rotation_y(TAU / 8.0);
        assert_abs_diff_eq!(a.slerp(b, 0.5).into_vec(), expected.into_vec(), epsilon = 1e-12);

        // Antipodal representations take the short way around.
        let c = -b;
        let mid = a.slerp(c, 0.5);
        assert_abs_diff_eq!(mid.to_mat3(), expected.to_mat3(), epsilon = 1e-12);

        // Interpolating a rotation with itself stays put.
        let same = b.slerp(b, 0.25);
        assert_abs_diff_eq!(same.into_vec(), b.into_vec(), epsilon = 1e-12);
    }
}
