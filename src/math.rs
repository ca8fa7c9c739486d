//! Column major linear algebra for the renderer.
//!
//! Matrices multiply column vectors on their right, `m * v`, and are laid out
//! the way OpenGL expects its uniforms. Rotation helpers take degrees.

pub mod angle;
pub mod matrix;
pub mod vector;

pub use angle::{degrees, radians, Deg, Rad, PI};
pub use matrix::Invertible;

pub type Vector2 = vector::Vector<f32, 2>;
pub type Vector3 = vector::Vector<f32, 3>;
pub type Vector4 = vector::Vector<f32, 4>;

pub type Matrix2 = matrix::Matrix<f32, 2>;
pub type Matrix3 = matrix::Matrix<f32, 3>;
pub type Matrix4 = matrix::Matrix<f32, 4>;

/// Returns a unit length copy of `vec`, which must not be the zero vector.
pub fn normalize<const N: usize>(vec: vector::Vector<f32, N>) -> vector::Vector<f32, N> {
    vec.normalized()
}

pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(b)
}

/// Right handed cross product, perpendicular to both `a` and `b`.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

pub fn identity_mat2() -> Matrix2 {
    Matrix2::unit()
}

pub fn identity_mat3() -> Matrix3 {
    Matrix3::unit()
}

pub fn identity_mat4() -> Matrix4 {
    Matrix4::unit()
}

/// Unit matrix with `t` in the first three rows of the fourth column.
pub fn translation(t: Vector3) -> Matrix4 {
    Matrix4::from_translation(t)
}

/// Diagonal matrix scaling each axis by the matching component of `s`.
pub fn scale(s: Vector3) -> Matrix4 {
    Matrix4::from_diag(s.extend(1.))
}

pub fn rotation_x(angle: f32) -> Matrix4 {
    Matrix4::from_angle_x(Deg(angle))
}

pub fn rotation_y(angle: f32) -> Matrix4 {
    Matrix4::from_angle_y(Deg(angle))
}

pub fn rotation_z(angle: f32) -> Matrix4 {
    Matrix4::from_angle_z(Deg(angle))
}

/// Rotation about all three axes by the angles in `r`, in degrees.
///
/// Applies the x rotation first and the z rotation last: `Rz * Ry * Rx`.
pub fn rotation(r: Vector3) -> Matrix4 {
    rotation_z(r.z()) * rotation_y(r.y()) * rotation_x(r.x())
}

/// Inverse of a square matrix of any supported dimension.
///
/// `m` must not be singular; use [`Invertible::try_inverse`] when that is not known.
pub fn inverse<M: Invertible>(m: M) -> M {
    m.inverse()
}

pub fn try_inverse<M: Invertible>(m: M) -> Option<M> {
    m.try_inverse()
}

pub fn transpose<T: Default + Copy, const M: usize>(m: matrix::Matrix<T, M>) -> matrix::Matrix<T, M> {
    m.transposed()
}

pub fn look_at(eye: Vector3, at: Vector3, up: Vector3) -> Matrix4 {
    Matrix4::look_at(eye, at, up)
}

/// Perspective matrix for a symmetric frustum, mapping depth into -1..1 like OpenGL.
pub fn perspective<F>(fovy: F, aspect: f32, near: f32, far: f32) -> Matrix4
where
    F: Into<Rad<f32>>,
{
    let y_scale = 1. / (0.5 * fovy.into().0).tan();
    let x_scale = y_scale / aspect;
    let near_minus_far = near - far;
    Matrix4::from([
        [x_scale, 0., 0., 0.],
        [0., y_scale, 0., 0.],
        [0., 0., (far + near) / near_minus_far, -1.],
        [0., 0., 2. * far * near / near_minus_far, 0.],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn samples() -> [Vector3; 5] {
        [
            Vector3::from([1., 2., 3.]),
            Vector3::from([-4., 0.5, 2.]),
            Vector3::from([0., 0., -7.]),
            Vector3::from([0.3, -0.1, 0.9]),
            Vector3::from([10., 10., -10.]),
        ]
    }

    fn invertible4() -> Matrix4 {
        translation(Vector3::from([1., -2., 3.]))
            * rotation(Vector3::from([30., 45., -60.]))
            * scale(Vector3::from([2., 0.5, 3.]))
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in samples() {
            assert_relative_eq!(normalize(v).magnitude(), 1., max_relative = 1e-6);
        }
        assert_eq!(normalize(Vector2::from([0., -3.])), [0., -1.].into());
        assert_eq!(normalize(Vector4::from([2., 0., 0., 0.])), [1., 0., 0., 0.].into());
    }

    #[test]
    fn cross_is_perpendicular() {
        for a in samples() {
            for b in samples() {
                let c = cross(a, b);
                assert_abs_diff_eq!(dot(c, a), 0., epsilon = 1e-3);
                assert_abs_diff_eq!(dot(c, b), 0., epsilon = 1e-3);
            }
        }
        let x = Vector3::from([1., 0., 0.]);
        let y = Vector3::from([0., 1., 0.]);
        assert_eq!(cross(x, y), [0., 0., 1.].into());
    }

    #[test]
    fn transpose_twice_is_identity() {
        let m2 = Matrix2::from_flat([1., 2., 3., 4.]);
        let m3 = Matrix3::from_flat([1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        let m4 = invertible4();
        assert_eq!(transpose(transpose(m2)), m2);
        assert_eq!(transpose(transpose(m3)), m3);
        assert_eq!(transpose(transpose(m4)), m4);
        assert_eq!(transpose(m2), Matrix2::from_flat([1., 3., 2., 4.]));

        let mut m = m4;
        m.transpose();
        assert_eq!(m, transpose(m4));
    }

    #[test]
    fn inverse_of_each_rank() {
        let m2 = Matrix2::from([[3., 1.], [2., 4.]]);
        assert_abs_diff_eq!(m2 * inverse(m2), identity_mat2(), epsilon = 1e-6);
        assert_abs_diff_eq!(inverse(inverse(m2)), m2, epsilon = 1e-5);

        let m3: Matrix3 = rotation(Vector3::from([10., 20., 30.])).into();
        assert_abs_diff_eq!(m3 * inverse(m3), identity_mat3(), epsilon = 1e-6);
        assert_abs_diff_eq!(inverse(m3), transpose(m3), epsilon = 1e-6);

        let m4 = invertible4();
        assert_abs_diff_eq!(m4 * inverse(m4), identity_mat4(), epsilon = 1e-5);
        assert_abs_diff_eq!(inverse(inverse(m4)), m4, epsilon = 1e-4);

        assert_eq!(try_inverse(Matrix2::from([[1., 2.], [2., 4.]])), None);
        assert_eq!(try_inverse(Matrix4::diag(0.)), None);
    }

    #[test]
    fn inverse_dispatches_by_rank() {
        let m2 = Matrix2::from([[3., 1.], [2., 4.]]);
        let m3 = Matrix3::from([[2., 0., 1.], [1., 3., 2.], [1., 1., 4.]]);
        let m4 = invertible4();
        assert_eq!(inverse(m2), m2.inverse());
        assert_eq!(inverse(m3), m3.inverse());
        assert_eq!(inverse(m4), m4.inverse());
        assert_eq!(try_inverse(m3), Some(inverse(m3)));
    }

    #[test]
    fn identity_keeps_vectors() {
        for v in samples() {
            let v = Vector4::from(v);
            assert_eq!(identity_mat4() * v, v);
        }
        assert_eq!(identity_mat4(), Matrix4::default());
        assert_eq!(identity_mat3(), Matrix3::default());
        assert_eq!(identity_mat2(), Matrix2::default());
    }

    #[test]
    fn translation_and_scale() {
        let t = translation(Vector3::from([1., 2., 3.]));
        assert_eq!(t * Vector4::from([0., 0., 0., 1.]), [1., 2., 3., 1.].into());
        assert_eq!(t[3], [1., 2., 3., 1.].into());
        assert_eq!(t * Vector4::from([1., 1., 1., 0.]), [1., 1., 1., 0.].into());

        let s = scale(Vector3::from([2., 3., 4.]));
        assert_eq!(s * Vector4::from([1., 1., 1., 1.]), [2., 3., 4., 1.].into());
        assert_eq!(s, Matrix4::from_flat([
            2., 0., 0., 0.,
            0., 3., 0., 0.,
            0., 0., 4., 0.,
            0., 0., 0., 1.,
        ]));
    }

    #[test]
    fn single_axis_rotations() {
        for angle in [-120., -30., 0., 15., 90., 400.] {
            assert_eq!(rotation(Vector3::from([angle, 0., 0.])), rotation_x(angle));
            assert_eq!(rotation(Vector3::from([0., angle, 0.])), rotation_y(angle));
            assert_eq!(rotation(Vector3::from([0., 0., angle])), rotation_z(angle));
        }
    }

    #[test]
    fn rotation_order() {
        let r = Vector3::from([30., 45., 60.]);
        assert_eq!(rotation(r), rotation_z(60.) * rotation_y(45.) * rotation_x(30.));
        assert_ne!(rotation(r), rotation_x(30.) * rotation_y(45.) * rotation_z(60.));
    }

    #[test]
    fn rotation_by_degrees() {
        assert_eq!(rotation_x(30.), Matrix4::from_angle_x(Deg(30.)));
        assert_eq!(rotation_y(30.), Matrix4::from_angle_y(Deg(30.)));
        assert_eq!(rotation_z(30.), Matrix4::from_angle_z(Rad(radians(30.))));
        assert_relative_eq!(degrees(radians(30.)), 30., max_relative = 1e-6);

        let (s, c) = radians(30.).sin_cos();
        assert_eq!(rotation_x(30.)[(1, 1)], c);
        assert_eq!(rotation_x(30.)[(1, 2)], s);
        assert_eq!(rotation_x(30.)[(2, 1)], -s);
        assert_eq!(rotation_y(30.)[(0, 2)], -s);
        assert_eq!(rotation_z(30.)[(0, 1)], s);
    }

    #[test]
    fn perspective_fixture() {
        let p = perspective(Rad(radians(90.)), 1., 0.1, 100.);
        let expected = Matrix4::from_flat([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., -100.1 / 99.9, -1.,
            0., 0., -20. / 99.9, 0.,
        ]);
        assert_relative_eq!(p, expected, max_relative = 1e-6);
        assert_eq!(p[(2, 3)], -1.);
        assert_eq!(p[(3, 3)], 0.);

        let p = perspective(Deg(90.), 2., 0.1, 100.);
        assert_relative_eq!(p[(0, 0)], 0.5, max_relative = 1e-6);
    }

    #[test]
    fn perspective_maps_clip_planes() {
        let p = perspective(Deg(67.), 1.5, 0.1, 100.);
        let near = p * Vector4::from([0., 0., -0.1, 1.]);
        let far = p * Vector4::from([0., 0., -100., 1.]);
        assert_relative_eq!(near.z() / near.w(), -1., max_relative = 1e-5);
        assert_relative_eq!(far.z() / far.w(), 1., max_relative = 1e-5);
    }

    #[test]
    fn look_at_is_independent_utility() {
        let eye = Vector3::from([0., 0., 5.]);
        let view = look_at(eye, Vector3::default(), Vector3::from([0., 1., 0.]));
        assert_abs_diff_eq!(view * Vector4::from(eye), Vector4::from([0., 0., 0., 1.]), epsilon = 1e-6);
        assert_abs_diff_eq!(view[3], Vector4::from([0., 0., 5., 1.]), epsilon = 1e-6);
    }
}
