use crate::math::Vec3;

use std::ops::Mul;

/// A 3x3 linear map, stored row-major. Only ever built as a rotation, via
/// [`Matrix3::rotation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
    entries: [f32; 9],
}

impl Matrix3 {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Matrix3 {
        Matrix3 {
            entries: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Rotation by `degrees` around `axis`. The axis must be unit length.
    // https://en.wikipedia.org/wiki/Rotation_matrix#Rotation_matrix_from_axis_and_angle
    pub fn rotation(axis: Vec3, degrees: f32) -> Matrix3 {
        let theta = degrees.to_radians();
        let cost = theta.cos();
        let sint = theta.sin();
        let Vec3 { x: ux, y: uy, z: uz } = axis;

        Matrix3::new(
            cost + ux * ux * (1.0 - cost),
            ux * uy * (1.0 - cost) - uz * sint,
            ux * uz * (1.0 - cost) + uy * sint,
            uy * ux * (1.0 - cost) + uz * sint,
            cost + uy * uy * (1.0 - cost),
            uy * uz * (1.0 - cost) - ux * sint,
            uz * ux * (1.0 - cost) - uy * sint,
            uz * uy * (1.0 - cost) + ux * sint,
            cost + uz * uz * (1.0 - cost),
        )
    }
}

impl Mul<Vec3> for Matrix3 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.entries;
        Vec3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).norm() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_rotation_is_isometry() {
        let axis = Vec3::new(1.0, 2.0, -0.5).normalized();
        for degrees in [0.0, 12.5, 90.0, 180.0, 270.0, 359.0, -45.0] {
            let rot = Matrix3::rotation(axis, degrees);
            for v in [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-3.0, 5.0, 0.125),
                Vec3::new(0.0, 0.0, 7.0),
            ] {
                assert!(((rot * v).norm() - v.norm()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_rotation_quarter_turns() {
        let rot = Matrix3::rotation(Vec3::Z, 90.0);
        assert_close(rot * Vec3::X, Vec3::Y);
        assert_close(rot * Vec3::Y, -Vec3::X);
        // the axis itself is fixed
        assert_close(rot * Vec3::Z, Vec3::Z);

        let rot = Matrix3::rotation(Vec3::X, 90.0);
        assert_close(rot * Vec3::Y, Vec3::Z);
    }

    #[test]
    fn test_rotation_composes_to_identity() {
        let axis = Vec3::new(0.0, 1.0, 1.0).normalized();
        let forward = Matrix3::rotation(axis, 30.0);
        let back = Matrix3::rotation(axis, -30.0);
        let v = Vec3::new(0.7, -0.2, 0.4);
        assert_close(back * (forward * v), v);
    }
}
