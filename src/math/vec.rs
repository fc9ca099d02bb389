use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl Vec3 {
    pub fn cross(&self, other: Vec3) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length. Undefined for the zero vector (yields NaNs);
    /// callers must not normalize a zero vector.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Vec3::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Scale to the given length, keeping direction. Same zero-vector caveat
    /// as [`Vec3::normalized`].
    pub fn scaled_to(&self, length: f32) -> Self {
        let factor = length / self.norm();
        *self * factor
    }

    /// Interior angle between two vectors, in radians, in [0, π].
    pub fn angle_to(&self, other: Vec3) -> f32 {
        // the dot of two unit vectors can drift just past ±1.0
        (self.normalized() * other.normalized()).clamp(-1.0, 1.0).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalized_is_unit_length() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.001, 2000.0),
            Vec3::new(0.0, 0.0, -0.25),
            Vec3::new(1e-3, -1e-3, 1e-3),
        ] {
            assert!((v.normalized().norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_scaled_to() {
        let v = Vec3::new(3.0, 0.0, 4.0).scaled_to(10.0);
        assert!((v.norm() - 10.0).abs() < 1e-5);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.z - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(Vec3::X * Vec3::Y, 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    }

    #[test]
    fn test_angle_to() {
        assert!((Vec3::X.angle_to(Vec3::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!((Vec3::X.angle_to(-Vec3::X) - PI).abs() < 1e-6);
        // parallel vectors of different magnitude
        assert!(Vec3::new(2.0, 0.0, 0.0).angle_to(Vec3::new(0.5, 0.0, 0.0)) < 1e-3);
    }
}
