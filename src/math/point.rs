use crate::math::Vec3;

use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, other: Vec3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign<Vec3> for Point3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, other: Vec3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign<Vec3> for Point3 {
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, other: Point3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(other: [f32; 3]) -> Point3 {
        Point3::new(other[0], other[1], other[2])
    }
}

impl Point3 {
    pub fn distance_to(&self, other: Point3) -> f32 {
        (*self - other).norm()
    }

    /// Wrap each coordinate into [0, modulus). Euclidean remainder, so
    /// negative coordinates wrap into the same canonical cell as positive
    /// ones. Used to tile a distance field across all of space.
    pub fn rem_euclid(&self, modulus: f32) -> Point3 {
        Point3::new(
            self.x.rem_euclid(modulus),
            self.y.rem_euclid(modulus),
            self.z.rem_euclid(modulus),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(0.0, 0.0, 1.0);
        let v = p - q;
        assert_eq!(v, Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(q + v, p);
    }

    #[test]
    fn test_distance_to() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(1.0, 1.0, 3.5);
        assert!((p.distance_to(q) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_rem_euclid_wraps_into_cell() {
        let m = 2.0;
        for p in [
            Point3::new(0.5, 1.999, 0.0),
            Point3::new(2.5, 4.0, 6.1),
            Point3::new(-0.5, -2.0, -7.3),
            Point3::new(-1e4, 1e4, 0.25),
        ] {
            let q = p.rem_euclid(m);
            for c in [q.x, q.y, q.z] {
                assert!((0.0..m).contains(&c), "{:?} wrapped to {:?}", p, q);
            }
        }
        // a point inside the canonical cell is unchanged
        let inside = Point3::new(0.25, 1.5, 0.75);
        assert_eq!(inside.rem_euclid(m), inside);
    }
}
