use crate::color::RGBColor;
use crate::math::{Point3, Vec3};

/// A sphere repeated every `period` units along all three axes. The query
/// point is wrapped into the canonical [0, period) cell before measuring
/// distance to `center`, so a single object fills all of space with copies.
///
/// Shading darkens the base color as the impact gets shallower: the angle
/// between the incoming ray and the direction from the hit point to the
/// sphere's center, folded into [0°, 90°], is blended toward black over
/// `falloff` degrees.
#[derive(Clone, Debug)]
pub struct TiledSphere {
    pub center: Point3,
    pub radius: f32,
    pub period: f32,
    pub color: RGBColor,
    pub falloff: f32,
}

impl TiledSphere {
    pub fn new(center: Point3, radius: f32, period: f32, color: RGBColor) -> TiledSphere {
        TiledSphere {
            center,
            radius,
            period,
            color,
            falloff: 120.0,
        }
    }

    pub fn distance(&self, point: Point3) -> f32 {
        point.rem_euclid(self.period).distance_to(self.center) - self.radius
    }

    pub fn shade(&self, hit: Point3, direction: Vec3) -> RGBColor {
        let to_center = self.center - hit.rem_euclid(self.period);

        let mut angle = direction.angle_to(to_center).to_degrees();
        if angle > 90.0 {
            angle = 180.0 - angle;
        }

        self.color.mix(RGBColor::BLACK, angle / self.falloff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_in_home_cell() {
        let sphere = TiledSphere::new(Point3::new(1.0, 1.0, 1.0), 0.2, 2.0, RGBColor::WHITE);
        // cell center is radius away from the surface
        assert!((sphere.distance(Point3::new(1.0, 1.0, 1.0)) + 0.2).abs() < 1e-6);
        // a point on the surface
        assert!(sphere.distance(Point3::new(1.2, 1.0, 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_distance_tiles_everywhere() {
        let sphere = TiledSphere::new(Point3::new(1.0, 1.0, 1.0), 0.2, 2.0, RGBColor::WHITE);
        let home = sphere.distance(Point3::new(1.5, 1.0, 1.0));
        // shifted by whole periods, including into negative space
        assert!((sphere.distance(Point3::new(3.5, 5.0, -1.0)) - home).abs() < 1e-5);
        assert!((sphere.distance(Point3::new(-0.5, -3.0, 7.0)) - home).abs() < 1e-5);
    }

    #[test]
    fn test_head_on_hit_keeps_base_color() {
        let red = RGBColor::new(255, 0, 0);
        let sphere = TiledSphere::new(Point3::new(1.0, 1.0, 1.0), 0.2, 2.0, red);
        // ray traveling +x hits the near side of the sphere dead center
        let hit = Point3::new(0.8, 1.0, 1.0);
        assert_eq!(sphere.shade(hit, Vec3::X), red);
    }

    #[test]
    fn test_grazing_hit_is_darker() {
        let red = RGBColor::new(255, 0, 0);
        let sphere = TiledSphere::new(Point3::new(1.0, 1.0, 1.0), 0.2, 2.0, red);
        // hit on the "top" of the sphere while traveling +x: the ray is at
        // 90 degrees to the center direction
        let grazing = sphere.shade(Point3::new(1.0, 1.0, 1.2), Vec3::X);
        assert!(grazing.r < red.r);
        assert_eq!(grazing.g, 0);
        assert_eq!(grazing.b, 0);
    }
}
