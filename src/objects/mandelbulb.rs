use crate::color::RGBColor;
use crate::math::{Point3, Vec3};

/// A power-N mandelbulb, estimated with the usual escape-time construction:
/// iterate z -> z^power + c in spherical coordinates, track the running
/// derivative magnitude, and bound the true distance with
/// 0.5 * ln(r) * r / dr once the iterate escapes radius 2 (or the iteration
/// budget runs out).
///
/// Shading is a flat base color; surface detail comes entirely from the
/// silhouette the distance field produces.
#[derive(Clone, Debug)]
pub struct Mandelbulb {
    pub location: Point3,
    pub iterations: u32,
    pub power: f32,
    pub color: RGBColor,
}

impl Mandelbulb {
    pub fn new(location: Point3, iterations: u32, power: f32, color: RGBColor) -> Mandelbulb {
        Mandelbulb {
            location,
            iterations,
            power,
            color,
        }
    }

    pub fn distance(&self, point: Point3) -> f32 {
        let c = point - self.location;
        let mut z = c;
        let mut dr = 1.0f32;
        let mut r = 0.0f32;

        for _ in 0..self.iterations {
            r = z.norm();
            if r > 2.0 {
                break;
            }

            // to spherical coordinates
            let theta = (z.z / r).acos();
            let phi = z.y.atan2(z.x);
            dr = r.powf(self.power - 1.0) * self.power * dr + 1.0;

            // raise to the power: scale the radius, multiply the angles
            let zr = r.powf(self.power);
            let theta = theta * self.power;
            let phi = phi * self.power;

            // back to cartesian, plus the original offset
            z = Vec3::new(
                theta.sin() * phi.cos(),
                phi.sin() * theta.sin(),
                theta.cos(),
            ) * zr
                + c;
        }

        0.5 * r.ln() * r / dr
    }

    pub fn shade(&self, _hit: Point3, _direction: Vec3) -> RGBColor {
        self.color
    }
}
