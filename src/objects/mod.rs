mod mandelbulb;
mod tiled_sphere;

pub use mandelbulb::Mandelbulb;
pub use tiled_sphere::TiledSphere;

use crate::color::RGBColor;
use crate::math::{Point3, Vec3};

/// A surface defined by a distance function, plus the shading that goes with
/// it. Each variant owns its own typed parameters; dispatch is a match over
/// the capability set {distance, shade}.
///
/// Both functions are pure: no side effects, deterministic on identical
/// inputs. Objects are built once at scene-setup time and never mutated.
#[derive(Clone, Debug)]
pub enum SceneObject {
    TiledSphere(TiledSphere),
    Mandelbulb(Mandelbulb),
}

impl SceneObject {
    /// Approximate signed distance from `point` to this object's surface.
    /// May be negative inside the surface.
    pub fn distance(&self, point: Point3) -> f32 {
        match self {
            SceneObject::TiledSphere(inner) => inner.distance(point),
            SceneObject::Mandelbulb(inner) => inner.distance(point),
        }
    }

    /// Color for a ray that hit this object at `hit` while traveling along
    /// `direction`.
    pub fn shade(&self, hit: Point3, direction: Vec3) -> RGBColor {
        match self {
            SceneObject::TiledSphere(inner) => inner.shade(hit, direction),
            SceneObject::Mandelbulb(inner) => inner.shade(hit, direction),
        }
    }
}

impl From<TiledSphere> for SceneObject {
    fn from(inner: TiledSphere) -> Self {
        SceneObject::TiledSphere(inner)
    }
}

impl From<Mandelbulb> for SceneObject {
    fn from(inner: Mandelbulb) -> Self {
        SceneObject::Mandelbulb(inner)
    }
}
