use crate::color::RGBColor;
use crate::math::{Point3, Vec3};
use crate::scene::Scene;

/// Outcome of marching a single ray through a scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    /// The ray came within the scene's hit threshold of a surface.
    Hit {
        point: Point3,
        /// Index of the owning object (the distance minimizer) in the scene.
        object: usize,
    },
    /// The step budget ran out without approaching any surface.
    Miss,
}

/// Sphere-trace a ray: repeatedly advance by the distance to the nearest
/// surface until that distance drops to the scene threshold or the step
/// budget is exhausted. These are the only two ways out of the loop.
///
/// The step is taken at face value even when a distance function reports a
/// negative value (possible inside a surface), which moves the ray backward.
/// That matches the field definitions above; clamping here would change
/// which rays hit.
pub fn march(scene: &Scene, origin: Point3, direction: Vec3) -> MarchResult {
    let mut point = origin;
    for _ in 0..scene.max_steps {
        let Some((object, distance)) = scene.nearest(point) else {
            // nothing in the scene to hit
            return MarchResult::Miss;
        };
        if distance <= scene.threshold {
            return MarchResult::Hit { point, object };
        }
        point += direction * distance;
    }
    MarchResult::Miss
}

/// March a ray and resolve its color: the owning object's shading on a hit,
/// the scene background on a miss.
pub fn trace(scene: &Scene, origin: Point3, direction: Vec3) -> RGBColor {
    match march(scene, origin, direction) {
        MarchResult::Hit { point, object } => scene.objects()[object].shade(point, direction),
        MarchResult::Miss => scene.background,
    }
}
