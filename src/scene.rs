use crate::color::RGBColor;
use crate::math::Point3;
use crate::objects::SceneObject;

use anyhow::{bail, Result};

/// An ordered collection of distance-field objects plus the global render
/// parameters. Object order is irrelevant to the image but stable, so the
/// closest-surface comparison is deterministic.
#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    capacity: usize,
    pub width: usize,
    pub height: usize,
    pub max_steps: usize,
    pub threshold: f32,
    pub background: RGBColor,
}

impl Scene {
    /// Both scan strategies divide by (width - 1) to space their columns, so
    /// single-column images are rejected here rather than producing NaN rays.
    pub fn new(width: usize, height: usize, capacity: usize) -> Result<Scene> {
        if width < 2 || height == 0 {
            bail!("scene dimensions {}x{} are degenerate", width, height);
        }
        Ok(Scene {
            objects: Vec::with_capacity(capacity),
            capacity,
            width,
            height,
            max_steps: 1000,
            threshold: 1e-4,
            background: RGBColor::WHITE,
        })
    }

    /// Add an object to the scene. Fails once the declared capacity is
    /// reached; the scene never silently drops an object.
    pub fn add_object(&mut self, object: impl Into<SceneObject>) -> Result<()> {
        if self.objects.len() >= self.capacity {
            bail!(
                "scene is full: capacity of {} objects already reached",
                self.capacity
            );
        }
        self.objects.push(object.into());
        Ok(())
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// The closest object to `point` and its distance: the minimum over all
    /// objects' distance functions. Ties keep the earliest-added object.
    /// `None` for an empty scene.
    pub fn nearest(&self, point: Point3) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, object) in self.objects.iter().enumerate() {
            let distance = object.distance(point);
            if best.map_or(true, |(_, nearest)| distance < nearest) {
                best = Some((index, distance));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::TiledSphere;

    fn sphere_at(x: f32, radius: f32) -> TiledSphere {
        // period large enough that tiling is irrelevant in these tests
        TiledSphere::new(Point3::new(x, 0.0, 0.0), radius, 1000.0, RGBColor::WHITE)
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut scene = Scene::new(16, 16, 2).unwrap();
        scene.add_object(sphere_at(1.0, 0.5)).unwrap();
        scene.add_object(sphere_at(2.0, 0.5)).unwrap();
        assert!(scene.add_object(sphere_at(3.0, 0.5)).is_err());
        assert_eq!(scene.objects().len(), 2);
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert!(Scene::new(1, 16, 4).is_err());
        assert!(Scene::new(16, 0, 4).is_err());
        assert!(Scene::new(2, 1, 4).is_ok());
    }

    #[test]
    fn test_nearest_selects_minimizer() {
        let mut scene = Scene::new(16, 16, 4).unwrap();
        scene.add_object(sphere_at(10.0, 1.0)).unwrap();
        scene.add_object(sphere_at(3.0, 1.0)).unwrap();

        let (index, distance) = scene.nearest(Point3::ORIGIN).unwrap();
        assert_eq!(index, 1);
        assert!((distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_empty_scene() {
        let scene = Scene::new(16, 16, 4).unwrap();
        assert!(scene.nearest(Point3::ORIGIN).is_none());
    }
}
