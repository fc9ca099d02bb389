pub mod config;

pub use config::{CameraSettings, ObjectSettings, Resolution, ScanSettings, TOMLConfig};

use crate::camera::{Camera, ScanStrategy};
use crate::color::RGBColor;
use crate::math::Point3;
use crate::objects::{Mandelbulb, TiledSphere};
use crate::scene::Scene;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub fn get_settings(filepath: impl AsRef<Path>) -> Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath.display()))?;

    let mut settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("couldn't parse config file {}", filepath.display()))?;

    if settings.threads.is_none() {
        settings.threads = Some(num_cpus::get() as i32);
    }
    Ok(settings)
}

pub fn construct_scene(settings: &TOMLConfig) -> Result<Scene> {
    let capacity = settings.capacity.unwrap_or(settings.objects.len());
    let mut scene = Scene::new(
        settings.resolution.width,
        settings.resolution.height,
        capacity,
    )?;
    if let Some(max_steps) = settings.max_steps {
        scene.max_steps = max_steps;
    }
    if let Some(threshold) = settings.threshold {
        scene.threshold = threshold;
    }
    if let Some(background) = settings.background {
        scene.background = RGBColor::from(background);
    }

    for object in &settings.objects {
        match object {
            ObjectSettings::TiledSphere {
                location,
                radius,
                period,
                color,
                falloff,
            } => {
                let mut sphere = TiledSphere::new(
                    Point3::from(*location),
                    *radius,
                    *period,
                    RGBColor::from(*color),
                );
                if let Some(falloff) = falloff {
                    sphere.falloff = *falloff;
                }
                scene.add_object(sphere)?;
            }
            ObjectSettings::Mandelbulb {
                location,
                iterations,
                power,
                color,
            } => {
                scene.add_object(Mandelbulb::new(
                    Point3::from(*location),
                    *iterations,
                    *power,
                    RGBColor::from(*color),
                ))?;
            }
        }
    }
    Ok(scene)
}

pub fn construct_camera(settings: &TOMLConfig) -> Result<Camera> {
    match settings.camera {
        CameraSettings::LookAt {
            look_from,
            look_at,
            fov,
        } => Camera::look_at(Point3::from(look_from), Point3::from(look_at), fov),
    }
}

impl From<ScanSettings> for ScanStrategy {
    fn from(settings: ScanSettings) -> ScanStrategy {
        match settings {
            ScanSettings::ConstantAngle => ScanStrategy::ConstantAngle,
            ScanSettings::ConstantDistance => ScanStrategy::ConstantDistance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::SceneObject;

    #[test]
    fn test_parsing_shipped_configs() {
        for path in ["data/config.toml", "data/mandelbulb.toml"] {
            let settings = get_settings(path).unwrap();
            assert!(settings.threads.unwrap() > 0);
            assert!(settings.filename.is_some());

            let scene = construct_scene(&settings).unwrap();
            assert!(!scene.objects().is_empty());
            let camera = construct_camera(&settings).unwrap();
            assert!((camera.direction.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_construct_scene_applies_settings() {
        let settings = get_settings("data/config.toml").unwrap();
        let scene = construct_scene(&settings).unwrap();
        assert_eq!(scene.max_steps, 1000);
        assert!((scene.threshold - 1e-4).abs() < 1e-9);
        assert_eq!(scene.background, RGBColor::WHITE);
        assert!(matches!(scene.objects()[0], SceneObject::TiledSphere(_)));
    }

    #[test]
    fn test_capacity_from_config_is_enforced() {
        let mut settings = get_settings("data/config.toml").unwrap();
        settings.capacity = Some(0);
        assert!(construct_scene(&settings).is_err());
    }
}
