pub use crate::camera::{Camera, ScanStrategy, Stripe};
pub use crate::color::RGBColor;
pub use crate::film::Film;
pub use crate::marcher::{march, trace, MarchResult};
pub use crate::math::{orthogonal_plane, Matrix3, Point3, Vec3};
pub use crate::objects::{Mandelbulb, SceneObject, TiledSphere};
pub use crate::renderer::{output_film, render};
pub use crate::scene::Scene;
