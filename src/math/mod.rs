mod matrix;
mod point;
mod vec;

pub use matrix::Matrix3;
pub use point::Point3;
pub use vec::Vec3;

/// Given a viewing direction, find two unit vectors spanning the plane
/// orthogonal to it: one lying in the world xy-plane pointing to the left of
/// the view, and one pointing upward, orthogonal to both.
///
/// Degenerates (returns NaNs) when `direction` is parallel to world-up;
/// callers must reject that case before getting here.
pub fn orthogonal_plane(direction: Vec3) -> (Vec3, Vec3) {
    let direction = direction.normalized();
    let left = Vec3::Z.cross(direction).normalized();
    let up = direction.cross(left).normalized();
    (left, up)
}
