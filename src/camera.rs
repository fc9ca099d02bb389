use crate::math::{orthogonal_plane, Matrix3, Point3, Vec3};

use anyhow::{bail, Result};

/// Which subset of an image's rows a scan visits: rows `y` with
/// `y % stride == offset`. `Stripe::full()` visits every row.
#[derive(Copy, Clone, Debug)]
pub struct Stripe {
    pub offset: usize,
    pub stride: usize,
}

impl Stripe {
    pub fn full() -> Stripe {
        Stripe {
            offset: 0,
            stride: 1,
        }
    }

    pub fn contains(&self, row: usize) -> bool {
        row % self.stride == self.offset
    }
}

/// How per-pixel ray directions are generated from the camera orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Rotate the view direction by a fixed angle per pixel. Uniform angular
    /// spacing (true perspective); one matrix-vector multiply per pixel.
    ConstantAngle,
    /// Displace a point on the plane orthogonal to the view direction by a
    /// fixed linear step per pixel, without renormalizing. Cheaper (one
    /// vector add per pixel) at the cost of mild perspective distortion.
    ConstantDistance,
}

/// A pinhole viewpoint: a location, a unit view direction, and a horizontal
/// field of view in degrees. Immutable once built.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub location: Point3,
    pub direction: Vec3,
    pub fov: f32,
}

impl Camera {
    /// Place the camera at `origin` looking toward `target`.
    ///
    /// Rejects the degenerate orientations the geometry kernel leaves
    /// undefined: a target equal to the origin (zero look vector cannot be
    /// normalized) and a view direction parallel to world-up (the orthogonal
    /// plane derivation collapses).
    pub fn look_at(origin: Point3, target: Point3, fov: f32) -> Result<Camera> {
        if !(fov > 0.0 && fov < 360.0) {
            bail!("field of view {} degrees is out of range", fov);
        }
        let look = target - origin;
        if look.norm_squared() < 1e-12 {
            bail!("camera target coincides with its origin");
        }
        let direction = look.normalized();
        if Vec3::Z.cross(direction).norm_squared() < 1e-8 {
            bail!("view direction is parallel to world-up");
        }
        Ok(Camera {
            location: origin,
            direction,
            fov,
        })
    }

    /// Generate a ray direction for every pixel of a width x height image
    /// whose row lies in `stripe`, invoking `callback(direction, column,
    /// row)` for each. Row 0 is the bottom of the frame.
    ///
    /// Per-row state is advanced for every row whether or not the stripe
    /// contains it, so every stripe of the same scan derives byte-identical
    /// directions for its rows.
    pub fn scan<F>(
        &self,
        strategy: ScanStrategy,
        width: usize,
        height: usize,
        stripe: Stripe,
        callback: &mut F,
    ) where
        F: FnMut(Vec3, usize, usize),
    {
        match strategy {
            ScanStrategy::ConstantAngle => self.scan_constant_angle(width, height, stripe, callback),
            ScanStrategy::ConstantDistance => {
                self.scan_constant_distance(width, height, stripe, callback)
            }
        }
    }

    fn scan_constant_angle<F>(&self, width: usize, height: usize, stripe: Stripe, callback: &mut F)
    where
        F: FnMut(Vec3, usize, usize),
    {
        let (left, up) = orthogonal_plane(self.direction);

        // angle between neighboring rays
        let angle_step = self.fov / (width - 1) as f32;

        // rotations applied to reach the bottom-left corner of the frustum
        let angle_start_h = -(self.fov / 2.0);
        let angle_start_v = angle_step * (height - 1) as f32 / 2.0;

        // the per-pixel rotations are built once and applied repeatedly;
        // building a matrix per pixel would dominate the scan
        let rot_column = Matrix3::rotation(up, angle_step);
        let rot_row = Matrix3::rotation(left, -angle_step);

        let mut row_start =
            Matrix3::rotation(left, angle_start_v) * (Matrix3::rotation(up, angle_start_h) * self.direction);

        for y in 0..height {
            // row state advances in every stripe
            row_start = rot_row * row_start;

            if !stripe.contains(y) {
                continue;
            }

            let mut ray = row_start;
            for x in 0..width {
                callback(ray, x, y);
                ray = rot_column * ray;
            }
        }
    }

    fn scan_constant_distance<F>(
        &self,
        width: usize,
        height: usize,
        stripe: Stripe,
        callback: &mut F,
    ) where
        F: FnMut(Vec3, usize, usize),
    {
        let (left, up) = orthogonal_plane(self.direction);

        // spacing between neighboring rays on the sampling plane
        let step = 2.0 / (width - 1) as f32;
        let column_step = left.scaled_to(step);
        let row_step = up.scaled_to(step);

        // shift the view direction to the bottom-left of the sampling plane
        let mut row_start = self.direction;
        row_start += column_step * (-(width as f32) / 2.0);
        row_start += row_step * (-(height as f32) / 2.0);

        for y in 0..height {
            // row state advances in every stripe
            row_start += row_step;

            if !stripe.contains(y) {
                continue;
            }

            let mut ray = row_start;
            for x in 0..width {
                // not renormalized: the sampling plane is flat
                callback(ray, x, y);
                ray += column_step;
            }
        }
    }
}
