use crate::math::{Float, Point2f, Point2i, Point3f, Vec3f, PI};
use crate::ray::Ray;

/// Pinhole perspective camera. Rays leave the origin through a point on the
/// virtual image plane jittered by the sub-pixel offset.
pub struct Camera {
    origin: Point3f,
    lower_left: Point3f,
    horizontal: Vec3f,
    vertical: Vec3f,
    resolution: Point2i,
}

impl Camera {
    pub fn new(
        look_from: Point3f,
        look_at: Point3f,
        vup: Vec3f,
        vfov_degrees: Float,
        resolution: Point2i,
    ) -> Camera {
        let aspect = resolution.x as Float / resolution.y as Float;
        let theta = vfov_degrees * PI / 180.0;
        let half_height = Float::tan(theta / 2.0);
        let half_width = aspect * half_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Camera {
            origin: look_from,
            lower_left: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            resolution,
        }
    }

    pub fn resolution(&self) -> Point2i {
        self.resolution
    }

    /// `u` is the sub-pixel jitter in [0,1)^2. Pixel (0,0) is the top-left
    /// corner of the image.
    pub fn generate_ray(&self, p: Point2i, u: Point2f) -> Ray {
        let s = (p.x as Float + u.x) / self.resolution.x as Float;
        let t = 1.0 - (p.y as Float + u.y) / self.resolution.y as Float;

        let direction =
            (self.lower_left + s * self.horizontal + t * self.vertical - self.origin).normalize();
        Ray::new(self.origin, direction)
    }
}
