use crate::math::{Float, Normal3f, Point3f, Vec3f};

/// Margin kept between shadow-ray endpoints and occluders.
pub const SHADOW_EPSILON: Float = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Vec3f,
}

impl Ray {
    pub fn new(origin: Point3f, direction: Vec3f) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.direction * t
    }

    /// Advances the ray origin just past a hit point, used to step through
    /// boundaries that carry no BSDF without consuming a bounce.
    pub fn skip_intersection(&mut self, p: Point3f) {
        self.origin = p + self.direction * SHADOW_EPSILON;
    }
}

/// Offsets a spawn origin off the surface toward the side `w` points to.
#[inline]
pub fn offset_ray_origin(p: Point3f, n: Normal3f, w: Vec3f) -> Point3f {
    let sign = if n.dot(w) < 0.0 { -1.0 } else { 1.0 };
    p + n * (SHADOW_EPSILON * sign)
}
