pub mod bounds;
pub mod frame;
pub mod sampling;
pub mod scattering;
pub mod tile;

pub use bounds::{Bounds2i, Bounds3f};
pub use frame::Frame;

pub type Float = f32;

pub type Point2f = glam::Vec2;
pub type Vec2f = glam::Vec2;
pub type Point2i = glam::IVec2;
pub type Point3f = glam::Vec3;
pub type Vec3f = glam::Vec3;
pub type Normal3f = glam::Vec3;

pub const PI: Float = std::f32::consts::PI;
pub const TAU: Float = std::f32::consts::TAU;
pub const FRAC_1_PI: Float = std::f32::consts::FRAC_1_PI;
pub const FRAC_1_4PI: Float = 0.25 * FRAC_1_PI;
pub const FRAC_PI_2: Float = std::f32::consts::FRAC_PI_2;
pub const FRAC_PI_4: Float = std::f32::consts::FRAC_PI_4;

#[inline]
pub fn sqr(x: Float) -> Float {
    x * x
}

#[inline]
pub fn lerp(a: Float, b: Float, t: Float) -> Float {
    a + (b - a) * t
}

#[inline]
pub fn safe_sqrt(x: Float) -> Float {
    Float::sqrt(Float::max(x, 0.0))
}

// Directions below live in the local shading frame with the normal along +z.

#[inline]
pub fn cos_theta(w: Vec3f) -> Float {
    w.z
}

#[inline]
pub fn cos_2_theta(w: Vec3f) -> Float {
    sqr(w.z)
}

#[inline]
pub fn abs_cos_theta(w: Vec3f) -> Float {
    w.z.abs()
}

#[inline]
pub fn sin_2_theta(w: Vec3f) -> Float {
    Float::max(0.0, 1.0 - cos_2_theta(w))
}

#[inline]
pub fn tan_2_theta(w: Vec3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

#[inline]
pub fn cos_phi(w: Vec3f) -> Float {
    let sin_theta = safe_sqrt(sin_2_theta(w));
    if sin_theta == 0.0 {
        1.0
    } else {
        Float::clamp(w.x / sin_theta, -1.0, 1.0)
    }
}

#[inline]
pub fn sin_phi(w: Vec3f) -> Float {
    let sin_theta = safe_sqrt(sin_2_theta(w));
    if sin_theta == 0.0 {
        0.0
    } else {
        Float::clamp(w.y / sin_theta, -1.0, 1.0)
    }
}

#[inline]
pub fn same_hemisphere(u: Vec3f, v: Vec3f) -> bool {
    u.z * v.z > 0.0
}

/// Builds two unit vectors orthogonal to `v1` (and each other) without
/// branching on near-axis cases.
#[inline]
pub fn coordinate_system(v1: Vec3f) -> (Vec3f, Vec3f) {
    let sign = Float::copysign(1.0, v1.z);
    let a = -1.0 / (sign + v1.z);
    let b = v1.x * v1.y * a;
    (
        Vec3f::new(1.0 + sign * sqr(v1.x) * a, sign * b, -sign * v1.x),
        Vec3f::new(b, sign + sqr(v1.y) * a, -v1.y),
    )
}
