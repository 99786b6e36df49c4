use crate::math::*;

pub fn sample_uniform_disk_concentric(u: Point2f) -> Point2f {
    let u_offset = u * 2.0 - Vec2f::new(1.0, 1.0);
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::ZERO;
    }

    let (theta, r) = if u_offset.x.abs() > u_offset.y.abs() {
        (FRAC_PI_4 * (u_offset.y / u_offset.x), u_offset.x)
    } else {
        (FRAC_PI_2 - FRAC_PI_4 * (u_offset.x / u_offset.y), u_offset.y)
    };

    Point2f::new(theta.cos(), theta.sin()) * r
}

pub fn sample_uniform_disk_polar(u: Point2f) -> Point2f {
    let r = Float::sqrt(u.x);
    let theta = TAU * u.y;
    Point2f::new(r * theta.cos(), r * theta.sin())
}

pub fn sample_cosine_hemisphere(u: Point2f) -> Vec3f {
    let d = sample_uniform_disk_concentric(u);
    let z = safe_sqrt(1.0 - sqr(d.x) - sqr(d.y));
    Vec3f::new(d.x, d.y, z)
}

#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * FRAC_1_PI
}

pub fn sample_uniform_hemisphere(u: Point2f) -> Vec3f {
    let z = u.x;
    let r = safe_sqrt(1.0 - sqr(z));
    let phi = TAU * u.y;
    Vec3f::new(r * phi.cos(), r * phi.sin(), z)
}

#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    2.0 * FRAC_1_4PI
}

pub fn sample_uniform_sphere(u: Point2f) -> Vec3f {
    let z = 1.0 - 2.0 * u.x;
    let r = safe_sqrt(1.0 - sqr(z));
    let phi = TAU * u.y;
    Vec3f::new(r * phi.cos(), r * phi.sin(), z)
}

#[inline]
pub fn uniform_sphere_pdf() -> Float {
    FRAC_1_4PI
}

/// Uniformly samples barycentric coordinates over a triangle.
pub fn sample_uniform_triangle(u: Point2f) -> (Float, Float, Float) {
    let su0 = Float::sqrt(u.x);
    let b0 = 1.0 - su0;
    let b1 = u.y * su0;
    (b0, b1, 1.0 - b0 - b1)
}

/// Samples an index from unnormalized `weights`; returns (index, pmf).
pub fn sample_discrete(weights: &[Float], u: Float) -> Option<(usize, Float)> {
    if weights.is_empty() {
        return None;
    }

    let sum_weights: Float = weights.iter().sum();
    if sum_weights <= 0.0 {
        return None;
    }

    let mut up = u * sum_weights;
    if up >= sum_weights {
        up = sum_weights - sum_weights * Float::EPSILON;
    }

    let mut offset = 0;
    let mut sum: Float = 0.0;
    while offset + 1 < weights.len() && sum + weights[offset] <= up {
        sum += weights[offset];
        offset += 1;
    }

    Some((offset, weights[offset] / sum_weights))
}
