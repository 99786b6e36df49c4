use crate::interaction::{Interaction, LightSampleContext};
use crate::math::sampling::sample_uniform_triangle;
use crate::math::{Bounds3f, Float, Point2f, Point3f, Vec3f};
use crate::ray::Ray;

const TRIANGLE_EPSILON: Float = 1e-5;

#[derive(Debug, Clone)]
pub struct ShapeSample {
    pub intr: Interaction,
    pub pdf: Float,
}

#[derive(Debug, Clone)]
pub struct Triangle {
    pub p0: Point3f,
    pub p1: Point3f,
    pub p2: Point3f,
}

impl Triangle {
    pub fn new(p0: Point3f, p1: Point3f, p2: Point3f) -> Triangle {
        Triangle { p0, p1, p2 }
    }

    pub fn area(&self) -> Float {
        0.5 * (self.p1 - self.p0).cross(self.p2 - self.p0).length()
    }

    pub fn normal(&self) -> Vec3f {
        (self.p1 - self.p0).cross(self.p2 - self.p0).normalize()
    }

    pub fn bounds(&self) -> Bounds3f {
        Bounds3f::default()
            .union_point(self.p0)
            .union_point(self.p1)
            .union_point(self.p2)
    }

    /// Two-sided Moller-Trumbore intersection; returns (t, b1, b2).
    pub fn intersect(&self, ray: &Ray, t_max: Float) -> Option<(Float, Float, Float)> {
        let e1 = self.p1 - self.p0;
        let e2 = self.p2 - self.p0;

        let pvec = ray.direction.cross(e2);
        let det = e1.dot(pvec);
        if det.abs() < 1e-9 {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin - self.p0;
        let b1 = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&b1) {
            return None;
        }

        let qvec = tvec.cross(e1);
        let b2 = ray.direction.dot(qvec) * inv_det;
        if b2 < 0.0 || b1 + b2 > 1.0 {
            return None;
        }

        let t = e2.dot(qvec) * inv_det;
        if t <= TRIANGLE_EPSILON || t >= t_max {
            return None;
        }

        Some((t, b1, b2))
    }

    pub fn interaction_at(&self, ray: &Ray, t: Float, b1: Float, b2: Float) -> Interaction {
        Interaction::new(
            ray.at(t),
            self.normal(),
            Point2f::new(b1, b2),
            -ray.direction,
        )
    }

    /// Uniformly samples a point on the triangle; pdf is with respect to area.
    pub fn sample(&self, u: Point2f) -> ShapeSample {
        let (b0, b1, b2) = sample_uniform_triangle(u);
        let p = self.p0 * b0 + self.p1 * b1 + self.p2 * b2;

        ShapeSample {
            intr: Interaction::new(p, self.normal(), Point2f::new(b1, b2), Vec3f::ZERO),
            pdf: 1.0 / self.area(),
        }
    }

    /// Samples a point visible from `ctx`; pdf is with respect to solid angle
    /// at the shading point. Declines degenerate configurations.
    pub fn sample_with_context(&self, ctx: &LightSampleContext, u: Point2f) -> Option<ShapeSample> {
        let mut ss = self.sample(u);

        let d = ss.intr.position - ctx.position;
        let dist_2 = d.length_squared();
        if dist_2 == 0.0 {
            return None;
        }

        let wi = d / Float::sqrt(dist_2);
        let cos_theta_l = ss.intr.normal.dot(wi).abs();
        if cos_theta_l == 0.0 {
            return None;
        }

        ss.pdf *= dist_2 / cos_theta_l;
        if !ss.pdf.is_finite() {
            return None;
        }

        Some(ss)
    }

    /// Solid-angle density `sample_with_context` would report for sampling
    /// direction `wi` from `ctx`; zero when the triangle is missed.
    pub fn pdf_with_context(&self, ctx: &LightSampleContext, wi: Vec3f) -> Float {
        let ray = Ray::new(ctx.position, wi);
        let Some((t, _, _)) = self.intersect(&ray, Float::INFINITY) else {
            return 0.0;
        };

        let cos_theta_l = self.normal().dot(wi).abs();
        if cos_theta_l == 0.0 {
            return 0.0;
        }

        let dist_2 = (ray.at(t) - ctx.position).length_squared();
        dist_2 / (cos_theta_l * self.area())
    }
}
