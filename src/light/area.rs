use std::sync::Arc;

use tracing::warn;

use crate::interaction::LightSampleContext;
use crate::light::{AbstractLight, LightLiSample, LightType};
use crate::math::{Bounds3f, Float, Normal3f, Point2f, Point3f, Vec3f, PI};
use crate::ray::Ray;
use crate::shape::Triangle;
use crate::spectrum::RgbSpectrum;

/// Uniform Lambertian emitter attached to a triangle.
#[derive(Debug, Clone)]
pub struct DiffuseAreaLight {
    shape: Arc<Triangle>,
    l_emit: RgbSpectrum,
    scale: Float,
    two_sided: bool,
    area: Float,
}

impl DiffuseAreaLight {
    pub fn new(
        shape: Arc<Triangle>,
        l_emit: RgbSpectrum,
        scale: Float,
        two_sided: bool,
    ) -> DiffuseAreaLight {
        let area = shape.area();
        DiffuseAreaLight {
            shape,
            l_emit,
            scale,
            two_sided,
            area,
        }
    }
}

impl AbstractLight for DiffuseAreaLight {
    fn phi(&self) -> RgbSpectrum {
        let sides = if self.two_sided { 2.0 } else { 1.0 };
        PI * sides * self.area * self.scale * self.l_emit
    }

    fn light_type(&self) -> LightType {
        LightType::Area
    }

    fn sample_li(
        &self,
        ctx: LightSampleContext,
        u: Point2f,
        _allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample> {
        let ss = self.shape.sample_with_context(&ctx, u)?;
        if ss.pdf == 0.0 {
            return None;
        }

        let wi = (ss.intr.position - ctx.position).normalize();
        let l = self.l(ss.intr.position, ss.intr.normal, ss.intr.uv, -wi);
        if l.is_zero() {
            return None;
        }

        Some(LightLiSample::new(l, wi, ss.pdf, ss.intr))
    }

    fn pdf_li(&self, ctx: LightSampleContext, wi: Vec3f, _allow_incomplete_pdf: bool) -> Float {
        self.shape.pdf_with_context(&ctx, wi)
    }

    fn l(&self, _p: Point3f, n: Normal3f, _uv: Point2f, w: Vec3f) -> RgbSpectrum {
        if !self.two_sided && n.dot(w) < 0.0 {
            return RgbSpectrum::ZERO;
        }

        self.scale * self.l_emit
    }

    fn le(&self, _ray: &Ray) -> RgbSpectrum {
        warn!("le() should only be called for infinite lights");
        RgbSpectrum::ZERO
    }

    fn preprocess(&mut self, _scene_bounds: &Bounds3f) {}
}
