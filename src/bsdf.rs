use crate::bxdf::{AbstractBxDF, BSDFSample, BxDF, BxDFFlags};
use crate::math::{Float, Frame, Normal3f, Point2f, Vec3f};
use crate::spectrum::RgbSpectrum;

/// BxDF bound to a shading frame; callers pass render-space directions.
#[derive(Debug, Clone)]
pub struct BSDF {
    bxdf: BxDF,
    shading_frame: Frame,
}

impl BSDF {
    pub fn new(ns: Normal3f, bxdf: BxDF) -> BSDF {
        BSDF {
            bxdf,
            shading_frame: Frame::from_z(ns),
        }
    }

    pub fn flags(&self) -> BxDFFlags {
        self.bxdf.flags()
    }

    pub fn render_to_local(&self, v: Vec3f) -> Vec3f {
        self.shading_frame.localize(v)
    }

    pub fn local_to_render(&self, v: Vec3f) -> Vec3f {
        self.shading_frame.globalize(v)
    }

    pub fn f(&self, wo_render: Vec3f, wi_render: Vec3f) -> RgbSpectrum {
        let wo = self.render_to_local(wo_render);
        let wi = self.render_to_local(wi_render);
        if wo.z == 0.0 {
            return RgbSpectrum::ZERO;
        }

        self.bxdf.f(wo, wi)
    }

    pub fn sample_f(&self, wo_render: Vec3f, u: Float, u2: Point2f) -> Option<BSDFSample> {
        let wo = self.render_to_local(wo_render);
        if wo.z == 0.0 || self.bxdf.flags().is_empty() {
            return None;
        }

        let mut bs = self.bxdf.sample_f(wo, u, u2)?;
        if bs.f.is_zero() || bs.pdf == 0.0 || bs.wi.z == 0.0 {
            return None;
        }

        bs.wi = self.local_to_render(bs.wi);
        Some(bs)
    }

    pub fn pdf(&self, wo_render: Vec3f, wi_render: Vec3f) -> Float {
        let wo = self.render_to_local(wo_render);
        let wi = self.render_to_local(wi_render);
        if wo.z == 0.0 {
            return 0.0;
        }

        self.bxdf.pdf(wo, wi)
    }

    pub fn regularize(&mut self) {
        self.bxdf.regularize();
    }
}
