use crate::interaction::{Interaction, LightSampleContext};
use crate::light::{AbstractLight, LightLiSample, LightType};
use crate::math::{Bounds3f, Float, Normal3f, Point2f, Point3f, Vec3f, PI};
use crate::ray::Ray;
use crate::spectrum::RgbSpectrum;

/// Isotropic point emitter with intensity in W/sr.
#[derive(Debug, Clone)]
pub struct PointLight {
    position: Point3f,
    intensity: RgbSpectrum,
    scale: Float,
}

impl PointLight {
    pub fn new(position: Point3f, intensity: RgbSpectrum, scale: Float) -> PointLight {
        PointLight {
            position,
            intensity,
            scale,
        }
    }
}

impl AbstractLight for PointLight {
    fn phi(&self) -> RgbSpectrum {
        4.0 * PI * self.scale * self.intensity
    }

    fn light_type(&self) -> LightType {
        LightType::DeltaPosition
    }

    fn sample_li(
        &self,
        ctx: LightSampleContext,
        _u: Point2f,
        _allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample> {
        let d = self.position - ctx.position;
        let dist_2 = d.length_squared();
        if dist_2 == 0.0 {
            return None;
        }

        let wi = d / Float::sqrt(dist_2);
        let li = self.scale * self.intensity / dist_2;

        Some(LightLiSample::new(
            li,
            wi,
            1.0,
            Interaction::new(self.position, Normal3f::ZERO, Point2f::ZERO, Vec3f::ZERO),
        ))
    }

    fn pdf_li(&self, _ctx: LightSampleContext, _wi: Vec3f, _allow_incomplete_pdf: bool) -> Float {
        0.0
    }

    fn l(&self, _p: Point3f, _n: Normal3f, _uv: Point2f, _w: Vec3f) -> RgbSpectrum {
        RgbSpectrum::ZERO
    }

    fn le(&self, _ray: &Ray) -> RgbSpectrum {
        RgbSpectrum::ZERO
    }

    fn preprocess(&mut self, _scene_bounds: &Bounds3f) {}
}
