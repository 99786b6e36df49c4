use crate::interaction::{Interaction, LightSampleContext};
use crate::light::{AbstractLight, LightLiSample, LightType};
use crate::math::sampling::{sample_uniform_sphere, uniform_sphere_pdf};
use crate::math::{sqr, Bounds3f, Float, Normal3f, Point2f, Point3f, Vec3f, PI};
use crate::ray::Ray;
use crate::spectrum::RgbSpectrum;

/// Constant-radiance environment. Its contribution is found perfectly well by
/// BSDF sampling, so it declines to sample when incomplete pdfs are allowed.
#[derive(Debug, Clone)]
pub struct UniformInfiniteLight {
    l_emit: RgbSpectrum,
    scale: Float,
    scene_radius: Float,
}

impl UniformInfiniteLight {
    pub fn new(l_emit: RgbSpectrum, scale: Float) -> UniformInfiniteLight {
        UniformInfiniteLight {
            l_emit,
            scale,
            scene_radius: 0.0,
        }
    }
}

impl AbstractLight for UniformInfiniteLight {
    fn phi(&self) -> RgbSpectrum {
        4.0 * sqr(PI) * sqr(self.scene_radius) * self.scale * self.l_emit
    }

    fn light_type(&self) -> LightType {
        LightType::Infinite
    }

    fn sample_li(
        &self,
        ctx: LightSampleContext,
        u: Point2f,
        allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample> {
        if allow_incomplete_pdf {
            return None;
        }

        let wi = sample_uniform_sphere(u);
        let pdf = uniform_sphere_pdf();
        let p_outside = ctx.position + wi * (2.0 * self.scene_radius);

        Some(LightLiSample::new(
            self.scale * self.l_emit,
            wi,
            pdf,
            Interaction::new(p_outside, Normal3f::ZERO, Point2f::ZERO, Vec3f::ZERO),
        ))
    }

    fn pdf_li(&self, _ctx: LightSampleContext, _wi: Vec3f, allow_incomplete_pdf: bool) -> Float {
        if allow_incomplete_pdf {
            0.0
        } else {
            uniform_sphere_pdf()
        }
    }

    fn l(&self, _p: Point3f, _n: Normal3f, _uv: Point2f, _w: Vec3f) -> RgbSpectrum {
        RgbSpectrum::ZERO
    }

    fn le(&self, _ray: &Ray) -> RgbSpectrum {
        self.scale * self.l_emit
    }

    fn preprocess(&mut self, scene_bounds: &Bounds3f) {
        let (_, radius) = scene_bounds.bounding_sphere();
        self.scene_radius = radius;
    }
}
