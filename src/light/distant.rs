use crate::interaction::{Interaction, LightSampleContext};
use crate::light::{AbstractLight, LightLiSample, LightType};
use crate::math::{sqr, Bounds3f, Float, Normal3f, Point2f, Point3f, Vec3f, PI};
use crate::ray::Ray;
use crate::spectrum::RgbSpectrum;

/// Directional emitter at infinity (sun-style). `preprocess` must run before
/// sampling so the pseudo light point lands outside the scene.
#[derive(Debug, Clone)]
pub struct DistantLight {
    /// Direction the light travels, toward the scene.
    direction: Vec3f,
    radiance: RgbSpectrum,
    scale: Float,
    scene_radius: Float,
}

impl DistantLight {
    pub fn new(direction: Vec3f, radiance: RgbSpectrum, scale: Float) -> DistantLight {
        DistantLight {
            direction: direction.normalize(),
            radiance,
            scale,
            scene_radius: 0.0,
        }
    }
}

impl AbstractLight for DistantLight {
    fn phi(&self) -> RgbSpectrum {
        self.scale * self.radiance * PI * sqr(self.scene_radius)
    }

    fn light_type(&self) -> LightType {
        LightType::DeltaDirection
    }

    fn sample_li(
        &self,
        ctx: LightSampleContext,
        _u: Point2f,
        _allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample> {
        let wi = -self.direction;
        let p_outside = ctx.position + wi * (2.0 * self.scene_radius);

        Some(LightLiSample::new(
            self.scale * self.radiance,
            wi,
            1.0,
            Interaction::new(p_outside, Normal3f::ZERO, Point2f::ZERO, Vec3f::ZERO),
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

    fn preprocess(&mut self, scene_bounds: &Bounds3f) {
        let (_, radius) = scene_bounds.bounding_sphere();
        self.scene_radius = radius;
    }
}
