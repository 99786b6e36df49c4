use crate::interaction::{Interaction, LightSampleContext};
use crate::math::{Bounds3f, Float, Normal3f, Point2f, Point3f, Vec3f};
use crate::ray::Ray;
use crate::spectrum::RgbSpectrum;

pub mod area;
pub mod distant;
pub mod infinite;
pub mod point;
pub mod sampler;

pub use area::DiffuseAreaLight;
pub use distant::DistantLight;
pub use infinite::UniformInfiniteLight;
pub use point::PointLight;

pub trait AbstractLight {
    /// Total emitted power, used for importance-weighted light selection.
    fn phi(&self) -> RgbSpectrum;

    fn light_type(&self) -> LightType;

    /// Samples a direction from `ctx` toward the light. With
    /// `allow_incomplete_pdf`, lights whose contribution is better found by
    /// BSDF sampling may decline instead of producing high-variance samples.
    fn sample_li(
        &self,
        ctx: LightSampleContext,
        u: Point2f,
        allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample>;

    /// Density `sample_li` would report for direction `wi`; zero for delta
    /// lights, which BSDF sampling can never hit.
    fn pdf_li(&self, ctx: LightSampleContext, wi: Vec3f, allow_incomplete_pdf: bool) -> Float;

    /// Radiance leaving a point on an emissive surface in direction `w`.
    fn l(&self, p: Point3f, n: Normal3f, uv: Point2f, w: Vec3f) -> RgbSpectrum;

    /// Radiance along an escaped ray; meaningful for infinite lights only.
    fn le(&self, ray: &Ray) -> RgbSpectrum;

    fn preprocess(&mut self, scene_bounds: &Bounds3f);
}

#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Distant(DistantLight),
    DiffuseArea(DiffuseAreaLight),
    UniformInfinite(UniformInfiniteLight),
}

impl AbstractLight for Light {
    fn phi(&self) -> RgbSpectrum {
        match self {
            Light::Point(l) => l.phi(),
            Light::Distant(l) => l.phi(),
            Light::DiffuseArea(l) => l.phi(),
            Light::UniformInfinite(l) => l.phi(),
        }
    }

    fn light_type(&self) -> LightType {
        match self {
            Light::Point(l) => l.light_type(),
            Light::Distant(l) => l.light_type(),
            Light::DiffuseArea(l) => l.light_type(),
            Light::UniformInfinite(l) => l.light_type(),
        }
    }

    fn sample_li(
        &self,
        ctx: LightSampleContext,
        u: Point2f,
        allow_incomplete_pdf: bool,
    ) -> Option<LightLiSample> {
        match self {
            Light::Point(l) => l.sample_li(ctx, u, allow_incomplete_pdf),
            Light::Distant(l) => l.sample_li(ctx, u, allow_incomplete_pdf),
            Light::DiffuseArea(l) => l.sample_li(ctx, u, allow_incomplete_pdf),
            Light::UniformInfinite(l) => l.sample_li(ctx, u, allow_incomplete_pdf),
        }
    }

    fn pdf_li(&self, ctx: LightSampleContext, wi: Vec3f, allow_incomplete_pdf: bool) -> Float {
        match self {
            Light::Point(l) => l.pdf_li(ctx, wi, allow_incomplete_pdf),
            Light::Distant(l) => l.pdf_li(ctx, wi, allow_incomplete_pdf),
            Light::DiffuseArea(l) => l.pdf_li(ctx, wi, allow_incomplete_pdf),
            Light::UniformInfinite(l) => l.pdf_li(ctx, wi, allow_incomplete_pdf),
        }
    }

    fn l(&self, p: Point3f, n: Normal3f, uv: Point2f, w: Vec3f) -> RgbSpectrum {
        match self {
            Light::Point(l) => l.l(p, n, uv, w),
            Light::Distant(l) => l.l(p, n, uv, w),
            Light::DiffuseArea(l) => l.l(p, n, uv, w),
            Light::UniformInfinite(l) => l.l(p, n, uv, w),
        }
    }

    fn le(&self, ray: &Ray) -> RgbSpectrum {
        match self {
            Light::Point(l) => l.le(ray),
            Light::Distant(l) => l.le(ray),
            Light::DiffuseArea(l) => l.le(ray),
            Light::UniformInfinite(l) => l.le(ray),
        }
    }

    fn preprocess(&mut self, scene_bounds: &Bounds3f) {
        match self {
            Light::Point(l) => l.preprocess(scene_bounds),
            Light::Distant(l) => l.preprocess(scene_bounds),
            Light::DiffuseArea(l) => l.preprocess(scene_bounds),
            Light::UniformInfinite(l) => l.preprocess(scene_bounds),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    DeltaPosition,
    DeltaDirection,
    Area,
    Infinite,
}

impl LightType {
    /// Delta lights cannot be struck by sampled rays, so estimators weigh
    /// their contributions with the light-sampling density alone.
    pub fn is_delta(&self) -> bool {
        matches!(self, LightType::DeltaPosition | LightType::DeltaDirection)
    }
}

#[derive(Debug, Clone)]
pub struct LightLiSample {
    /// Incident radiance arriving from the sampled point, assuming no
    /// occlusion.
    pub l: RgbSpectrum,
    pub wi: Vec3f,
    pub pdf: Float,
    pub p_light: Interaction,
}

impl LightLiSample {
    pub fn new(l: RgbSpectrum, wi: Vec3f, pdf: Float, p_light: Interaction) -> LightLiSample {
        LightLiSample {
            l,
            wi,
            pdf,
            p_light,
        }
    }
}
