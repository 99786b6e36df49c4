use std::sync::Arc;

use crate::interaction::LightSampleContext;
use crate::light::Light;
use crate::math::Float;

pub mod power;
pub mod uniform;

pub use power::PowerLightSampler;
pub use uniform::UniformLightSampler;

/// Picks one light per estimation event; `pmf` must report the exact
/// probability `sample` used so MIS weights stay unbiased.
pub trait AbstractLightSampler {
    fn sample(&self, ctx: &LightSampleContext, u: Float) -> Option<SampledLight>;

    fn pmf(&self, ctx: &LightSampleContext, light: &Arc<Light>) -> Float;

    fn sample_light(&self, u: Float) -> Option<SampledLight>;

    fn pmf_light(&self, light: &Arc<Light>) -> Float;
}

#[derive(Debug, Clone)]
pub enum LightSampler {
    Uniform(UniformLightSampler),
    Power(PowerLightSampler),
}

impl AbstractLightSampler for LightSampler {
    fn sample(&self, ctx: &LightSampleContext, u: Float) -> Option<SampledLight> {
        match self {
            LightSampler::Uniform(s) => s.sample(ctx, u),
            LightSampler::Power(s) => s.sample(ctx, u),
        }
    }

    fn pmf(&self, ctx: &LightSampleContext, light: &Arc<Light>) -> Float {
        match self {
            LightSampler::Uniform(s) => s.pmf(ctx, light),
            LightSampler::Power(s) => s.pmf(ctx, light),
        }
    }

    fn sample_light(&self, u: Float) -> Option<SampledLight> {
        match self {
            LightSampler::Uniform(s) => s.sample_light(u),
            LightSampler::Power(s) => s.sample_light(u),
        }
    }

    fn pmf_light(&self, light: &Arc<Light>) -> Float {
        match self {
            LightSampler::Uniform(s) => s.pmf_light(light),
            LightSampler::Power(s) => s.pmf_light(light),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampledLight {
    pub light: Arc<Light>,
    /// Probability this light was selected.
    pub p: Float,
}
