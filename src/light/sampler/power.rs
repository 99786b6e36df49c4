use std::sync::Arc;

use crate::interaction::LightSampleContext;
use crate::light::sampler::{AbstractLightSampler, SampledLight};
use crate::light::{AbstractLight, Light};
use crate::math::sampling::sample_discrete;
use crate::math::Float;

/// Selects lights proportionally to emitted power. Dim lights are still
/// sampled occasionally; a zero-power set degrades to uniform selection.
#[derive(Debug, Clone)]
pub struct PowerLightSampler {
    lights: Arc<[Arc<Light>]>,
    weights: Vec<Float>,
}

impl PowerLightSampler {
    pub fn new(lights: Arc<[Arc<Light>]>) -> PowerLightSampler {
        let mut weights: Vec<Float> = lights.iter().map(|l| l.phi().average()).collect();
        if weights.iter().sum::<Float>() == 0.0 {
            weights.iter_mut().for_each(|w| *w = 1.0);
        }

        PowerLightSampler { lights, weights }
    }

    fn index_of(&self, light: &Arc<Light>) -> Option<usize> {
        self.lights.iter().position(|l| Arc::ptr_eq(l, light))
    }
}

impl AbstractLightSampler for PowerLightSampler {
    fn sample(&self, _ctx: &LightSampleContext, u: Float) -> Option<SampledLight> {
        self.sample_light(u)
    }

    fn pmf(&self, _ctx: &LightSampleContext, light: &Arc<Light>) -> Float {
        self.pmf_light(light)
    }

    fn sample_light(&self, u: Float) -> Option<SampledLight> {
        let (index, p) = sample_discrete(&self.weights, u)?;

        Some(SampledLight {
            light: self.lights[index].clone(),
            p,
        })
    }

    fn pmf_light(&self, light: &Arc<Light>) -> Float {
        let Some(index) = self.index_of(light) else {
            return 0.0;
        };

        let total: Float = self.weights.iter().sum();
        if total == 0.0 {
            return 0.0;
        }

        self.weights[index] / total
    }
}
