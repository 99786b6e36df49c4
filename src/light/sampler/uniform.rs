use std::sync::Arc;

use crate::interaction::LightSampleContext;
use crate::light::sampler::{AbstractLightSampler, SampledLight};
use crate::light::Light;
use crate::math::Float;

#[derive(Debug, Clone)]
pub struct UniformLightSampler {
    lights: Arc<[Arc<Light>]>,
}

impl UniformLightSampler {
    pub fn new(lights: Arc<[Arc<Light>]>) -> UniformLightSampler {
        UniformLightSampler { lights }
    }
}

impl AbstractLightSampler for UniformLightSampler {
    fn sample(&self, _ctx: &LightSampleContext, u: Float) -> Option<SampledLight> {
        self.sample_light(u)
    }

    fn pmf(&self, _ctx: &LightSampleContext, light: &Arc<Light>) -> Float {
        self.pmf_light(light)
    }

    fn sample_light(&self, u: Float) -> Option<SampledLight> {
        if self.lights.is_empty() {
            return None;
        }

        let index = usize::min(
            (u * self.lights.len() as Float) as usize,
            self.lights.len() - 1,
        );

        Some(SampledLight {
            light: self.lights[index].clone(),
            p: 1.0 / self.lights.len() as Float,
        })
    }

    fn pmf_light(&self, light: &Arc<Light>) -> Float {
        // A light outside the managed set can never be selected.
        if !self.lights.iter().any(|l| Arc::ptr_eq(l, light)) {
            return 0.0;
        }

        1.0 / self.lights.len() as Float
    }
}
