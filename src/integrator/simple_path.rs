use crate::integrator::AbstractRayIntegrator;
use crate::interaction::LightSampleContext;
use crate::light::sampler::{AbstractLightSampler, UniformLightSampler};
use crate::light::AbstractLight;
use crate::math::sampling::{
    sample_uniform_hemisphere, sample_uniform_sphere, uniform_hemisphere_pdf, uniform_sphere_pdf,
};
use crate::math::Float;
use crate::ray::Ray;
use crate::sampler::{AbstractSampler, Sampler};
use crate::scene::SceneSnapshot;
use crate::spectrum::RgbSpectrum;

/// Deliberately naive path tracer without MIS, roulette, or regularization.
/// Useful as a reference when validating the full estimator: with either
/// strategy disabled the remaining one must still converge to the same image.
pub struct SimplePathIntegrator {
    max_depth: i32,
    sample_lights: bool,
    sample_bsdf: bool,
    light_sampler: UniformLightSampler,
}

impl SimplePathIntegrator {
    pub fn new(
        max_depth: i32,
        sample_lights: bool,
        sample_bsdf: bool,
        light_sampler: UniformLightSampler,
    ) -> SimplePathIntegrator {
        SimplePathIntegrator {
            max_depth,
            sample_lights,
            sample_bsdf,
            light_sampler,
        }
    }
}

impl AbstractRayIntegrator for SimplePathIntegrator {
    fn li(&self, scene: &SceneSnapshot, mut ray: Ray, sampler: &mut Sampler) -> RgbSpectrum {
        let mut l = RgbSpectrum::ZERO;
        let mut beta = RgbSpectrum::ONE;
        let mut specular_bounce = true;
        let mut depth = 0;

        while !beta.is_zero() {
            let Some(si) = scene.intersect(&ray, Float::INFINITY) else {
                if !self.sample_lights || specular_bounce {
                    for light in scene.infinite_lights() {
                        l += beta * light.le(&ray);
                    }
                }
                break;
            };

            let intr = si.intr;

            // Emission is only counted here when it was not already found by
            // light sampling at the previous vertex.
            if !self.sample_lights || specular_bounce {
                if let Some(light_index) = intr.area_light {
                    let light = scene.get_area_light(light_index);
                    l += beta * light.l(intr.position, intr.normal, intr.uv, -ray.direction);
                }
            }

            let bsdf = intr
                .material
                .and_then(|m| scene.get_material(m))
                .and_then(|m| m.get_bsdf(&intr));
            let Some(bsdf) = bsdf else {
                ray.skip_intersection(intr.position);
                continue;
            };

            if depth == self.max_depth {
                break;
            }
            depth += 1;

            let wo = -ray.direction;

            if self.sample_lights {
                if let Some(sampled_light) = self.light_sampler.sample_light(sampler.get_1d()) {
                    let u_light = sampler.get_2d();
                    let ls = sampled_light.light.sample_li(
                        LightSampleContext::from(&intr),
                        u_light,
                        false,
                    );

                    if let Some(ls) = ls {
                        if !ls.l.is_zero() && ls.pdf > 0.0 {
                            let f = bsdf.f(wo, ls.wi) * ls.wi.dot(intr.normal).abs();
                            if !f.is_zero()
                                && scene
                                    .unoccluded(intr.offset_position(ls.wi), ls.p_light.position)
                            {
                                l += beta * f * ls.l / (sampled_light.p * ls.pdf);
                            }
                        }
                    }
                }
            }

            if self.sample_bsdf {
                let u = sampler.get_1d();
                let Some(bs) = bsdf.sample_f(wo, u, sampler.get_2d()) else {
                    break;
                };

                beta *= bs.f * bs.wi.dot(intr.normal).abs() / bs.pdf;
                specular_bounce = bs.is_specular();
                ray = intr.spawn_ray(bs.wi);
            } else {
                let flags = bsdf.flags();
                let (wi, pdf) = if flags.is_reflective() && flags.is_transmissive() {
                    (sample_uniform_sphere(sampler.get_2d()), uniform_sphere_pdf())
                } else {
                    let mut wi = sample_uniform_hemisphere(sampler.get_2d());
                    let pdf = uniform_hemisphere_pdf();
                    let aligned = wo.dot(intr.normal) * wi.dot(intr.normal);
                    if (flags.is_reflective() && aligned < 0.0)
                        || (flags.is_transmissive() && aligned > 0.0)
                    {
                        wi = -wi;
                    }
                    (wi, pdf)
                };

                beta *= bsdf.f(wo, wi) * wi.dot(intr.normal).abs() / pdf;
                specular_bounce = false;
                ray = intr.spawn_ray(wi);
            }
        }

        l
    }
}
