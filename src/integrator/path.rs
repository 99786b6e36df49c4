use crate::bsdf::BSDF;
use crate::integrator::AbstractRayIntegrator;
use crate::interaction::{Interaction, LightSampleContext};
use crate::light::sampler::{AbstractLightSampler, LightSampler};
use crate::light::AbstractLight;
use crate::math::{sqr, Float};
use crate::ray::Ray;
use crate::sampler::{AbstractSampler, Sampler};
use crate::scene::SceneSnapshot;
use crate::spectrum::RgbSpectrum;

/// Unidirectional path tracer with next-event estimation. Emission found by
/// both strategies is combined by dividing out rescaled path probabilities:
/// `r_u` rescales the unidirectional strategy, `r_l` the light strategy, and
/// each contribution is divided by the average of the strategies that could
/// have produced it.
pub struct PathIntegrator {
    max_depth: i32,
    light_sampler: LightSampler,
    regularize: bool,
}

impl PathIntegrator {
    pub fn new(max_depth: i32, light_sampler: LightSampler, regularize: bool) -> PathIntegrator {
        PathIntegrator {
            max_depth,
            light_sampler,
            regularize,
        }
    }

    /// Next-event estimation at `intr`. `r_p` is the rescaled path
    /// probability up to the shading point.
    fn sample_ld(
        &self,
        scene: &SceneSnapshot,
        intr: &Interaction,
        bsdf: &BSDF,
        sampler: &mut Sampler,
        beta: RgbSpectrum,
        r_p: RgbSpectrum,
    ) -> RgbSpectrum {
        // Nudge the shadow-ray origin off the surface when the BSDF scatters
        // on only one side of it.
        let mut ctx = LightSampleContext::from(intr);
        let flags = bsdf.flags();
        if flags.is_reflective() && !flags.is_transmissive() {
            ctx.position = intr.offset_position(intr.wo);
        } else if flags.is_transmissive() && !flags.is_reflective() {
            ctx.position = intr.offset_position(-intr.wo);
        }

        let u = sampler.get_1d();
        let Some(sampled_light) = self.light_sampler.sample(&ctx, u) else {
            return RgbSpectrum::ZERO;
        };

        let u_light = sampler.get_2d();
        let Some(ls) = sampled_light.light.sample_li(ctx, u_light, true) else {
            return RgbSpectrum::ZERO;
        };
        if ls.l.is_zero() || ls.pdf == 0.0 {
            return RgbSpectrum::ZERO;
        }

        let wo = intr.wo;
        let wi = ls.wi;
        let f_hat = bsdf.f(wo, wi) * wi.dot(intr.normal).abs();
        if f_hat.is_zero() {
            return RgbSpectrum::ZERO;
        }

        if !scene.unoccluded(ctx.position, ls.p_light.position) {
            return RgbSpectrum::ZERO;
        }

        let p_l = sampled_light.p * ls.pdf;
        let r_l = r_p * p_l;
        if sampled_light.light.light_type().is_delta() {
            // BSDF sampling can never hit a delta light, so the light
            // strategy stands alone.
            beta * f_hat * ls.l / r_l.average()
        } else {
            let r_u = r_p * bsdf.pdf(wo, wi);
            beta * f_hat * ls.l / (r_l + r_u).average()
        }
    }
}

impl AbstractRayIntegrator for PathIntegrator {
    fn li(&self, scene: &SceneSnapshot, mut ray: Ray, sampler: &mut Sampler) -> RgbSpectrum {
        let mut l = RgbSpectrum::ZERO;
        let mut beta = RgbSpectrum::ONE;
        let mut r_u = RgbSpectrum::ONE;
        let mut r_l = RgbSpectrum::ONE;
        let mut specular_bounce = true;
        let mut any_non_specular_bounces = false;
        let mut depth = 0;
        let mut eta_scale = 1.0;
        let mut prev_intr_ctx = LightSampleContext::default();

        loop {
            let Some(si) = scene.intersect(&ray, Float::INFINITY) else {
                for light in scene.infinite_lights() {
                    let le = light.le(&ray);
                    if le.is_zero() {
                        continue;
                    }

                    if depth == 0 || specular_bounce {
                        l += beta * le / r_u.average();
                    } else {
                        let p_l = self.light_sampler.pmf(&prev_intr_ctx, light)
                            * light.pdf_li(prev_intr_ctx, ray.direction, true);
                        let r_l = r_l * p_l;
                        l += beta * le / (r_u + r_l).average();
                    }
                }
                break;
            };

            let intr = si.intr;

            if let Some(light_index) = intr.area_light {
                let light = scene.get_area_light(light_index);
                let le = light.l(intr.position, intr.normal, intr.uv, -ray.direction);
                if !le.is_zero() {
                    if depth == 0 || specular_bounce {
                        l += beta * le / r_u.average();
                    } else {
                        let p_l = self.light_sampler.pmf(&prev_intr_ctx, light)
                            * light.pdf_li(prev_intr_ctx, ray.direction, true);
                        let r_l = r_l * p_l;
                        l += beta * le / (r_u + r_l).average();
                    }
                }
            }

            let bsdf = intr
                .material
                .and_then(|m| scene.get_material(m))
                .and_then(|m| m.get_bsdf(&intr));
            let Some(mut bsdf) = bsdf else {
                // Pass-through boundary; does not consume a bounce.
                ray.skip_intersection(intr.position);
                continue;
            };

            if depth == self.max_depth {
                break;
            }
            depth += 1;

            if self.regularize && any_non_specular_bounces {
                bsdf.regularize();
            }

            if bsdf.flags().is_non_specular() {
                l += self.sample_ld(scene, &intr, &bsdf, sampler, beta, r_u);
            }

            let wo = -ray.direction;
            let u = sampler.get_1d();
            let Some(bs) = bsdf.sample_f(wo, u, sampler.get_2d()) else {
                break;
            };

            beta *= bs.f * bs.wi.dot(intr.normal).abs() / bs.pdf;
            r_l = r_u
                / if bs.pdf_is_proportional {
                    bsdf.pdf(wo, bs.wi)
                } else {
                    bs.pdf
                };

            specular_bounce = bs.is_specular();
            any_non_specular_bounces |= !bs.is_specular();
            if bs.is_transmission() {
                eta_scale *= sqr(bs.eta);
            }

            prev_intr_ctx = LightSampleContext::from(&intr);
            ray = intr.spawn_ray(bs.wi);

            if beta.is_zero() || r_u.is_zero() {
                break;
            }

            // The roulette draw happens on every bounce so the sample stream
            // stays aligned whether or not termination is considered.
            let rr_beta = beta * eta_scale / r_u.average();
            let u_rr = sampler.get_1d();
            if rr_beta.max_component() < 1.0 && depth > 1 {
                let q = Float::max(0.0, 1.0 - rr_beta.max_component());
                if u_rr < q {
                    break;
                }
                beta /= 1.0 - q;
            }
        }

        l
    }
}
