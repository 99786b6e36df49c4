use crate::bxdf::{AbstractBxDF, BSDFSample, BxDFFlags};
use crate::math::sampling::{cosine_hemisphere_pdf, sample_cosine_hemisphere};
use crate::math::{abs_cos_theta, same_hemisphere, Float, Point2f, Vec3f, FRAC_1_PI};
use crate::spectrum::RgbSpectrum;

/// Lambertian reflection.
#[derive(Debug, Clone)]
pub struct DiffuseBxDF {
    reflectance: RgbSpectrum,
}

impl DiffuseBxDF {
    pub fn new(reflectance: RgbSpectrum) -> DiffuseBxDF {
        DiffuseBxDF { reflectance }
    }
}

impl AbstractBxDF for DiffuseBxDF {
    fn f(&self, wo: Vec3f, wi: Vec3f) -> RgbSpectrum {
        if !same_hemisphere(wo, wi) {
            return RgbSpectrum::ZERO;
        }

        self.reflectance * FRAC_1_PI
    }

    fn sample_f(&self, wo: Vec3f, _uc: Float, u: Point2f) -> Option<BSDFSample> {
        let mut wi = sample_cosine_hemisphere(u);
        if wo.z < 0.0 {
            wi.z *= -1.0;
        }

        let pdf = cosine_hemisphere_pdf(abs_cos_theta(wi));

        Some(BSDFSample::new(
            self.reflectance * FRAC_1_PI,
            wi,
            pdf,
            BxDFFlags::DIFFUSE_REFLECTION,
        ))
    }

    fn pdf(&self, wo: Vec3f, wi: Vec3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }

        cosine_hemisphere_pdf(abs_cos_theta(wi))
    }

    fn flags(&self) -> BxDFFlags {
        if self.reflectance.is_zero() {
            BxDFFlags::empty()
        } else {
            BxDFFlags::DIFFUSE_REFLECTION
        }
    }

    fn regularize(&mut self) {}
}
