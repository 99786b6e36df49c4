use crate::bxdf::{AbstractBxDF, BSDFSample, BxDFFlags};
use crate::math::scattering::{reflect, TrowbridgeReitzDistribution};
use crate::math::{abs_cos_theta, same_hemisphere, Float, Point2f, Vec3f};
use crate::spectrum::RgbSpectrum;

/// Metallic reflection with a Schlick reflectance approximation; the smooth
/// limit degenerates to a perfect mirror.
#[derive(Debug, Clone)]
pub struct ConductorBxDF {
    mf: TrowbridgeReitzDistribution,
    reflectance: RgbSpectrum,
}

impl ConductorBxDF {
    pub fn new(mf: TrowbridgeReitzDistribution, reflectance: RgbSpectrum) -> ConductorBxDF {
        ConductorBxDF { mf, reflectance }
    }

    fn fresnel(&self, cos_theta: Float) -> RgbSpectrum {
        let c = Float::clamp(1.0 - cos_theta, 0.0, 1.0);
        let weight = c * c * c * c * c;
        self.reflectance + (RgbSpectrum::ONE - self.reflectance) * weight
    }
}

impl AbstractBxDF for ConductorBxDF {
    fn f(&self, wo: Vec3f, wi: Vec3f) -> RgbSpectrum {
        if !same_hemisphere(wo, wi) {
            return RgbSpectrum::ZERO;
        }
        if self.mf.effectively_smooth() {
            return RgbSpectrum::ZERO;
        }

        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return RgbSpectrum::ZERO;
        }

        let wm = wi + wo;
        if wm.length_squared() == 0.0 {
            return RgbSpectrum::ZERO;
        }
        let wm = wm.normalize();

        let fr = self.fresnel(wo.dot(wm).abs());
        self.mf.d(wm) * fr * self.mf.g(wo, wi) / (4.0 * cos_theta_o * cos_theta_i)
    }

    fn sample_f(&self, wo: Vec3f, _uc: Float, u: Point2f) -> Option<BSDFSample> {
        if self.mf.effectively_smooth() {
            let wi = Vec3f::new(-wo.x, -wo.y, wo.z);
            let f = self.fresnel(abs_cos_theta(wi)) / abs_cos_theta(wi);
            return Some(BSDFSample::new(f, wi, 1.0, BxDFFlags::SPECULAR_REFLECTION));
        }

        if wo.z == 0.0 {
            return None;
        }

        let wm = self.mf.sample_wm(wo, u);
        let wi = reflect(wo, wm);
        if !same_hemisphere(wo, wi) {
            return None;
        }

        let pdf = self.mf.pdf(wo, wm) / (4.0 * wo.dot(wm).abs());

        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        let fr = self.fresnel(wo.dot(wm).abs());
        let f = self.mf.d(wm) * fr * self.mf.g(wo, wi) / (4.0 * cos_theta_o * cos_theta_i);

        Some(BSDFSample::new(f, wi, pdf, BxDFFlags::GLOSSY_REFLECTION))
    }

    fn pdf(&self, wo: Vec3f, wi: Vec3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }
        if self.mf.effectively_smooth() {
            return 0.0;
        }

        let wm = wo + wi;
        if wm.length_squared() == 0.0 {
            return 0.0;
        }

        let wm = wm.normalize();
        let wm = if wm.z < 0.0 { -wm } else { wm };
        self.mf.pdf(wo, wm) / (4.0 * wo.dot(wm).abs())
    }

    fn flags(&self) -> BxDFFlags {
        if self.mf.effectively_smooth() {
            BxDFFlags::SPECULAR_REFLECTION
        } else {
            BxDFFlags::GLOSSY_REFLECTION
        }
    }

    fn regularize(&mut self) {
        self.mf.regularize();
    }
}
