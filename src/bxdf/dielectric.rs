use crate::bxdf::{AbstractBxDF, BSDFSample, BxDFFlags};
use crate::math::scattering::{fr_dielectric, reflect, refract, TrowbridgeReitzDistribution};
use crate::math::{abs_cos_theta, cos_theta, sqr, Float, Point2f, Vec3f};
use crate::spectrum::RgbSpectrum;

/// Smooth or rough dielectric interface. Transmitted radiance is always
/// scaled by 1/eta^2 to account for solid-angle compression.
#[derive(Debug, Clone)]
pub struct DielectricBxDF {
    eta: Float,
    mf: TrowbridgeReitzDistribution,
}

impl DielectricBxDF {
    pub fn new(eta: Float, mf: TrowbridgeReitzDistribution) -> DielectricBxDF {
        DielectricBxDF { eta, mf }
    }
}

impl AbstractBxDF for DielectricBxDF {
    fn f(&self, wo: Vec3f, wi: Vec3f) -> RgbSpectrum {
        if self.eta == 1.0 || self.mf.effectively_smooth() {
            return RgbSpectrum::ZERO;
        }

        let cos_theta_o = cos_theta(wo);
        let cos_theta_i = cos_theta(wi);
        let reflect = cos_theta_i * cos_theta_o > 0.0;

        let etap = if !reflect {
            if cos_theta_o > 0.0 {
                self.eta
            } else {
                1.0 / self.eta
            }
        } else {
            1.0
        };

        let wm = wi * etap + wo;
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 || wm.length_squared() == 0.0 {
            return RgbSpectrum::ZERO;
        }

        let wm = wm.normalize();
        let wm = if wm.z < 0.0 { -wm } else { wm };

        if wm.dot(wi) * cos_theta_i < 0.0 || wm.dot(wo) * cos_theta_o < 0.0 {
            return RgbSpectrum::ZERO;
        }

        let fr = fr_dielectric(wo.dot(wm), self.eta);
        if reflect {
            RgbSpectrum::splat(
                self.mf.d(wm) * self.mf.g(wo, wi) * fr
                    / (4.0 * cos_theta_i * cos_theta_o).abs(),
            )
        } else {
            let denom = sqr(wi.dot(wm) + wo.dot(wm) / etap) * cos_theta_i * cos_theta_o;
            let ft = self.mf.d(wm) * (1.0 - fr) * self.mf.g(wo, wi)
                * (wi.dot(wm) * wo.dot(wm) / denom).abs()
                / sqr(etap);
            RgbSpectrum::splat(ft)
        }
    }

    fn sample_f(&self, wo: Vec3f, uc: Float, u: Point2f) -> Option<BSDFSample> {
        if self.eta == 1.0 || self.mf.effectively_smooth() {
            let ri = fr_dielectric(cos_theta(wo), self.eta);
            let ti = 1.0 - ri;

            if uc < ri / (ri + ti) {
                let wi = Vec3f::new(-wo.x, -wo.y, wo.z);
                let fr = RgbSpectrum::splat(ri / abs_cos_theta(wi));
                Some(BSDFSample::new(
                    fr,
                    wi,
                    ri / (ri + ti),
                    BxDFFlags::SPECULAR_REFLECTION,
                ))
            } else {
                let (wi, etap) = refract(wo, Vec3f::Z, self.eta)?;
                let ft = RgbSpectrum::splat(ti / abs_cos_theta(wi) / sqr(etap));
                Some(BSDFSample::new_with_eta(
                    ft,
                    wi,
                    ti / (ri + ti),
                    BxDFFlags::SPECULAR_TRANSMISSION,
                    etap,
                ))
            }
        } else {
            if wo.z == 0.0 {
                return None;
            }

            let wm = self.mf.sample_wm(wo, u);
            let ri = fr_dielectric(wo.dot(wm), self.eta);
            let ti = 1.0 - ri;

            if uc < ri / (ri + ti) {
                let wi = reflect(wo, wm);
                if wi.z * wo.z <= 0.0 {
                    return None;
                }

                let pdf = self.mf.pdf(wo, wm) / (4.0 * wo.dot(wm).abs()) * ri / (ri + ti);
                let fr = RgbSpectrum::splat(
                    self.mf.d(wm) * self.mf.g(wo, wi) * ri
                        / (4.0 * cos_theta(wi) * cos_theta(wo)).abs(),
                );
                Some(BSDFSample::new(fr, wi, pdf, BxDFFlags::GLOSSY_REFLECTION))
            } else {
                let (wi, etap) = refract(wo, wm, self.eta)?;
                if wi.z * wo.z > 0.0 || wi.z == 0.0 {
                    return None;
                }

                let denom = sqr(wi.dot(wm) + wo.dot(wm) / etap);
                let dwm_dwi = wi.dot(wm).abs() / denom;
                let pdf = self.mf.pdf(wo, wm) * dwm_dwi * ti / (ri + ti);

                let ft = RgbSpectrum::splat(
                    ti * self.mf.d(wm)
                        * self.mf.g(wo, wi)
                        * (wi.dot(wm) * wo.dot(wm) / (cos_theta(wi) * cos_theta(wo) * denom))
                            .abs()
                        / sqr(etap),
                );
                Some(BSDFSample::new_with_eta(
                    ft,
                    wi,
                    pdf,
                    BxDFFlags::GLOSSY_TRANSMISSION,
                    etap,
                ))
            }
        }
    }

    fn pdf(&self, wo: Vec3f, wi: Vec3f) -> Float {
        if self.eta == 1.0 || self.mf.effectively_smooth() {
            return 0.0;
        }

        let cos_theta_o = cos_theta(wo);
        let cos_theta_i = cos_theta(wi);
        let reflect = cos_theta_i * cos_theta_o > 0.0;

        let etap = if !reflect {
            if cos_theta_o > 0.0 {
                self.eta
            } else {
                1.0 / self.eta
            }
        } else {
            1.0
        };

        let wm = wi * etap + wo;
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 || wm.length_squared() == 0.0 {
            return 0.0;
        }

        let wm = wm.normalize();
        let wm = if wm.z < 0.0 { -wm } else { wm };

        if wm.dot(wi) * cos_theta_i < 0.0 || wm.dot(wo) * cos_theta_o < 0.0 {
            return 0.0;
        }

        let ri = fr_dielectric(wo.dot(wm), self.eta);
        let ti = 1.0 - ri;

        if reflect {
            self.mf.pdf(wo, wm) / (4.0 * wo.dot(wm).abs()) * ri / (ri + ti)
        } else {
            let denom = sqr(wi.dot(wm) + wo.dot(wm) / etap);
            let dwm_dwi = wi.dot(wm).abs() / denom;
            self.mf.pdf(wo, wm) * dwm_dwi * ti / (ri + ti)
        }
    }

    fn flags(&self) -> BxDFFlags {
        let refl_trans = BxDFFlags::REFLECTION | BxDFFlags::TRANSMISSION;
        if self.eta == 1.0 || self.mf.effectively_smooth() {
            refl_trans | BxDFFlags::SPECULAR
        } else {
            refl_trans | BxDFFlags::GLOSSY
        }
    }

    fn regularize(&mut self) {
        self.mf.regularize();
    }
}
