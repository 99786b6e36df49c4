use crate::bsdf::BSDF;
use crate::bxdf::{BxDF, ConductorBxDF, DielectricBxDF, DiffuseBxDF};
use crate::interaction::Interaction;
use crate::math::scattering::TrowbridgeReitzDistribution;
use crate::math::Float;
use crate::spectrum::RgbSpectrum;

#[derive(Debug, Clone)]
pub enum Material {
    Diffuse {
        reflectance: RgbSpectrum,
    },
    Conductor {
        reflectance: RgbSpectrum,
        roughness: Float,
    },
    Dielectric {
        eta: Float,
        roughness: Float,
    },
    /// Boundary with no scattering; rays pass straight through.
    Interface,
}

impl Material {
    pub fn get_bsdf(&self, intr: &Interaction) -> Option<BSDF> {
        let bxdf = match self {
            Material::Diffuse { reflectance } => BxDF::Diffuse(DiffuseBxDF::new(*reflectance)),
            Material::Conductor {
                reflectance,
                roughness,
            } => {
                let alpha = TrowbridgeReitzDistribution::roughness_to_alpha(*roughness);
                BxDF::Conductor(ConductorBxDF::new(
                    TrowbridgeReitzDistribution::new(alpha, alpha),
                    *reflectance,
                ))
            }
            Material::Dielectric { eta, roughness } => {
                let alpha = TrowbridgeReitzDistribution::roughness_to_alpha(*roughness);
                BxDF::Dielectric(DielectricBxDF::new(
                    *eta,
                    TrowbridgeReitzDistribution::new(alpha, alpha),
                ))
            }
            Material::Interface => return None,
        };

        Some(BSDF::new(intr.normal, bxdf))
    }
}
