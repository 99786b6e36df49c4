use bitflags::bitflags;

use crate::math::{Float, Point2f, Vec3f};
use crate::spectrum::RgbSpectrum;

pub mod conductor;
pub mod dielectric;
pub mod diffuse;

pub use conductor::ConductorBxDF;
pub use dielectric::DielectricBxDF;
pub use diffuse::DiffuseBxDF;

/// Scattering model in the local frame with the shading normal along +z.
pub trait AbstractBxDF {
    fn f(&self, wo: Vec3f, wi: Vec3f) -> RgbSpectrum;

    fn sample_f(&self, wo: Vec3f, uc: Float, u: Point2f) -> Option<BSDFSample>;

    fn pdf(&self, wo: Vec3f, wi: Vec3f) -> Float;

    fn flags(&self) -> BxDFFlags;

    fn regularize(&mut self);
}

#[derive(Debug, Clone)]
pub enum BxDF {
    Diffuse(DiffuseBxDF),
    Conductor(ConductorBxDF),
    Dielectric(DielectricBxDF),
}

impl AbstractBxDF for BxDF {
    fn f(&self, wo: Vec3f, wi: Vec3f) -> RgbSpectrum {
        match self {
            BxDF::Diffuse(b) => b.f(wo, wi),
            BxDF::Conductor(b) => b.f(wo, wi),
            BxDF::Dielectric(b) => b.f(wo, wi),
        }
    }

    fn sample_f(&self, wo: Vec3f, uc: Float, u: Point2f) -> Option<BSDFSample> {
        match self {
            BxDF::Diffuse(b) => b.sample_f(wo, uc, u),
            BxDF::Conductor(b) => b.sample_f(wo, uc, u),
            BxDF::Dielectric(b) => b.sample_f(wo, uc, u),
        }
    }

    fn pdf(&self, wo: Vec3f, wi: Vec3f) -> Float {
        match self {
            BxDF::Diffuse(b) => b.pdf(wo, wi),
            BxDF::Conductor(b) => b.pdf(wo, wi),
            BxDF::Dielectric(b) => b.pdf(wo, wi),
        }
    }

    fn flags(&self) -> BxDFFlags {
        match self {
            BxDF::Diffuse(b) => b.flags(),
            BxDF::Conductor(b) => b.flags(),
            BxDF::Dielectric(b) => b.flags(),
        }
    }

    fn regularize(&mut self) {
        match self {
            BxDF::Diffuse(b) => b.regularize(),
            BxDF::Conductor(b) => b.regularize(),
            BxDF::Dielectric(b) => b.regularize(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BSDFSample {
    pub f: RgbSpectrum,
    pub wi: Vec3f,
    pub pdf: Float,
    pub flags: BxDFFlags,
    /// Relative index of refraction picked up on transmission.
    pub eta: Float,
    /// True when `pdf` is only proportional to the true sampling density and
    /// the caller must re-query `pdf()` for estimator weights.
    pub pdf_is_proportional: bool,
}

impl BSDFSample {
    pub fn new(f: RgbSpectrum, wi: Vec3f, pdf: Float, flags: BxDFFlags) -> BSDFSample {
        BSDFSample {
            f,
            wi,
            pdf,
            flags,
            eta: 1.0,
            pdf_is_proportional: false,
        }
    }

    pub fn new_with_eta(
        f: RgbSpectrum,
        wi: Vec3f,
        pdf: Float,
        flags: BxDFFlags,
        eta: Float,
    ) -> BSDFSample {
        BSDFSample {
            f,
            wi,
            pdf,
            flags,
            eta,
            pdf_is_proportional: false,
        }
    }

    pub fn is_reflection(&self) -> bool {
        self.flags.is_reflective()
    }

    pub fn is_transmission(&self) -> bool {
        self.flags.is_transmissive()
    }

    pub fn is_diffuse(&self) -> bool {
        self.flags.is_diffuse()
    }

    pub fn is_glossy(&self) -> bool {
        self.flags.is_glossy()
    }

    pub fn is_specular(&self) -> bool {
        self.flags.is_specular()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BxDFFlags: u8 {
        const REFLECTION = 1 << 0;
        const TRANSMISSION = 1 << 1;
        const DIFFUSE = 1 << 2;
        const GLOSSY = 1 << 3;
        const SPECULAR = 1 << 4;

        const DIFFUSE_REFLECTION = Self::DIFFUSE.bits() | Self::REFLECTION.bits();
        const DIFFUSE_TRANSMISSION = Self::DIFFUSE.bits() | Self::TRANSMISSION.bits();
        const GLOSSY_REFLECTION = Self::GLOSSY.bits() | Self::REFLECTION.bits();
        const GLOSSY_TRANSMISSION = Self::GLOSSY.bits() | Self::TRANSMISSION.bits();
        const SPECULAR_REFLECTION = Self::SPECULAR.bits() | Self::REFLECTION.bits();
        const SPECULAR_TRANSMISSION = Self::SPECULAR.bits() | Self::TRANSMISSION.bits();
    }
}

impl BxDFFlags {
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.contains(BxDFFlags::REFLECTION)
    }

    #[inline]
    pub fn is_transmissive(&self) -> bool {
        self.contains(BxDFFlags::TRANSMISSION)
    }

    #[inline]
    pub fn is_diffuse(&self) -> bool {
        self.contains(BxDFFlags::DIFFUSE)
    }

    #[inline]
    pub fn is_glossy(&self) -> bool {
        self.contains(BxDFFlags::GLOSSY)
    }

    #[inline]
    pub fn is_specular(&self) -> bool {
        self.contains(BxDFFlags::SPECULAR)
    }

    #[inline]
    pub fn is_non_specular(&self) -> bool {
        self.intersects(BxDFFlags::DIFFUSE | BxDFFlags::GLOSSY)
    }
}
