use ember::bxdf::{AbstractBxDF, ConductorBxDF, DielectricBxDF, DiffuseBxDF};
use ember::math::sampling::{cosine_hemisphere_pdf, sample_uniform_sphere, uniform_sphere_pdf};
use ember::math::scattering::TrowbridgeReitzDistribution;
use ember::math::{Float, Point2f, Point2i, Vec3f};
use ember::sampler::{AbstractSampler, IndependentSampler};
use ember::spectrum::RgbSpectrum;
use ember::BSDF;

fn test_sampler(seed: u64) -> IndependentSampler {
    let mut sampler = IndependentSampler::new(1, seed);
    sampler.start_pixel_sample(Point2i::ZERO, 0);
    sampler
}

#[test]
fn diffuse_sample_weight_equals_reflectance() {
    let reflectance = RgbSpectrum::new(0.7, 0.5, 0.2);
    let bxdf = DiffuseBxDF::new(reflectance);
    let wo = Vec3f::new(0.3, -0.2, 0.9).normalize();
    let mut sampler = test_sampler(1);

    // Cosine-weighted sampling cancels the cosine and the 1/pi exactly, so
    // every sample weight is the albedo itself.
    for _ in 0..100 {
        let uc = sampler.get_1d();
        let bs = bxdf.sample_f(wo, uc, sampler.get_2d()).unwrap();
        let weight = bs.f * bs.wi.z.abs() / bs.pdf;
        assert!((weight.r - reflectance.r).abs() < 1e-4);
        assert!((weight.g - reflectance.g).abs() < 1e-4);
        assert!((weight.b - reflectance.b).abs() < 1e-4);
        assert!(bs.flags.is_diffuse() && bs.flags.is_reflective());
    }
}

#[test]
fn diffuse_pdf_is_cosine_weighted() {
    let bxdf = DiffuseBxDF::new(RgbSpectrum::splat(0.5));
    let wo = Vec3f::new(0.1, 0.4, 0.7).normalize();
    let mut sampler = test_sampler(2);

    for _ in 0..100 {
        let uc = sampler.get_1d();
        let bs = bxdf.sample_f(wo, uc, sampler.get_2d()).unwrap();
        let expected = cosine_hemisphere_pdf(bs.wi.z.abs());
        assert!((bs.pdf - expected).abs() < 1e-5);
        assert!((bxdf.pdf(wo, bs.wi) - expected).abs() < 1e-5);
    }
}

#[test]
fn diffuse_pdf_integrates_to_one() {
    let bxdf = DiffuseBxDF::new(RgbSpectrum::splat(0.5));
    let wo = Vec3f::new(0.0, 0.0, 1.0);
    let mut sampler = test_sampler(3);

    let n = 200_000;
    let mut sum: Float = 0.0;
    for _ in 0..n {
        let wi = sample_uniform_sphere(sampler.get_2d());
        sum += bxdf.pdf(wo, wi) / uniform_sphere_pdf();
    }

    let integral = sum / n as Float;
    assert!((integral - 1.0).abs() < 0.05, "integral was {integral}");
}

#[test]
fn smooth_conductor_is_a_mirror() {
    let bxdf = ConductorBxDF::new(
        TrowbridgeReitzDistribution::new(0.0, 0.0),
        RgbSpectrum::splat(0.9),
    );
    let wo = Vec3f::new(0.4, -0.3, 0.6).normalize();

    let bs = bxdf.sample_f(wo, 0.5, Point2f::new(0.3, 0.7)).unwrap();
    assert!(bs.flags.is_specular());
    assert!((bs.wi.x + wo.x).abs() < 1e-6);
    assert!((bs.wi.y + wo.y).abs() < 1e-6);
    assert!((bs.wi.z - wo.z).abs() < 1e-6);
    assert_eq!(bs.pdf, 1.0);

    // Off-sample evaluation of a delta lobe is zero.
    assert!(bxdf.f(wo, bs.wi).is_zero());
    assert_eq!(bxdf.pdf(wo, bs.wi), 0.0);
}

#[test]
fn regularize_widens_smooth_conductor() {
    let mut bxdf = ConductorBxDF::new(
        TrowbridgeReitzDistribution::new(0.0, 0.0),
        RgbSpectrum::splat(0.9),
    );
    assert!(bxdf.flags().is_specular());

    bxdf.regularize();
    assert!(bxdf.flags().is_glossy());
    assert!(!bxdf.flags().is_specular());
}

#[test]
fn smooth_dielectric_reflection_branch() {
    let bxdf = DielectricBxDF::new(1.5, TrowbridgeReitzDistribution::new(0.0, 0.0));
    let wo = Vec3f::new(0.2, 0.1, 0.8).normalize();

    // uc = 0 always lands in the reflection branch.
    let bs = bxdf.sample_f(wo, 0.0, Point2f::new(0.5, 0.5)).unwrap();
    assert!(bs.flags.is_specular() && bs.flags.is_reflective());
    assert!((bs.wi.z - wo.z).abs() < 1e-6);

    // Fresnel-weighted lottery leaves the sample weight at one.
    let weight = bs.f * bs.wi.z.abs() / bs.pdf;
    assert!((weight.r - 1.0).abs() < 1e-4);
}

#[test]
fn smooth_dielectric_transmission_compresses_radiance() {
    let eta = 1.5;
    let bxdf = DielectricBxDF::new(eta, TrowbridgeReitzDistribution::new(0.0, 0.0));
    let wo = Vec3f::new(0.1, 0.0, 1.0).normalize();

    // uc = 1 always lands in the transmission branch at this incidence.
    let bs = bxdf.sample_f(wo, 0.999_999, Point2f::new(0.5, 0.5)).unwrap();
    assert!(bs.flags.is_specular() && bs.flags.is_transmissive());
    assert!(bs.wi.z < 0.0);
    assert!((bs.eta - eta).abs() < 1e-6);

    let weight = bs.f * bs.wi.z.abs() / bs.pdf;
    assert!((weight.r - 1.0 / (eta * eta)).abs() < 1e-4);
}

#[test]
fn rough_conductor_pdf_matches_its_sampling_density() {
    let bxdf = ConductorBxDF::new(
        TrowbridgeReitzDistribution::new(0.3, 0.3),
        RgbSpectrum::splat(0.9),
    );
    let wo = Vec3f::new(0.4, -0.1, 0.9).normalize();
    let mut sampler = test_sampler(5);

    // pdf() re-derives the density from the half vector; it must agree with
    // the density sample_f reports for its own samples.
    for _ in 0..1_000 {
        let uc = sampler.get_1d();
        let Some(bs) = bxdf.sample_f(wo, uc, sampler.get_2d()) else {
            continue;
        };
        let pdf = bxdf.pdf(wo, bs.wi);
        assert!(
            (pdf - bs.pdf).abs() / bs.pdf < 1e-3,
            "pdf {pdf} vs sampled {bs:?}"
        );
    }

    let n = 200_000;
    let mut sum: Float = 0.0;
    for _ in 0..n {
        let wi = sample_uniform_sphere(sampler.get_2d());
        sum += bxdf.pdf(wo, wi) / uniform_sphere_pdf();
    }

    let integral = sum / n as Float;
    assert!((integral - 1.0).abs() < 0.05, "integral was {integral}");
}

#[test]
fn rough_dielectric_pdf_matches_its_sampling_density() {
    let bxdf = DielectricBxDF::new(1.5, TrowbridgeReitzDistribution::new(0.3, 0.3));
    let wo = Vec3f::new(0.3, 0.2, 0.9).normalize();
    let mut sampler = test_sampler(6);

    let mut reflections = 0;
    let mut transmissions = 0;
    for _ in 0..1_000 {
        let uc = sampler.get_1d();
        let Some(bs) = bxdf.sample_f(wo, uc, sampler.get_2d()) else {
            continue;
        };
        if bs.flags.is_transmissive() {
            transmissions += 1;
        } else {
            reflections += 1;
        }

        let pdf = bxdf.pdf(wo, bs.wi);
        assert!(
            (pdf - bs.pdf).abs() / bs.pdf < 1e-3,
            "pdf {pdf} vs sampled {bs:?}"
        );
    }
    // The Fresnel lottery must have exercised both lobes.
    assert!(reflections > 0 && transmissions > 0);

    let n = 200_000;
    let mut sum: Float = 0.0;
    for _ in 0..n {
        let wi = sample_uniform_sphere(sampler.get_2d());
        sum += bxdf.pdf(wo, wi) / uniform_sphere_pdf();
    }

    let integral = sum / n as Float;
    assert!((integral - 1.0).abs() < 0.05, "integral was {integral}");
}

#[test]
fn black_diffuse_produces_no_samples() {
    let bsdf = BSDF::new(
        Vec3f::new(0.0, 1.0, 0.0),
        ember::BxDF::Diffuse(DiffuseBxDF::new(RgbSpectrum::ZERO)),
    );
    let wo = Vec3f::new(0.0, 1.0, 0.0);

    assert!(bsdf.flags().is_empty());
    assert!(bsdf.sample_f(wo, 0.5, Point2f::new(0.3, 0.3)).is_none());
}

#[test]
fn bsdf_converts_between_frames() {
    let ns = Vec3f::new(0.0, 1.0, 0.0);
    let bsdf = BSDF::new(
        ns,
        ember::BxDF::Diffuse(DiffuseBxDF::new(RgbSpectrum::splat(0.8))),
    );
    let wo = Vec3f::new(0.0, 1.0, 0.0);
    let mut sampler = test_sampler(4);

    for _ in 0..100 {
        let uc = sampler.get_1d();
        let bs = bsdf.sample_f(wo, uc, sampler.get_2d()).unwrap();
        // Sampled directions come back in render space, above the surface.
        assert!(bs.wi.dot(ns) > 0.0);
        assert!((bs.wi.length() - 1.0).abs() < 1e-4);
    }
}
