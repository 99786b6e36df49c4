use std::sync::Arc;

use ember::light::sampler::{LightSampler, UniformLightSampler};
use ember::light::{DiffuseAreaLight, Light, PointLight, UniformInfiniteLight};
use ember::math::{Float, Point2f, Point2i, Point3f, Vec3f, FRAC_1_PI};
use ember::{
    AbstractRayIntegrator, AbstractSampler, IndependentSampler, Material, PathIntegrator,
    Primitive, Ray, RayIntegrator, RgbSpectrum, Sampler, SceneSnapshot, SimplePathIntegrator,
    Triangle,
};

const ALBEDO: Float = 0.5;

fn floor_primitives() -> Vec<Primitive> {
    vec![
        Primitive::new(
            Triangle::new(
                Point3f::new(-50.0, 0.0, -50.0),
                Point3f::new(50.0, 0.0, -50.0),
                Point3f::new(50.0, 0.0, 50.0),
            ),
            0,
        ),
        Primitive::new(
            Triangle::new(
                Point3f::new(-50.0, 0.0, -50.0),
                Point3f::new(50.0, 0.0, 50.0),
                Point3f::new(-50.0, 0.0, 50.0),
            ),
            0,
        ),
    ]
}

fn floor_materials() -> Vec<Material> {
    vec![
        Material::Diffuse {
            reflectance: RgbSpectrum::splat(ALBEDO),
        },
        Material::Diffuse {
            reflectance: RgbSpectrum::ZERO,
        },
    ]
}

fn lamp_triangle() -> Triangle {
    Triangle::new(
        Point3f::new(-0.1, 2.0, -0.1),
        Point3f::new(0.1, 2.0, -0.1),
        Point3f::new(0.0, 2.0, 0.1),
    )
}

/// Diffuse floor lit by a small emissive triangle overhead.
fn area_light_scene(emission: Float) -> SceneSnapshot {
    let mut primitives = floor_primitives();
    let shape = Arc::new(lamp_triangle());

    let lights = vec![Light::DiffuseArea(DiffuseAreaLight::new(
        shape.clone(),
        RgbSpectrum::splat(emission),
        1.0,
        true,
    ))];
    primitives.push(Primitive::with_area_light((*shape).clone(), 1, 0));

    SceneSnapshot::new(primitives, floor_materials(), lights)
}

fn path_integrator(scene: &SceneSnapshot, max_depth: i32) -> RayIntegrator {
    RayIntegrator::Path(PathIntegrator::new(
        max_depth,
        LightSampler::Uniform(UniformLightSampler::new(scene.lights().clone())),
        false,
    ))
}

/// Camera ray toward a floor point away from the tile diagonal.
fn floor_ray() -> Ray {
    Ray::new(
        Point3f::new(0.2, 1.0, 0.7),
        Vec3f::new(0.0, -1.0, -1.0).normalize(),
    )
}

/// Quadrature reference for the direct illumination the floor point receives
/// from the lamp triangle.
fn direct_lighting_reference(p: Point3f, emission: Float) -> Float {
    let tri = lamp_triangle();
    let n_l = tri.normal();
    let area = tri.area();

    let grid = 200;
    let mut sum: Float = 0.0;
    for i in 0..grid {
        for j in 0..grid {
            let u = Point2f::new(
                (i as Float + 0.5) / grid as Float,
                (j as Float + 0.5) / grid as Float,
            );
            let q = tri.sample(u).intr.position;

            let d = q - p;
            let dist_2 = d.length_squared();
            let wi = d / dist_2.sqrt();
            let cos_s = wi.y;
            let cos_l = n_l.dot(wi).abs();
            sum += emission * ALBEDO * FRAC_1_PI * cos_s * cos_l / dist_2;
        }
    }

    sum / (grid * grid) as Float * area
}

#[test]
fn path_converges_to_direct_lighting() {
    let emission = 10.0;
    let scene = area_light_scene(emission);
    let integrator = path_integrator(&scene, 1);

    let shading_point = Point3f::new(0.2, 0.0, -0.3);
    let expected = direct_lighting_reference(shading_point, emission);

    let n = 20_000;
    let mut sampler = Sampler::Independent(IndependentSampler::new(n, 0));
    let mut sum = RgbSpectrum::ZERO;
    for i in 0..n {
        sampler.start_pixel_sample(Point2i::ZERO, i);
        sum += integrator.li(&scene, floor_ray(), &mut sampler);
    }
    let estimate = (sum / n as Float).average();

    assert!(
        (estimate - expected).abs() / expected < 0.03,
        "estimate {estimate} vs reference {expected}"
    );
}

#[test]
fn zero_bounce_returns_visible_emission_only() {
    let scene = area_light_scene(10.0);
    let integrator = path_integrator(&scene, 0);

    let mut sampler = Sampler::Independent(IndependentSampler::new(1, 0));
    sampler.start_pixel_sample(Point2i::ZERO, 0);

    // Straight down into the lamp: its radiance and nothing else.
    let ray = Ray::new(Point3f::new(0.0, 3.0, 0.0), Vec3f::new(0.0, -1.0, 0.0));
    let l = integrator.li(&scene, ray, &mut sampler);
    assert!((l.r - 10.0).abs() < 1e-4);

    // Down onto the bare floor: no light can be reached in zero bounces.
    sampler.start_pixel_sample(Point2i::ZERO, 0);
    let l = integrator.li(&scene, floor_ray(), &mut sampler);
    assert!(l.is_zero());
}

#[test]
fn escaped_rays_collect_environment_radiance() {
    let lights = vec![Light::UniformInfinite(UniformInfiniteLight::new(
        RgbSpectrum::splat(2.0),
        1.0,
    ))];
    let scene = SceneSnapshot::new(Vec::new(), Vec::new(), lights);
    let integrator = path_integrator(&scene, 5);

    let mut sampler = Sampler::Independent(IndependentSampler::new(1, 0));
    sampler.start_pixel_sample(Point2i::ZERO, 0);

    let ray = Ray::new(Point3f::ZERO, Vec3f::new(0.3, 0.5, -0.2).normalize());
    let l = integrator.li(&scene, ray, &mut sampler);
    assert!((l.r - 2.0).abs() < 1e-5);
    assert!((l.g - 2.0).abs() < 1e-5);
}

#[test]
fn estimators_agree_on_delta_light() {
    let light_pos = Point3f::new(0.0, 3.0, 0.0);
    let intensity = 10.0;
    let lights = vec![Light::Point(PointLight::new(
        light_pos,
        RgbSpectrum::splat(intensity),
        1.0,
    ))];
    let scene = SceneSnapshot::new(floor_primitives(), floor_materials(), lights);

    let path = path_integrator(&scene, 1);
    let simple = RayIntegrator::SimplePath(SimplePathIntegrator::new(
        1,
        true,
        true,
        UniformLightSampler::new(scene.lights().clone()),
    ));

    // Direct lighting from a point source is computed without variance, so a
    // single estimate from each strategy is exact.
    let shading_point = Point3f::new(0.2, 0.0, -0.3);
    let d = light_pos - shading_point;
    let wi = d.normalize();
    let expected = ALBEDO * FRAC_1_PI * intensity / d.length_squared() * wi.y;

    let mut sampler = Sampler::Independent(IndependentSampler::new(1, 11));
    sampler.start_pixel_sample(Point2i::ZERO, 0);
    let l_path = integrate_once(&path, &scene, &mut sampler);

    sampler.start_pixel_sample(Point2i::ZERO, 0);
    let l_simple = integrate_once(&simple, &scene, &mut sampler);

    assert!((l_path.r - expected).abs() / expected < 1e-3);
    assert!((l_simple.r - expected).abs() / expected < 1e-3);
}

fn integrate_once(
    integrator: &RayIntegrator,
    scene: &SceneSnapshot,
    sampler: &mut Sampler,
) -> RgbSpectrum {
    integrator.li(scene, floor_ray(), sampler)
}

#[test]
fn russian_roulette_preserves_expected_value() {
    // Two parallel diffuse planes around a point light keep paths bouncing
    // until roulette (path) or the depth cap (simple path) ends them. The
    // roulette-free estimator is the reference expectation.
    let albedo = 0.2;
    let materials = vec![Material::Diffuse {
        reflectance: RgbSpectrum::splat(albedo),
    }];
    let mut primitives = floor_primitives();
    primitives.push(Primitive::new(
        Triangle::new(
            Point3f::new(-50.0, 3.0, -50.0),
            Point3f::new(50.0, 3.0, -50.0),
            Point3f::new(50.0, 3.0, 50.0),
        ),
        0,
    ));
    primitives.push(Primitive::new(
        Triangle::new(
            Point3f::new(-50.0, 3.0, -50.0),
            Point3f::new(50.0, 3.0, 50.0),
            Point3f::new(-50.0, 3.0, 50.0),
        ),
        0,
    ));
    let lights = vec![Light::Point(PointLight::new(
        Point3f::new(0.0, 1.5, 0.0),
        RgbSpectrum::splat(10.0),
        1.0,
    ))];
    let scene = SceneSnapshot::new(primitives, materials, lights);

    let max_depth = 20;
    let path = path_integrator(&scene, max_depth);
    let simple = RayIntegrator::SimplePath(SimplePathIntegrator::new(
        max_depth,
        true,
        true,
        UniformLightSampler::new(scene.lights().clone()),
    ));

    let estimate = |integrator: &RayIntegrator, seed: u64| {
        let n = 30_000;
        let mut sampler = Sampler::Independent(IndependentSampler::new(n, seed));
        let mut sum = RgbSpectrum::ZERO;
        for i in 0..n {
            sampler.start_pixel_sample(Point2i::ZERO, i);
            sum += integrator.li(&scene, floor_ray(), &mut sampler);
        }
        (sum / n as Float).average()
    };

    let with_roulette = estimate(&path, 1);
    let without_roulette = estimate(&simple, 2);

    assert!(
        (with_roulette - without_roulette).abs() / without_roulette < 0.05,
        "roulette {with_roulette} vs reference {without_roulette}"
    );
}

#[test]
fn identical_seeds_replay_identical_paths() {
    let scene = area_light_scene(10.0);
    let integrator = path_integrator(&scene, 4);

    let run = || {
        let mut sampler = Sampler::Independent(IndependentSampler::new(8, 7));
        let mut values = Vec::new();
        for i in 0..8 {
            sampler.start_pixel_sample(Point2i::new(3, 5), i);
            values.push(integrator.li(&scene, floor_ray(), &mut sampler));
        }
        values
    };

    assert_eq!(run(), run());
}
