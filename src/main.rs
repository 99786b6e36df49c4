use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use console::style;

use ember::light::sampler::{LightSampler, PowerLightSampler, UniformLightSampler};
use ember::math::{Point2i, Point3f, Vec3f};
use ember::{
    render, Camera, DiffuseAreaLight, Film, IndependentSampler, Light, Material, Options,
    PathIntegrator, Primitive, RayIntegrator, RgbSpectrum, Sampler, SceneSnapshot,
    SimplePathIntegrator, StratifiedSampler, Triangle,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SamplerChoice {
    #[default]
    Independent,
    Stratified,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LightSamplerChoice {
    #[default]
    Power,
    Uniform,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum IntegratorChoice {
    #[default]
    Path,
    SimplePath,
}

#[derive(Parser, Debug)]
#[command(about = "Renders the built-in box scene with a path tracer")]
struct Args {
    /// Output image path
    #[arg(default_value = "render.png")]
    outfile: PathBuf,

    #[arg(long, default_value_t = 64)]
    spp: i32,

    #[arg(long, default_value_t = 8)]
    max_depth: i32,

    #[arg(long, default_value_t = 400)]
    width: i32,

    #[arg(long, default_value_t = 400)]
    height: i32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t)]
    sampler: SamplerChoice,

    #[arg(long, value_enum, default_value_t)]
    light_sampler: LightSamplerChoice,

    #[arg(long, value_enum, default_value_t)]
    integrator: IntegratorChoice,

    #[arg(long, default_value_t = 16)]
    tile_size: i32,

    /// Disable path regularization after the first non-specular bounce
    #[arg(long)]
    no_regularize: bool,
}

/// Pushes a quad as two triangles; all four corners should be coplanar.
fn push_quad(
    primitives: &mut Vec<Primitive>,
    p0: Point3f,
    p1: Point3f,
    p2: Point3f,
    p3: Point3f,
    material: usize,
) {
    primitives.push(Primitive::new(Triangle::new(p0, p1, p2), material));
    primitives.push(Primitive::new(Triangle::new(p0, p2, p3), material));
}

fn push_emissive_quad(
    primitives: &mut Vec<Primitive>,
    lights: &mut Vec<Light>,
    p0: Point3f,
    p1: Point3f,
    p2: Point3f,
    p3: Point3f,
    material: usize,
    emission: RgbSpectrum,
) {
    for tri in [
        Triangle::new(p0, p1, p2),
        Triangle::new(p0, p2, p3),
    ] {
        let shape = Arc::new(tri);
        lights.push(Light::DiffuseArea(DiffuseAreaLight::new(
            shape.clone(),
            emission,
            1.0,
            true,
        )));
        primitives.push(Primitive::with_area_light(
            (*shape).clone(),
            material,
            lights.len() - 1,
        ));
    }
}

/// Axis-aligned box from `min` to `max` built out of quads.
fn push_box(primitives: &mut Vec<Primitive>, min: Point3f, max: Point3f, material: usize) {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);

    let corners = |a: Point3f, b: Point3f, c: Point3f, d: Point3f, prims: &mut Vec<Primitive>| {
        push_quad(prims, a, b, c, d, material)
    };

    corners(
        Point3f::new(x0, y0, z0),
        Point3f::new(x1, y0, z0),
        Point3f::new(x1, y1, z0),
        Point3f::new(x0, y1, z0),
        primitives,
    );
    corners(
        Point3f::new(x0, y0, z1),
        Point3f::new(x1, y0, z1),
        Point3f::new(x1, y1, z1),
        Point3f::new(x0, y1, z1),
        primitives,
    );
    corners(
        Point3f::new(x0, y0, z0),
        Point3f::new(x0, y1, z0),
        Point3f::new(x0, y1, z1),
        Point3f::new(x0, y0, z1),
        primitives,
    );
    corners(
        Point3f::new(x1, y0, z0),
        Point3f::new(x1, y1, z0),
        Point3f::new(x1, y1, z1),
        Point3f::new(x1, y0, z1),
        primitives,
    );
    corners(
        Point3f::new(x0, y1, z0),
        Point3f::new(x1, y1, z0),
        Point3f::new(x1, y1, z1),
        Point3f::new(x0, y1, z1),
        primitives,
    );
    corners(
        Point3f::new(x0, y0, z0),
        Point3f::new(x1, y0, z0),
        Point3f::new(x1, y0, z1),
        Point3f::new(x0, y0, z1),
        primitives,
    );
}

/// Classic box interior with a ceiling light, a mirror block, and a glass
/// block.
fn build_scene() -> SceneSnapshot {
    const WHITE: usize = 0;
    const RED: usize = 1;
    const GREEN: usize = 2;
    const MIRROR: usize = 3;
    const GLASS: usize = 4;
    const LAMP: usize = 5;

    let materials = vec![
        Material::Diffuse {
            reflectance: RgbSpectrum::splat(0.73),
        },
        Material::Diffuse {
            reflectance: RgbSpectrum::new(0.65, 0.05, 0.05),
        },
        Material::Diffuse {
            reflectance: RgbSpectrum::new(0.12, 0.45, 0.15),
        },
        Material::Conductor {
            reflectance: RgbSpectrum::new(0.9, 0.9, 0.9),
            roughness: 0.0,
        },
        Material::Dielectric {
            eta: 1.5,
            roughness: 0.0,
        },
        Material::Diffuse {
            reflectance: RgbSpectrum::ZERO,
        },
    ];

    let mut primitives = Vec::new();
    let mut lights = Vec::new();

    // Floor, ceiling, back wall.
    push_quad(
        &mut primitives,
        Point3f::new(0.0, 0.0, 0.0),
        Point3f::new(555.0, 0.0, 0.0),
        Point3f::new(555.0, 0.0, 555.0),
        Point3f::new(0.0, 0.0, 555.0),
        WHITE,
    );
    push_quad(
        &mut primitives,
        Point3f::new(0.0, 555.0, 0.0),
        Point3f::new(555.0, 555.0, 0.0),
        Point3f::new(555.0, 555.0, 555.0),
        Point3f::new(0.0, 555.0, 555.0),
        WHITE,
    );
    push_quad(
        &mut primitives,
        Point3f::new(0.0, 0.0, 555.0),
        Point3f::new(555.0, 0.0, 555.0),
        Point3f::new(555.0, 555.0, 555.0),
        Point3f::new(0.0, 555.0, 555.0),
        WHITE,
    );

    // Side walls.
    push_quad(
        &mut primitives,
        Point3f::new(0.0, 0.0, 0.0),
        Point3f::new(0.0, 0.0, 555.0),
        Point3f::new(0.0, 555.0, 555.0),
        Point3f::new(0.0, 555.0, 0.0),
        RED,
    );
    push_quad(
        &mut primitives,
        Point3f::new(555.0, 0.0, 0.0),
        Point3f::new(555.0, 0.0, 555.0),
        Point3f::new(555.0, 555.0, 555.0),
        Point3f::new(555.0, 555.0, 0.0),
        GREEN,
    );

    push_emissive_quad(
        &mut primitives,
        &mut lights,
        Point3f::new(213.0, 554.0, 227.0),
        Point3f::new(343.0, 554.0, 227.0),
        Point3f::new(343.0, 554.0, 332.0),
        Point3f::new(213.0, 554.0, 332.0),
        LAMP,
        RgbSpectrum::new(15.0, 15.0, 15.0),
    );

    push_box(
        &mut primitives,
        Point3f::new(265.0, 0.0, 295.0),
        Point3f::new(430.0, 330.0, 460.0),
        MIRROR,
    );
    push_box(
        &mut primitives,
        Point3f::new(105.0, 0.0, 65.0),
        Point3f::new(260.0, 165.0, 230.0),
        GLASS,
    );

    SceneSnapshot::new(primitives, materials, lights)
}

fn main() {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    println!("{} Building scene...", style("[1/3]").bold().dim());
    let scene = build_scene();
    let camera = Camera::new(
        Point3f::new(278.0, 273.0, -800.0),
        Point3f::new(278.0, 273.0, 0.0),
        Vec3f::new(0.0, 1.0, 0.0),
        40.0,
        Point2i::new(args.width, args.height),
    );

    let light_sampler = match args.light_sampler {
        LightSamplerChoice::Power => {
            LightSampler::Power(PowerLightSampler::new(scene.lights().clone()))
        }
        LightSamplerChoice::Uniform => {
            LightSampler::Uniform(UniformLightSampler::new(scene.lights().clone()))
        }
    };

    let integrator = match args.integrator {
        IntegratorChoice::Path => RayIntegrator::Path(PathIntegrator::new(
            args.max_depth,
            light_sampler,
            !args.no_regularize,
        )),
        IntegratorChoice::SimplePath => RayIntegrator::SimplePath(SimplePathIntegrator::new(
            args.max_depth,
            true,
            true,
            UniformLightSampler::new(scene.lights().clone()),
        )),
    };

    let sampler = match args.sampler {
        SamplerChoice::Independent => {
            Sampler::Independent(IndependentSampler::new(args.spp, args.seed))
        }
        SamplerChoice::Stratified => {
            // Rounds up to the nearest square sample count.
            let n = (args.spp as f64).sqrt().ceil() as i32;
            Sampler::Stratified(StratifiedSampler::new(n, n, true, args.seed))
        }
    };

    let options = Options {
        samples_per_pixel: args.spp,
        tile_size: args.tile_size,
        ..Options::default()
    };

    println!("{} Rendering...", style("[2/3]").bold().dim());
    let start = Instant::now();

    let mut film = Film::new(camera.resolution());
    render(&scene, &camera, &integrator, &sampler, &mut film, &options);

    println!(
        "{} Writing {}...",
        style("[3/3]").bold().dim(),
        args.outfile.display()
    );
    if let Err(err) = film.write_png(&args.outfile) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    println!("Finished in {:.2?}", start.elapsed());
}
