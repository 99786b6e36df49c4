use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::scene::SceneSnapshot;
use crate::spectrum::RgbSpectrum;

pub mod path;
pub mod simple_path;

pub use path::PathIntegrator;
pub use simple_path::SimplePathIntegrator;

/// One-sample radiance estimator along a camera ray.
pub trait AbstractRayIntegrator {
    fn li(&self, scene: &SceneSnapshot, ray: Ray, sampler: &mut Sampler) -> RgbSpectrum;
}

pub enum RayIntegrator {
    Path(PathIntegrator),
    SimplePath(SimplePathIntegrator),
}

impl AbstractRayIntegrator for RayIntegrator {
    fn li(&self, scene: &SceneSnapshot, ray: Ray, sampler: &mut Sampler) -> RgbSpectrum {
        match self {
            RayIntegrator::Path(i) => i.li(scene, ray, sampler),
            RayIntegrator::SimplePath(i) => i.li(scene, ray, sampler),
        }
    }
}
