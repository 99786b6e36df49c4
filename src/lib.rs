pub mod bsdf;
pub mod bxdf;
pub mod camera;
pub mod film;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod math;
pub mod options;
pub mod ray;
pub mod render;
pub mod sampler;
pub mod scene;
pub mod shape;
pub mod spectrum;

pub use bsdf::BSDF;
pub use bxdf::{AbstractBxDF, BSDFSample, BxDF, BxDFFlags};
pub use camera::Camera;
pub use film::Film;
pub use integrator::{AbstractRayIntegrator, PathIntegrator, RayIntegrator, SimplePathIntegrator};
pub use interaction::{Interaction, LightSampleContext, ShapeIntersection};
pub use light::sampler::{
    AbstractLightSampler, LightSampler, PowerLightSampler, SampledLight, UniformLightSampler,
};
pub use light::{
    AbstractLight, DiffuseAreaLight, DistantLight, Light, LightLiSample, LightType, PointLight,
    UniformInfiniteLight,
};
pub use material::Material;
pub use options::Options;
pub use ray::Ray;
pub use render::{render, RenderSession};
pub use sampler::{AbstractSampler, IndependentSampler, Sampler, StratifiedSampler};
pub use scene::{Primitive, SceneSnapshot};
pub use shape::{ShapeSample, Triangle};
pub use spectrum::RgbSpectrum;
