use crate::math::{Float, Normal3f, Point2f, Point3f, Vec3f};
use crate::ray::{offset_ray_origin, Ray};

/// Read-only snapshot of a surface hit; never mutated after creation.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub position: Point3f,
    pub normal: Normal3f,
    pub uv: Point2f,
    /// Direction back toward the previous path vertex.
    pub wo: Vec3f,
    pub material: Option<usize>,
    pub area_light: Option<usize>,
}

impl Interaction {
    pub fn new(position: Point3f, normal: Normal3f, uv: Point2f, wo: Vec3f) -> Interaction {
        Interaction {
            position,
            normal,
            uv,
            wo,
            material: None,
            area_light: None,
        }
    }

    pub fn spawn_ray(&self, d: Vec3f) -> Ray {
        Ray::new(offset_ray_origin(self.position, self.normal, d), d)
    }

    pub fn offset_position(&self, w: Vec3f) -> Point3f {
        offset_ray_origin(self.position, self.normal, w)
    }
}

#[derive(Debug, Clone)]
pub struct ShapeIntersection {
    pub intr: Interaction,
    pub t_hit: Float,
}

/// Shading-point context handed to lights and light samplers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightSampleContext {
    pub position: Point3f,
    pub n: Normal3f,
    pub ns: Normal3f,
}

impl From<&Interaction> for LightSampleContext {
    fn from(intr: &Interaction) -> LightSampleContext {
        LightSampleContext {
            position: intr.position,
            n: intr.normal,
            ns: intr.normal,
        }
    }
}
