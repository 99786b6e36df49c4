use std::sync::Arc;

use crate::interaction::ShapeIntersection;
use crate::light::{AbstractLight, Light, LightType};
use crate::material::Material;
use crate::math::{Bounds3f, Float, Point3f, Vec3f};
use crate::ray::{Ray, SHADOW_EPSILON};
use crate::shape::Triangle;

/// One triangle bound to a material slot and, optionally, an area light.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Triangle,
    pub material: usize,
    pub area_light: Option<usize>,
}

impl Primitive {
    pub fn new(shape: Triangle, material: usize) -> Primitive {
        Primitive {
            shape,
            material,
            area_light: None,
        }
    }

    pub fn with_area_light(shape: Triangle, material: usize, area_light: usize) -> Primitive {
        Primitive {
            shape,
            material,
            area_light: Some(area_light),
        }
    }
}

/// Immutable scene handed to integrators; safe to share across render threads.
pub struct SceneSnapshot {
    primitives: Vec<Primitive>,
    materials: Vec<Material>,
    lights: Arc<[Arc<Light>]>,
    infinite_lights: Vec<Arc<Light>>,
    bounds: Bounds3f,
}

impl SceneSnapshot {
    pub fn new(
        primitives: Vec<Primitive>,
        materials: Vec<Material>,
        mut lights: Vec<Light>,
    ) -> SceneSnapshot {
        let mut bounds = Bounds3f::default();
        for prim in primitives.iter() {
            bounds = bounds.union_box(prim.shape.bounds());
        }

        for light in lights.iter_mut() {
            light.preprocess(&bounds);
        }

        let lights: Arc<[Arc<Light>]> = lights.into_iter().map(Arc::new).collect();
        let infinite_lights = lights
            .iter()
            .filter(|l| l.light_type() == LightType::Infinite)
            .cloned()
            .collect();

        SceneSnapshot {
            primitives,
            materials,
            lights,
            infinite_lights,
            bounds,
        }
    }

    pub fn intersect(&self, ray: &Ray, t_max: Float) -> Option<ShapeIntersection> {
        debug_assert!(ray.direction != Vec3f::ZERO);

        let mut closest: Option<ShapeIntersection> = None;
        let mut t_best = t_max;

        for prim in self.primitives.iter() {
            if let Some((t, b1, b2)) = prim.shape.intersect(ray, t_best) {
                let mut intr = prim.shape.interaction_at(ray, t, b1, b2);
                intr.material = Some(prim.material);
                intr.area_light = prim.area_light;
                t_best = t;
                closest = Some(ShapeIntersection { intr, t_hit: t });
            }
        }

        closest
    }

    pub fn is_intersected(&self, ray: &Ray, t_max: Float) -> bool {
        self.primitives
            .iter()
            .any(|prim| prim.shape.intersect(ray, t_max).is_some())
    }

    /// True when the open segment between `p0` and `p1` carries no geometry.
    /// Coincident endpoints count as occluded.
    pub fn unoccluded(&self, p0: Point3f, p1: Point3f) -> bool {
        let d = p1 - p0;
        let dist = d.length();
        if dist < SHADOW_EPSILON {
            return false;
        }

        let ray = Ray::new(p0, d / dist);
        !self.is_intersected(&ray, dist - SHADOW_EPSILON)
    }

    pub fn lights(&self) -> &Arc<[Arc<Light>]> {
        &self.lights
    }

    pub fn infinite_lights(&self) -> &[Arc<Light>] {
        &self.infinite_lights
    }

    pub fn get_area_light(&self, index: usize) -> &Arc<Light> {
        &self.lights[index]
    }

    /// Missing material slots degrade to a pass-through boundary.
    pub fn get_material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn bounds(&self) -> &Bounds3f {
        &self.bounds
    }
}
