use crate::math::{Float, Point2i, Point3f};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds2i {
    pub min: Point2i,
    pub max: Point2i,
}

impl Bounds2i {
    pub fn new(min: Point2i, max: Point2i) -> Bounds2i {
        Bounds2i { min, max }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> i32 {
        self.width() * self.height()
    }

    pub fn contains(&self, p: Point2i) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3f {
    pub min: Point3f,
    pub max: Point3f,
}

impl Default for Bounds3f {
    fn default() -> Bounds3f {
        Bounds3f {
            min: Point3f::splat(Float::INFINITY),
            max: Point3f::splat(Float::NEG_INFINITY),
        }
    }
}

impl Bounds3f {
    pub fn new(min: Point3f, max: Point3f) -> Bounds3f {
        Bounds3f {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn union_point(&self, p: Point3f) -> Bounds3f {
        Bounds3f {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn union_box(&self, other: Bounds3f) -> Bounds3f {
        Bounds3f {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns (center, radius) of a sphere enclosing the bounds.
    pub fn bounding_sphere(&self) -> (Point3f, Float) {
        if self.is_empty() {
            return (Point3f::ZERO, 0.0);
        }

        let center = (self.min + self.max) * 0.5;
        (center, center.distance(self.max))
    }
}
