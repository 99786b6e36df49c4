use crate::math::{coordinate_system, Vec3f};

/// Orthonormal basis used to move directions between render space and the
/// local shading space (z along the shading normal).
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub x: Vec3f,
    pub y: Vec3f,
    pub z: Vec3f,
}

impl Frame {
    #[inline]
    pub fn new(x: Vec3f, y: Vec3f, z: Vec3f) -> Frame {
        debug_assert!(x.is_normalized());
        debug_assert!(y.is_normalized());
        debug_assert!(z.is_normalized());

        Frame { x, y, z }
    }

    #[inline]
    pub fn from_z(z: Vec3f) -> Frame {
        debug_assert!(z.is_normalized());

        let (x, y) = coordinate_system(z);
        Frame::new(x, y, z)
    }

    #[inline]
    pub fn localize(&self, v: Vec3f) -> Vec3f {
        Vec3f::new(v.dot(self.x), v.dot(self.y), v.dot(self.z))
    }

    #[inline]
    pub fn globalize(&self, v: Vec3f) -> Vec3f {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}
