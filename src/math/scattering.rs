use crate::math::*;
use crate::math::sampling::sample_uniform_disk_polar;

#[inline]
pub fn reflect(wo: Vec3f, n: Normal3f) -> Vec3f {
    -wo + 2.0 * wo.dot(n) * n
}

/// Refracts `wi` about `n` for relative index of refraction `eta`; returns the
/// transmitted direction and the adjusted eta, or `None` on total internal
/// reflection.
pub fn refract(wi: Vec3f, n: Normal3f, eta: Float) -> Option<(Vec3f, Float)> {
    let mut cos_theta_i = n.dot(wi);
    let mut eta = eta;
    let mut n = n;

    if cos_theta_i < 0.0 {
        eta = 1.0 / eta;
        cos_theta_i = -cos_theta_i;
        n = -n;
    }

    let sin_2_theta_i = Float::max(0.0, 1.0 - sqr(cos_theta_i));
    let sin_2_theta_t = sin_2_theta_i / sqr(eta);
    if sin_2_theta_t >= 1.0 {
        return None;
    }

    let cos_theta_t = safe_sqrt(1.0 - sin_2_theta_t);
    let wt = -wi / eta + (cos_theta_i / eta - cos_theta_t) * n;
    Some((wt, eta))
}

pub fn fr_dielectric(cos_theta_i: Float, eta: Float) -> Float {
    let mut cos_theta_i = cos_theta_i.clamp(-1.0, 1.0);
    let mut eta = eta;

    if cos_theta_i < 0.0 {
        eta = 1.0 / eta;
        cos_theta_i = -cos_theta_i;
    }

    let sin_2_theta_i = 1.0 - sqr(cos_theta_i);
    let sin_2_theta_t = sin_2_theta_i / sqr(eta);
    if sin_2_theta_t >= 1.0 {
        return 1.0;
    }
    let cos_theta_t = safe_sqrt(1.0 - sin_2_theta_t);

    let r_parl = (eta * cos_theta_i - cos_theta_t) / (eta * cos_theta_i + cos_theta_t);
    let r_perp = (cos_theta_i - eta * cos_theta_t) / (cos_theta_i + eta * cos_theta_t);
    (sqr(r_parl) + sqr(r_perp)) / 2.0
}

#[derive(Debug, Clone, Default)]
pub struct TrowbridgeReitzDistribution {
    alpha_x: Float,
    alpha_y: Float,
}

impl TrowbridgeReitzDistribution {
    pub fn new(ax: Float, ay: Float) -> Self {
        let d = Self {
            alpha_x: ax,
            alpha_y: ay,
        };

        if !d.effectively_smooth() {
            let alpha_x = Float::max(d.alpha_x, 1e-4);
            let alpha_y = Float::max(d.alpha_y, 1e-4);
            Self { alpha_x, alpha_y }
        } else {
            d
        }
    }

    #[inline]
    pub fn effectively_smooth(&self) -> bool {
        self.alpha_x < 1e-3 && self.alpha_y < 1e-3
    }

    #[inline]
    pub fn d(&self, wm: Vec3f) -> Float {
        let tan2_theta = tan_2_theta(wm);
        if tan2_theta.is_infinite() {
            return 0.0;
        }

        let cos4_theta = sqr(cos_2_theta(wm));
        if cos4_theta < 1e-16 {
            return 0.0;
        }

        let e = tan2_theta * (sqr(cos_phi(wm) / self.alpha_x) + sqr(sin_phi(wm) / self.alpha_y));
        1.0 / (PI * self.alpha_x * self.alpha_y * cos4_theta * sqr(1.0 + e))
    }

    pub fn g1(&self, w: Vec3f) -> Float {
        1.0 / (1.0 + self.lambda(w))
    }

    pub fn lambda(&self, w: Vec3f) -> Float {
        let tan2_theta = tan_2_theta(w);
        if tan2_theta.is_infinite() {
            return 0.0;
        }

        let alpha2 = sqr(cos_phi(w) * self.alpha_x) + sqr(sin_phi(w) * self.alpha_y);
        (-1.0 + Float::sqrt(1.0 + alpha2 * tan2_theta)) / 2.0
    }

    pub fn g(&self, wo: Vec3f, wi: Vec3f) -> Float {
        1.0 / (1.0 + self.lambda(wo) + self.lambda(wi))
    }

    pub fn pdf(&self, w: Vec3f, wm: Vec3f) -> Float {
        self.g1(w) / abs_cos_theta(w) * self.d(wm) * w.dot(wm).abs()
    }

    pub fn sample_wm(&self, w: Vec3f, u: Point2f) -> Vec3f {
        let mut wh = Vec3f::new(self.alpha_x * w.x, self.alpha_y * w.y, w.z).normalize();
        if wh.z < 0.0 {
            wh = -wh;
        }

        let t1 = if wh.z < 0.99999 {
            Vec3f::new(0.0, 0.0, 1.0).cross(wh).normalize()
        } else {
            Vec3f::new(1.0, 0.0, 0.0)
        };

        let t2 = wh.cross(t1);

        let mut p = sample_uniform_disk_polar(u);

        let h = Float::sqrt(1.0 - sqr(p.x));
        p.y = lerp(h, p.y, (1.0 + wh.z) / 2.0);

        let pz = Float::sqrt(Float::max(0.0, 1.0 - p.length_squared()));
        let nh = p.x * t1 + p.y * t2 + pz * wh;
        Vec3f::new(
            self.alpha_x * nh.x,
            self.alpha_y * nh.y,
            Float::max(1e-6, nh.z),
        )
        .normalize()
    }

    pub fn roughness_to_alpha(roughness: Float) -> Float {
        Float::sqrt(roughness)
    }

    /// Widens near-specular lobes; trades a little bias for less variance on
    /// paths that already carry a non-specular bounce.
    pub fn regularize(&mut self) {
        if self.alpha_x < 0.3 {
            self.alpha_x = Float::clamp(2.0 * self.alpha_x, 0.1, 0.3);
        }

        if self.alpha_y < 0.3 {
            self.alpha_y = Float::clamp(2.0 * self.alpha_y, 0.1, 0.3);
        }
    }
}
