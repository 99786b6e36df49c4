use auto_ops::{impl_op_ex, impl_op_ex_commutative};

use crate::math::Float;

/// 3-channel radiance/throughput value. An all-zero spectrum is "falsy" and
/// short-circuits further estimator work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbSpectrum {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

impl RgbSpectrum {
    pub const ZERO: RgbSpectrum = RgbSpectrum {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const ONE: RgbSpectrum = RgbSpectrum {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: Float, g: Float, b: Float) -> RgbSpectrum {
        RgbSpectrum { r, g, b }
    }

    pub fn splat(v: Float) -> RgbSpectrum {
        RgbSpectrum { r: v, g: v, b: v }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    #[inline]
    pub fn average(&self) -> Float {
        (self.r + self.g + self.b) / 3.0
    }

    #[inline]
    pub fn max_component(&self) -> Float {
        Float::max(self.r, Float::max(self.g, self.b))
    }

    #[inline]
    pub fn has_nan(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl_op_ex!(+|a: &RgbSpectrum, b: &RgbSpectrum| -> RgbSpectrum {
    RgbSpectrum::new(a.r + b.r, a.g + b.g, a.b + b.b)
});

impl_op_ex!(-|a: &RgbSpectrum, b: &RgbSpectrum| -> RgbSpectrum {
    RgbSpectrum::new(a.r - b.r, a.g - b.g, a.b - b.b)
});

impl_op_ex!(*|a: &RgbSpectrum, b: &RgbSpectrum| -> RgbSpectrum {
    RgbSpectrum::new(a.r * b.r, a.g * b.g, a.b * b.b)
});

impl_op_ex!(/|a: &RgbSpectrum, b: &RgbSpectrum| -> RgbSpectrum {
    RgbSpectrum::new(a.r / b.r, a.g / b.g, a.b / b.b)
});

impl_op_ex_commutative!(*|a: &RgbSpectrum, s: &Float| -> RgbSpectrum {
    RgbSpectrum::new(a.r * s, a.g * s, a.b * s)
});

impl_op_ex!(/|a: &RgbSpectrum, s: &Float| -> RgbSpectrum {
    RgbSpectrum::new(a.r / s, a.g / s, a.b / s)
});

impl_op_ex!(+=|a: &mut RgbSpectrum, b: &RgbSpectrum| {
    a.r += b.r;
    a.g += b.g;
    a.b += b.b;
});

impl_op_ex!(*=|a: &mut RgbSpectrum, b: &RgbSpectrum| {
    a.r *= b.r;
    a.g *= b.g;
    a.b *= b.b;
});

impl_op_ex!(*=|a: &mut RgbSpectrum, s: &Float| {
    a.r *= s;
    a.g *= s;
    a.b *= s;
});

impl_op_ex!(/=|a: &mut RgbSpectrum, s: &Float| {
    a.r /= s;
    a.g /= s;
    a.b /= s;
});
