use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::math::{Float, Point2f, Point2i};

/// Per-thread sample stream. `start_pixel_sample` fully determines every
/// value the stream produces afterwards, so identical (seed, pixel, index)
/// triples replay identical sequences regardless of scheduling order.
pub trait AbstractSampler {
    fn samples_per_pixel(&self) -> i32;

    fn start_pixel_sample(&mut self, p: Point2i, sample_index: i32);

    fn get_1d(&mut self) -> Float;

    fn get_2d(&mut self) -> Point2f;

    fn get_pixel_2d(&mut self) -> Point2f;
}

#[derive(Debug, Clone)]
pub enum Sampler {
    Independent(IndependentSampler),
    Stratified(StratifiedSampler),
}

impl AbstractSampler for Sampler {
    fn samples_per_pixel(&self) -> i32 {
        match self {
            Sampler::Independent(s) => s.samples_per_pixel(),
            Sampler::Stratified(s) => s.samples_per_pixel(),
        }
    }

    fn start_pixel_sample(&mut self, p: Point2i, sample_index: i32) {
        match self {
            Sampler::Independent(s) => s.start_pixel_sample(p, sample_index),
            Sampler::Stratified(s) => s.start_pixel_sample(p, sample_index),
        }
    }

    fn get_1d(&mut self) -> Float {
        match self {
            Sampler::Independent(s) => s.get_1d(),
            Sampler::Stratified(s) => s.get_1d(),
        }
    }

    fn get_2d(&mut self) -> Point2f {
        match self {
            Sampler::Independent(s) => s.get_2d(),
            Sampler::Stratified(s) => s.get_2d(),
        }
    }

    fn get_pixel_2d(&mut self) -> Point2f {
        match self {
            Sampler::Independent(s) => s.get_pixel_2d(),
            Sampler::Stratified(s) => s.get_pixel_2d(),
        }
    }
}

/// Finalizer from the 64-bit mix used by splitmix-style generators.
#[inline]
fn mix_bits(mut v: u64) -> u64 {
    v ^= v >> 31;
    v = v.wrapping_mul(0x7fb5d329728ea185);
    v ^= v >> 27;
    v = v.wrapping_mul(0x81dadef4bc2dd44d);
    v ^= v >> 33;
    v
}

fn pixel_sample_seed(seed: u64, p: Point2i, sample_index: i32) -> u64 {
    let packed = ((p.x as u64) << 32) | (p.y as u64 & 0xffff_ffff);
    mix_bits(seed ^ mix_bits(packed ^ mix_bits(sample_index as u64)))
}

#[derive(Debug, Clone)]
pub struct IndependentSampler {
    samples_per_pixel: i32,
    seed: u64,
    rng: SmallRng,
}

impl IndependentSampler {
    pub fn new(samples_per_pixel: i32, seed: u64) -> IndependentSampler {
        IndependentSampler {
            samples_per_pixel,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl AbstractSampler for IndependentSampler {
    fn samples_per_pixel(&self) -> i32 {
        self.samples_per_pixel
    }

    fn start_pixel_sample(&mut self, p: Point2i, sample_index: i32) {
        self.rng = SmallRng::seed_from_u64(pixel_sample_seed(self.seed, p, sample_index));
    }

    fn get_1d(&mut self) -> Float {
        self.rng.gen()
    }

    fn get_2d(&mut self) -> Point2f {
        Point2f::new(self.rng.gen(), self.rng.gen())
    }

    fn get_pixel_2d(&mut self) -> Point2f {
        self.get_2d()
    }
}

/// Jittered stratified sampler; strata are visited in an order permuted
/// per dimension so adjacent dimensions decorrelate.
#[derive(Debug, Clone)]
pub struct StratifiedSampler {
    x_samples: i32,
    y_samples: i32,
    jitter: bool,
    seed: u64,
    rng: SmallRng,
    pixel: Point2i,
    sample_index: i32,
    dimension: i32,
}

impl StratifiedSampler {
    pub fn new(x_samples: i32, y_samples: i32, jitter: bool, seed: u64) -> StratifiedSampler {
        StratifiedSampler {
            x_samples,
            y_samples,
            jitter,
            seed,
            rng: SmallRng::seed_from_u64(seed),
            pixel: Point2i::ZERO,
            sample_index: 0,
            dimension: 0,
        }
    }

    fn dimension_hash(&self) -> u64 {
        let packed = ((self.pixel.x as u64) << 32) | (self.pixel.y as u64 & 0xffff_ffff);
        mix_bits(packed ^ mix_bits(self.dimension as u64) ^ self.seed)
    }
}

impl AbstractSampler for StratifiedSampler {
    fn samples_per_pixel(&self) -> i32 {
        self.x_samples * self.y_samples
    }

    fn start_pixel_sample(&mut self, p: Point2i, sample_index: i32) {
        self.pixel = p;
        self.sample_index = sample_index;
        self.dimension = 0;
        self.rng = SmallRng::seed_from_u64(pixel_sample_seed(self.seed, p, sample_index));
    }

    fn get_1d(&mut self) -> Float {
        let hash = self.dimension_hash();
        self.dimension += 1;

        let stratum = permutation_element(
            self.sample_index as u32,
            self.samples_per_pixel() as u32,
            hash as u32,
        );
        let delta: Float = if self.jitter { self.rng.gen() } else { 0.5 };
        (stratum as Float + delta) / self.samples_per_pixel() as Float
    }

    fn get_2d(&mut self) -> Point2f {
        let hash = self.dimension_hash();
        self.dimension += 2;

        let stratum = permutation_element(
            self.sample_index as u32,
            self.samples_per_pixel() as u32,
            hash as u32,
        ) as i32;
        let x = stratum % self.x_samples;
        let y = stratum / self.x_samples;
        let (dx, dy): (Float, Float) = if self.jitter {
            (self.rng.gen(), self.rng.gen())
        } else {
            (0.5, 0.5)
        };

        Point2f::new(
            (x as Float + dx) / self.x_samples as Float,
            (y as Float + dy) / self.y_samples as Float,
        )
    }

    fn get_pixel_2d(&mut self) -> Point2f {
        self.get_2d()
    }
}

/// In-place random permutation lookup (cycle-walking hash).
fn permutation_element(mut i: u32, l: u32, p: u32) -> u32 {
    let mut w = l - 1;
    w |= w >> 1;
    w |= w >> 2;
    w |= w >> 4;
    w |= w >> 8;
    w |= w >> 16;

    loop {
        i ^= p;
        i = i.wrapping_mul(0xe170893d);
        i ^= p >> 16;
        i ^= (i & w) >> 4;
        i ^= p >> 8;
        i = i.wrapping_mul(0x0929eb3f);
        i ^= p >> 23;
        i ^= (i & w) >> 1;
        i = i.wrapping_mul(1 | (p >> 27));
        i = i.wrapping_mul(0x6935fa69);
        i ^= (i & w) >> 11;
        i = i.wrapping_mul(0x74dcb303);
        i ^= (i & w) >> 2;
        i = i.wrapping_mul(0x9e501cc3);
        i ^= (i & w) >> 2;
        i = i.wrapping_mul(0xc860a3df);
        i &= w;
        if i < l {
            break;
        }
    }

    (i.wrapping_add(p)) % l
}
