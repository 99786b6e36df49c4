use std::path::Path;

use thiserror::Error;

use crate::math::{Bounds2i, Float, Point2i};
use crate::spectrum::RgbSpectrum;

#[derive(Debug, Error)]
pub enum FilmError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Accumulates radiance samples per pixel. Splats sum until `add_samples`
/// records how many estimates each pixel received; reads normalize on the fly
/// so the film can keep accumulating between passes.
pub struct Film {
    resolution: Point2i,
    pixels: Vec<RgbSpectrum>,
    samples: i32,
}

impl Film {
    pub fn new(resolution: Point2i) -> Film {
        Film {
            resolution,
            pixels: vec![RgbSpectrum::ZERO; (resolution.x * resolution.y) as usize],
            samples: 0,
        }
    }

    pub fn resolution(&self) -> Point2i {
        self.resolution
    }

    pub fn pixel_bounds(&self) -> Bounds2i {
        Bounds2i::new(Point2i::ZERO, self.resolution)
    }

    pub fn samples(&self) -> i32 {
        self.samples
    }

    fn index(&self, p: Point2i) -> usize {
        (p.y * self.resolution.x + p.x) as usize
    }

    pub fn add_sample(&mut self, p: Point2i, l: RgbSpectrum) {
        let index = self.index(p);
        self.pixels[index] += l;
    }

    pub fn add_samples(&mut self, n: i32) {
        self.samples += n;
    }

    pub fn reset(&mut self) {
        self.pixels.fill(RgbSpectrum::ZERO);
        self.samples = 0;
    }

    pub fn get_pixel(&self, p: Point2i) -> RgbSpectrum {
        if self.samples == 0 {
            return RgbSpectrum::ZERO;
        }

        self.pixels[self.index(p)] / self.samples as Float
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), FilmError> {
        let mut img = image::RgbImage::new(self.resolution.x as u32, self.resolution.y as u32);

        for y in 0..self.resolution.y {
            for x in 0..self.resolution.x {
                let l = self.get_pixel(Point2i::new(x, y));
                img.put_pixel(
                    x as u32,
                    y as u32,
                    image::Rgb([to_srgb8(l.r), to_srgb8(l.g), to_srgb8(l.b)]),
                );
            }
        }

        img.save(path)?;
        Ok(())
    }
}

fn to_srgb8(v: Float) -> u8 {
    let v = Float::powf(v.clamp(0.0, 1.0), 1.0 / 2.2);
    (v * 255.0 + 0.5) as u8
}
