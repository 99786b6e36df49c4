use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard};

use indicatif::ParallelProgressIterator;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use thread_local::ThreadLocal;
use tracing::error;

use crate::camera::Camera;
use crate::film::Film;
use crate::integrator::{AbstractRayIntegrator, RayIntegrator};
use crate::math::tile::Tile;
use crate::math::Point2i;
use crate::options::Options;
use crate::sampler::{AbstractSampler, Sampler};
use crate::scene::SceneSnapshot;
use crate::spectrum::RgbSpectrum;

fn evaluate_pixel_sample(
    scene: &SceneSnapshot,
    camera: &Camera,
    integrator: &RayIntegrator,
    p: Point2i,
    sample_index: i32,
    sampler: &mut Sampler,
) -> RgbSpectrum {
    sampler.start_pixel_sample(p, sample_index);

    let u = sampler.get_pixel_2d();
    let ray = camera.generate_ray(p, u);
    let l = integrator.li(scene, ray, sampler);

    if l.has_nan() || !l.is_finite() {
        error!(
            "radiance estimate at pixel ({}, {}) sample {} was not finite",
            p.x, p.y, sample_index
        );
        return RgbSpectrum::ZERO;
    }

    l
}

/// Renders `sample_range` estimates for every pixel in the tile, returning
/// per-pixel radiance sums to be merged under the film lock.
fn render_tile(
    scene: &SceneSnapshot,
    camera: &Camera,
    integrator: &RayIntegrator,
    tile: &Tile,
    sample_range: Range<i32>,
    sampler: &mut Sampler,
) -> Vec<(Point2i, RgbSpectrum)> {
    let mut splats = Vec::with_capacity(tile.bounds.area() as usize);

    for y in tile.bounds.min.y..tile.bounds.max.y {
        for x in tile.bounds.min.x..tile.bounds.max.x {
            let p = Point2i::new(x, y);
            let mut sum = RgbSpectrum::ZERO;
            for sample_index in sample_range.clone() {
                sum += evaluate_pixel_sample(scene, camera, integrator, p, sample_index, sampler);
            }
            splats.push((p, sum));
        }
    }

    splats
}

/// One-shot render of the sampler's full sample count into `film`.
pub fn render(
    scene: &SceneSnapshot,
    camera: &Camera,
    integrator: &RayIntegrator,
    sampler_prototype: &Sampler,
    film: &mut Film,
    options: &Options,
) {
    let tiles = Tile::tiles(film.pixel_bounds(), options.tile_size, options.tile_size);
    let spp = sampler_prototype.samples_per_pixel();

    let film_lock = Mutex::new(&mut *film);
    let samplers: ThreadLocal<RefCell<Sampler>> = ThreadLocal::new();

    tiles
        .par_iter()
        .progress_count(tiles.len() as u64)
        .for_each(|tile| {
            let sampler = samplers.get_or(|| RefCell::new(sampler_prototype.clone()));
            let splats = render_tile(
                scene,
                camera,
                integrator,
                tile,
                0..spp,
                &mut sampler.borrow_mut(),
            );

            let mut film = film_lock.lock().unwrap();
            for (p, l) in splats {
                film.add_sample(p, l);
            }
        });

    film.add_samples(spp);
}

/// Progressive renderer that accumulates one sample per pixel per pass.
/// `stop` is honored at tile granularity and discards the interrupted pass
/// wholesale, so the film always holds a whole number of samples per pixel
/// and can be read between (or during) passes. Passes are driven from one
/// thread; `stop` and `film` are safe from any.
pub struct RenderSession<'a> {
    scene: &'a SceneSnapshot,
    camera: &'a Camera,
    integrator: &'a RayIntegrator,
    sampler_prototype: Sampler,
    options: Options,
    tiles: Vec<Tile>,
    queue: Mutex<VecDeque<usize>>,
    stop_requested: AtomicBool,
    film: Mutex<Film>,
    samples_taken: AtomicI32,
}

impl<'a> RenderSession<'a> {
    pub fn new(
        scene: &'a SceneSnapshot,
        camera: &'a Camera,
        integrator: &'a RayIntegrator,
        sampler_prototype: Sampler,
        options: Options,
    ) -> RenderSession<'a> {
        let film = Film::new(camera.resolution());
        let tiles = Tile::tiles(film.pixel_bounds(), options.tile_size, options.tile_size);

        RenderSession {
            scene,
            camera,
            integrator,
            sampler_prototype,
            options,
            tiles,
            queue: Mutex::new(VecDeque::new()),
            stop_requested: AtomicBool::new(false),
            film: Mutex::new(film),
            samples_taken: AtomicI32::new(0),
        }
    }

    /// Renders one sample for every pixel. Returns true when the pass ran to
    /// completion, false when it was stopped part-way. A stopped pass leaves
    /// the film untouched; the next pass re-renders the same sample index.
    pub fn render_pass(&self) -> bool {
        self.stop_requested.store(false, Ordering::Relaxed);
        let sample_index = self.samples_taken.load(Ordering::Relaxed);

        {
            let mut queue = self.queue.lock().unwrap();
            queue.clear();
            queue.extend(0..self.tiles.len());
        }

        // Finished tiles land here rather than in the film, so an interrupted
        // pass never persists a partial sample.
        let pass_splats: Mutex<Vec<(Point2i, RgbSpectrum)>> = Mutex::new(Vec::new());

        std::thread::scope(|s| {
            for _ in 0..self.options.threads {
                s.spawn(|| {
                    let mut sampler = self.sampler_prototype.clone();
                    loop {
                        if self.stop_requested.load(Ordering::Relaxed) {
                            break;
                        }

                        let next = self.queue.lock().unwrap().pop_front();
                        let Some(tile_index) = next else {
                            break;
                        };

                        let splats = render_tile(
                            self.scene,
                            self.camera,
                            self.integrator,
                            &self.tiles[tile_index],
                            sample_index..sample_index + 1,
                            &mut sampler,
                        );

                        pass_splats.lock().unwrap().extend(splats);
                    }
                });
            }
        });

        let completed = self.queue.lock().unwrap().is_empty()
            && !self.stop_requested.load(Ordering::Relaxed);
        if completed {
            let mut film = self.film.lock().unwrap();
            for (p, l) in pass_splats.into_inner().unwrap() {
                film.add_sample(p, l);
            }
            film.add_samples(1);
            self.samples_taken.fetch_add(1, Ordering::Relaxed);
        }

        completed
    }

    /// Renders passes until the configured sample count is reached or `stop`
    /// is called from another thread.
    pub fn run(&self) {
        while self.samples_taken() < self.options.samples_per_pixel {
            if !self.render_pass() {
                break;
            }
        }
    }

    /// Requests the in-flight pass to wind down; safe from any thread.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::Relaxed);
    }

    /// Discards all accumulated radiance so the next pass starts from black.
    pub fn reset(&self) {
        self.stop_requested.store(false, Ordering::Relaxed);
        self.queue.lock().unwrap().clear();
        self.film.lock().unwrap().reset();
        self.samples_taken.store(0, Ordering::Relaxed);
    }

    pub fn samples_taken(&self) -> i32 {
        self.samples_taken.load(Ordering::Relaxed)
    }

    pub fn film(&self) -> MutexGuard<'_, Film> {
        self.film.lock().unwrap()
    }
}
