/// Scheduling knobs shared by the one-shot renderer and progressive
/// sessions.
#[derive(Debug, Clone)]
pub struct Options {
    pub samples_per_pixel: i32,
    pub tile_size: i32,
    pub threads: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            samples_per_pixel: 16,
            tile_size: 16,
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}
