use ember::math::{Float, Point2i};
use ember::sampler::{AbstractSampler, IndependentSampler, Sampler, StratifiedSampler};

#[test]
fn stratified_1d_covers_all_strata() {
    let spp = 16;
    let mut sampler = StratifiedSampler::new(4, 4, false, 0);

    let mut values: Vec<Float> = (0..spp)
        .map(|i| {
            sampler.start_pixel_sample(Point2i::new(2, 3), i);
            sampler.get_1d()
        })
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    // Without jitter every stratum midpoint appears exactly once.
    for (k, v) in values.iter().enumerate() {
        let expected = (k as Float + 0.5) / spp as Float;
        assert!((v - expected).abs() < 1e-6, "stratum {k} was {v}");
    }
}

#[test]
fn stratified_2d_covers_all_cells() {
    let mut sampler = StratifiedSampler::new(4, 4, true, 1);

    let mut seen = [[false; 4]; 4];
    for i in 0..16 {
        sampler.start_pixel_sample(Point2i::new(1, 1), i);
        let u = sampler.get_2d();
        let x = ((u.x * 4.0) as usize).min(3);
        let y = ((u.y * 4.0) as usize).min(3);
        seen[y][x] = true;
    }

    assert!(seen.iter().flatten().all(|&s| s));
}

#[test]
fn independent_streams_replay_deterministically() {
    let mut a = Sampler::Independent(IndependentSampler::new(4, 3));
    let mut b = a.clone();

    for i in 0..4 {
        a.start_pixel_sample(Point2i::new(9, 9), i);
        b.start_pixel_sample(Point2i::new(9, 9), i);
        for _ in 0..8 {
            assert_eq!(a.get_1d(), b.get_1d());
            assert_eq!(a.get_2d(), b.get_2d());
        }
    }
}

#[test]
fn pixels_and_sample_indices_get_distinct_streams() {
    let mut sampler = IndependentSampler::new(2, 0);

    sampler.start_pixel_sample(Point2i::new(0, 0), 0);
    let a = sampler.get_1d();
    sampler.start_pixel_sample(Point2i::new(1, 0), 0);
    let b = sampler.get_1d();
    sampler.start_pixel_sample(Point2i::new(0, 0), 1);
    let c = sampler.get_1d();

    assert_ne!(a, b);
    assert_ne!(a, c);
}
