use orthoreg::baseline::ordinary_least_squares;
use orthoreg::dataset::{Dataset, InMemoryDataset};
use orthoreg::loss::{Objective, PerpendicularL1Loss};
use orthoreg::model::LineParams;
use orthoreg::segments::{foot_of_perpendicular, perpendicular_segments};
use orthoreg::{fit, FitError, LineFitter, LineModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// x = linspace(0, 100, n)
fn linspace(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 100.0 / (n - 1) as f64).collect()
}

fn noisy_line(slope: f64, intercept: f64, amplitude: f64, seed: u64) -> InMemoryDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = linspace(50);
    let y = x
        .iter()
        .map(|v| slope * v + intercept + rng.gen_range(-amplitude..amplitude))
        .collect();
    InMemoryDataset::new(x, y).unwrap()
}

#[test]
fn noise_free_recovery() {
    for &(m, b) in &[(0.6, 0.0), (2.0, 1.0), (-1.3, 12.0), (0.05, -4.0)] {
        let x = linspace(30);
        let y: Vec<f64> = x.iter().map(|v| m * v + b).collect();
        let (slope, intercept) = fit(&x, &y, 0.0, 0.0).unwrap();
        assert!((slope - m).abs() < 1e-3, "m = {}: got slope {}", m, slope);
        assert!((intercept - b).abs() < 1e-3, "b = {}: got intercept {}", b, intercept);
    }
}

#[test]
fn orthogonal_and_ordinary_diverge_under_noise() {
    // a single noisy draw can land both fits close together; the gap is
    // systematic across draws
    let draws = 20u64;
    let mean_gap = (0..draws)
        .map(|seed| {
            let ds = noisy_line(0.6, 0.0, 20.0, seed);
            let ortho = LineFitter::default().fit(&ds).unwrap().model;
            let ols = ordinary_least_squares(&ds).unwrap();
            (ortho.slope() - ols.slope()).abs()
        })
        .sum::<f64>()
        / draws as f64;
    assert!(mean_gap > 2e-2, "mean slope gap {}", mean_gap);
}

#[test]
fn orthogonal_fit_resists_outlier_that_pulls_ordinary() {
    // 20 points on y = 2x + 1 and one far above the line at the right edge
    let mut x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    x.push(19.0);
    y.push(100.0);
    let ds = InMemoryDataset::new(x, y).unwrap();

    let ortho = LineFitter::default().fit(&ds).unwrap().model;
    let ols = ordinary_least_squares(&ds).unwrap();

    assert!((ortho.slope() - 2.0).abs() < 1e-3, "orthogonal slope {}", ortho.slope());
    assert!((ortho.intercept() - 1.0).abs() < 1e-3, "orthogonal intercept {}", ortho.intercept());
    assert!(
        (ortho.slope() - ols.slope()).abs() > 0.5,
        "orthogonal {} vs ordinary {}",
        ortho.slope(),
        ols.slope()
    );
}

#[test]
fn orthogonal_and_ordinary_coincide_near_zero_slope() {
    let x = linspace(50);
    let y: Vec<f64> = (0..50).map(|i| 3.0 + 0.05 * (1.7 * i as f64).sin()).collect();
    let ds = InMemoryDataset::new(x, y).unwrap();

    let ortho = LineFitter::default().fit(&ds).unwrap().model;
    let ols = ordinary_least_squares(&ds).unwrap();

    assert!(
        (ortho.slope() - ols.slope()).abs() < 1e-3,
        "orthogonal {} vs ordinary {}",
        ortho.slope(),
        ols.slope()
    );
    assert!(
        (ortho.intercept() - ols.intercept()).abs() < 0.05,
        "orthogonal {} vs ordinary {}",
        ortho.intercept(),
        ols.intercept()
    );
}

#[test]
fn cost_never_exceeds_initial_guess() {
    let guesses = [(0.0, 0.0), (1.0, -5.0), (-3.0, 40.0), (0.6, 0.0)];
    for seed in 0..3 {
        let ds = noisy_line(0.6, 2.0, 10.0, seed);
        let loss = PerpendicularL1Loss::new(&ds).unwrap();
        for &(m0, b0) in &guesses {
            let result = LineFitter::builder()
                .initial_guess(m0, b0)
                .build()
                .fit(&ds)
                .unwrap();
            let start = loss.evaluate(&LineParams::new(m0, b0));
            let end = loss.evaluate(&result.model.params());
            assert!(end <= start, "seed {} guess ({}, {}): {} > {}", seed, m0, b0, end, start);
        }
    }
}

#[test]
fn segment_count_matches_in_range_points() {
    for seed in 0..5 {
        let ds = noisy_line(0.6, 0.0, 20.0, seed);
        let model = LineFitter::default().fit(&ds).unwrap().model;
        let segments = perpendicular_segments(&model, &ds).unwrap();

        let (min_x, max_x) = ds.x_range().unwrap();
        let expected = ds
            .points()
            .iter()
            .filter(|p| {
                let foot = foot_of_perpendicular(&model, p).unwrap();
                (min_x..=max_x).contains(&p.x) && (min_x..=max_x).contains(&foot.x)
            })
            .count();

        assert!(segments.len() <= ds.len());
        assert_eq!(segments.len(), expected, "seed {}", seed);
    }
}

#[test]
fn segments_are_perpendicular_to_fit() {
    let ds = noisy_line(-0.8, 50.0, 5.0, 7);
    let model = LineFitter::default().fit(&ds).unwrap().model;
    for s in perpendicular_segments(&model, &ds).unwrap() {
        let dx = s.to.x - s.from.x;
        let dy = s.to.y - s.from.y;
        // direction of the fitted line is (1, slope); the dot product vanishes
        assert!((dx + dy * model.slope()).abs() < 1e-9);
        assert!((s.length() - model.perpendicular_distance(&s.from)).abs() < 1e-9);
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(fit(&[], &[], 0.0, 0.0), Err(FitError::EmptyDataset));
}

#[test]
fn zero_slope_segments_are_rejected() {
    let ds = noisy_line(0.0, 1.0, 1.0, 3);
    let err = perpendicular_segments(&LineModel::new(0.0, 1.0), &ds).unwrap_err();
    assert_eq!(err, FitError::DegenerateSlope);
}

#[test]
fn fitting_is_deterministic() {
    let ds = noisy_line(0.6, 0.0, 20.0, 11);
    let a = LineFitter::default().fit(&ds).unwrap();
    let b = LineFitter::default().fit(&ds).unwrap();
    assert_eq!(a, b);

    let x: Vec<f64> = ds.points().iter().map(|p| p.x).collect();
    let y: Vec<f64> = ds.points().iter().map(|p| p.y).collect();
    assert_eq!(fit(&x, &y, 0.5, 1.0), fit(&x, &y, 0.5, 1.0));
}
