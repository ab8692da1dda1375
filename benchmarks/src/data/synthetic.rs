use orthoreg::dataset::InMemoryDataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// A single value is placed at `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Noisy samples of `y = slope * x + intercept`.
///
/// x is `linspace(x_range.0, x_range.1, n)`; every y is offset by noise drawn
/// uniformly from `[-noise, noise)`. The same `seed` always yields the same
/// dataset.
///
/// # Errors
///
/// Returns [`orthoreg::FitError::EmptyDataset`] when `n == 0`.
///
/// # Example
///
/// ```
/// use benchmarks::data::synthetic_line;
/// use orthoreg::dataset::Dataset;
///
/// let ds = synthetic_line(0.6, 0.0, 50, (0.0, 100.0), 20.0, 42).unwrap();
/// assert_eq!(ds.len(), 50);
/// ```
pub fn synthetic_line(
    slope: f64,
    intercept: f64,
    n: usize,
    x_range: (f64, f64),
    noise: f64,
    seed: u64,
) -> orthoreg::Result<InMemoryDataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = linspace(x_range.0, x_range.1, n);
    let y = x
        .iter()
        .map(|&xi| {
            let offset = if noise > 0.0 {
                rng.gen_range(-noise..noise)
            } else {
                0.0
            };
            slope * xi + intercept + offset
        })
        .collect();
    InMemoryDataset::new(x, y)
}

/// The classic demonstration data: 50 points on `y = 0.6 x` over `[0, 100]`
/// with up to ±20 of vertical noise.
pub fn demo_dataset(seed: u64) -> orthoreg::Result<InMemoryDataset> {
    synthetic_line(0.6, 0.0, 50, (0.0, 100.0), 20.0, seed)
}
