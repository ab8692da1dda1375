//! Ordinary least-squares line, the vertical-residual baseline that the
//! orthogonal fit is compared against.

use crate::dataset::Dataset;
use crate::error::{FitError, Result};
use crate::model::LineModel;

/// Fits `y = m x + b` by minimizing squared *vertical* residuals:
///
/// ```text
/// m = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
/// b = ȳ - m x̄
/// ```
///
/// # Errors
/// - [`FitError::EmptyDataset`] if `dataset` has no points
/// - [`FitError::ConstantX`] if every point has the same x
pub fn ordinary_least_squares<D>(dataset: &D) -> Result<LineModel>
where
    D: Dataset + ?Sized,
{
    let points = dataset.points();
    if points.is_empty() {
        return Err(FitError::EmptyDataset);
    }
    let n = points.len() as f64;
    let x_mean = points.iter().map(|p| p.x).sum::<f64>() / n;
    let y_mean = points.iter().map(|p| p.y).sum::<f64>() / n;

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dx = p.x - x_mean;
        (sxy + dx * (p.y - y_mean), sxx + dx * dx)
    });
    if sxx == 0.0 {
        return Err(FitError::ConstantX);
    }

    let slope = sxy / sxx;
    Ok(LineModel::new(slope, y_mean - slope * x_mean))
}
