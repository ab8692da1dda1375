use orthoreg::dataset::Dataset;
use orthoreg::LineModel;
use serde::Serialize;

/// Residual metrics of a fitted line against a point set.
///
/// Perpendicular and vertical residuals are both reported so that an
/// orthogonal fit and an ordinary least-squares fit can be judged on each
/// other's terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualMetrics {
    /// mean(|perpendicular distance|)
    pub mean_perpendicular: f64,
    /// mean(|y - ŷ|)
    pub mean_abs_vertical: f64,
    /// sqrt(mean((y - ŷ)^2))
    pub rmse_vertical: f64,
}

impl ResidualMetrics {
    /// Calculate all metrics at once.
    ///
    /// An empty dataset yields all zeros.
    pub fn compute<D: Dataset + ?Sized>(model: &LineModel, dataset: &D) -> Self {
        let points = dataset.points();
        if points.is_empty() {
            return Self {
                mean_perpendicular: 0.0,
                mean_abs_vertical: 0.0,
                rmse_vertical: 0.0,
            };
        }

        let line = model.line();
        let n = points.len() as f64;
        let (perp, abs, sq) = points.iter().fold((0.0, 0.0, 0.0), |(perp, abs, sq), p| {
            let r = line.vertical_residual(p);
            (perp + model.perpendicular_distance(p), abs + r.abs(), sq + r * r)
        });

        Self {
            mean_perpendicular: perp / n,
            mean_abs_vertical: abs / n,
            rmse_vertical: (sq / n).sqrt(),
        }
    }
}
