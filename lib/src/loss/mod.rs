//! Objective functions minimized by the fitter.
//!
//! The central one is [`PerpendicularL1Loss`]:
//!
//! ```text
//! cost(m, b) = Σ |y_i - (b + m x_i)| / sqrt(1 + m²)
//! ```
//!
//! i.e. the sum of exact perpendicular distances from each point to the line
//! `y = m x + b`. Because distances are measured orthogonally the fit does not
//! depend on which axis is treated as the dependent one, and because they are
//! summed in absolute value (L1) outliers pull on the line less than under a
//! squared loss. The price is non-smoothness wherever a residual crosses zero,
//! which is why the minimizer is derivative-free.

use crate::dataset::Dataset;
use crate::error::{FitError, Result};
use crate::geometry::Line;
use crate::model::LineParams;

/// A real-valued function of a parameter vector.
///
/// Implementors must be pure: repeated calls with the same parameters return
/// the same value and never mutate captured data.
pub trait Objective<P> {
    fn evaluate(&self, params: &P) -> f64;
}

/// Any `Fn(&P) -> f64` closure is an objective.
impl<P, F> Objective<P> for F
where
    F: Fn(&P) -> f64,
{
    fn evaluate(&self, params: &P) -> f64 {
        self(params)
    }
}

/// Sum of absolute perpendicular distances from a fixed point set to a line.
///
/// The dataset is borrowed for the lifetime of the objective; evaluation is
/// `O(n)` and allocation-free.
pub struct PerpendicularL1Loss<'a, D: ?Sized> {
    dataset: &'a D,
}

impl<'a, D: Dataset + ?Sized> PerpendicularL1Loss<'a, D> {
    /// Binds the objective to `dataset`.
    ///
    /// # Errors
    /// - [`FitError::EmptyDataset`] if `dataset` has no points; the cost of an
    ///   empty set would be identically zero and every line would be optimal.
    /// - [`FitError::NonFiniteInput`] if any coordinate is NaN or infinite.
    ///   Raw slices skip the checks [`InMemoryDataset`](crate::dataset::InMemoryDataset)
    ///   makes on construction, so they are repeated here.
    pub fn new(dataset: &'a D) -> Result<Self> {
        if dataset.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        if let Some(index) = dataset.points().iter().position(|p| !p.is_finite()) {
            return Err(FitError::NonFiniteInput { index });
        }
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &'a D {
        self.dataset
    }

    /// Total perpendicular L1 cost of the line described by `params`.
    pub fn cost(&self, params: &LineParams) -> f64 {
        let norm = (1.0 + params.slope * params.slope).sqrt();
        self.dataset
            .points()
            .iter()
            .map(|p| (p.y - (params.intercept + params.slope * p.x)).abs())
            .sum::<f64>()
            / norm
    }

    /// Average perpendicular distance, `cost / n`.
    pub fn mean(&self, params: &LineParams) -> f64 {
        self.cost(params) / self.dataset.len() as f64
    }

    /// Signed perpendicular residual of every point, in dataset order.
    pub fn residuals(&self, params: &LineParams) -> Vec<f64> {
        let line = Line::new(params.slope, params.intercept);
        self.dataset
            .points()
            .iter()
            .map(|p| line.signed_distance(p))
            .collect()
    }
}

impl<D: Dataset + ?Sized> Objective<LineParams> for PerpendicularL1Loss<'_, D> {
    fn evaluate(&self, params: &LineParams) -> f64 {
        self.cost(params)
    }
}
