use crate::dataset::Dataset;
use crate::error::{FitError, Result};
use crate::geometry::Point;

/// An owned, validated point set.
///
/// Construction checks the preconditions of the fitter once so that every
/// component downstream can treat the data as read-only and well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    points: Vec<Point>,
}

impl InMemoryDataset {
    /// Builds a dataset from parallel coordinate vectors.
    ///
    /// # Errors
    /// - [`FitError::LengthMismatch`] if `x.len() != y.len()`
    /// - [`FitError::EmptyDataset`] if there are no points
    /// - [`FitError::NonFiniteInput`] if any coordinate is NaN or infinite
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Self::from_points(x.into_iter().zip(y).map(Point::from).collect())
    }

    /// Builds a dataset from points, preserving their order.
    ///
    /// # Errors
    /// - [`FitError::EmptyDataset`] if `points` is empty
    /// - [`FitError::NonFiniteInput`] if any coordinate is NaN or infinite
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(FitError::NonFiniteInput { index });
        }
        Ok(Self { points })
    }

    /// Builds a dataset from borrowed coordinate slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(x.to_vec(), y.to_vec())
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Dataset for InMemoryDataset {
    fn points(&self) -> &[Point] {
        &self.points
    }
}
