//! Straight-line model `y = slope * x + intercept`.
//!
//! - [`LineParams`] — the mutable-by-copy parameter vector the minimizer moves
//!   around (implements [`ParamOps`]).
//! - [`LineModel`] — the immutable fitted model handed back to callers
//!   (implements [`InferenceModel`]).
//!
//! A vertical line has no slope/intercept form, so it cannot be represented.

use crate::geometry::{Line, Point};
pub use crate::model::{InferenceModel, ParamOps};

/// Trainable parameters of a line: slope and intercept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
}

impl From<[f64; 2]> for LineParams {
    fn from([slope, intercept]: [f64; 2]) -> Self {
        Self { slope, intercept }
    }
}

impl From<LineParams> for [f64; 2] {
    fn from(params: LineParams) -> Self {
        [params.slope, params.intercept]
    }
}

impl ParamOps for LineParams {
    fn dim(&self) -> usize {
        2
    }

    fn get(&self, axis: usize) -> f64 {
        match axis {
            0 => self.slope,
            1 => self.intercept,
            _ => panic!("LineParams has 2 components, got axis {axis}"),
        }
    }

    fn with(&self, axis: usize, value: f64) -> Self {
        match axis {
            0 => Self {
                slope: value,
                ..*self
            },
            1 => Self {
                intercept: value,
                ..*self
            },
            _ => panic!("LineParams has 2 components, got axis {axis}"),
        }
    }

    fn add(&self, other: &Self) -> Self {
        Self {
            slope: self.slope + other.slope,
            intercept: self.intercept + other.intercept,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            slope: self.slope * factor,
            intercept: self.intercept * factor,
        }
    }
}

/// A fitted line. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineModel {
    slope: f64,
    intercept: f64,
}

impl LineModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn params(&self) -> LineParams {
        LineParams::new(self.slope, self.intercept)
    }

    /// Geometry view of the model.
    pub fn line(&self) -> Line {
        Line::new(self.slope, self.intercept)
    }

    /// Unsigned perpendicular distance from `point` to the line.
    pub fn perpendicular_distance(&self, point: &Point) -> f64 {
        self.line().signed_distance(point).abs()
    }
}

impl From<LineParams> for LineModel {
    fn from(params: LineParams) -> Self {
        Self::new(params.slope, params.intercept)
    }
}

/// `y = slope * x + intercept` for a single abscissa or a slice of them.
impl InferenceModel for LineModel {
    type InputSingle = f64;
    type OutputSingle = f64;
    type InputBatch = [f64];
    type OutputBatch = Vec<f64>;

    fn predict(&self, x: &f64) -> f64 {
        self.slope * x + self.intercept
    }

    fn predict_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|x| self.predict(x)).collect()
    }
}
