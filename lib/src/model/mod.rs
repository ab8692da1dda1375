//! Line models and the parameter-vector algebra the minimizer relies on.

pub mod linear;
pub use linear::{LineModel, LineParams};

/// Vector-space operations on a fixed-dimension parameter vector.
///
/// The minimizer only sees parameters through this trait, which lets it work
/// with [`LineParams`] as well as plain `[f64; N]` arrays.
pub trait ParamOps: Clone {
    /// Number of components.
    fn dim(&self) -> usize;

    /// Component `axis`. Panics if `axis >= self.dim()`.
    fn get(&self, axis: usize) -> f64;

    /// Copy of `self` with component `axis` replaced by `value`.
    fn with(&self, axis: usize, value: f64) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn scale(&self, factor: f64) -> Self;

    fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    /// Largest absolute component-wise difference (infinity norm of `self - other`).
    fn max_abs_diff(&self, other: &Self) -> f64 {
        (0..self.dim())
            .map(|i| (self.get(i) - other.get(i)).abs())
            .fold(0.0, f64::max)
    }

    fn is_finite(&self) -> bool {
        (0..self.dim()).all(|i| self.get(i).is_finite())
    }
}

impl<const N: usize> ParamOps for [f64; N] {
    fn dim(&self) -> usize {
        N
    }

    fn get(&self, axis: usize) -> f64 {
        self[axis]
    }

    fn with(&self, axis: usize, value: f64) -> Self {
        let mut out = *self;
        out[axis] = value;
        out
    }

    fn add(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn scale(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

/// Prediction interface of a fitted model.
pub trait InferenceModel {
    type InputSingle;
    type OutputSingle;
    type InputBatch: ?Sized;
    type OutputBatch;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
