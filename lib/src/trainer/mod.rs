// trainer/mod.rs
use crate::{
    dataset::{Dataset, InMemoryDataset},
    error::{FitError, Result},
    loss::PerpendicularL1Loss,
    model::{LineModel, LineParams, ParamOps},
    optimizer::{Minimizer, NelderMead},
};

/// Outcome of a single fit. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult {
    /// The fitted line.
    pub model: LineModel,
    /// Perpendicular L1 cost at `model`.
    pub cost: f64,
    /// Perpendicular L1 cost at the initial guess.
    pub initial_cost: f64,
    pub iterations: usize,
    pub evaluations: usize,
    /// Whether the minimizer met its tolerances.
    pub converged: bool,
}

/// Fits a line to a point set by minimizing the sum of perpendicular distances.
///
/// Binds a [`PerpendicularL1Loss`] to the dataset for the duration of one call,
/// runs the minimizer from the configured initial guess and returns the
/// resulting [`LineModel`]. Once built via [`LineFitterBuilder`] the fitter is
/// immutable and can be reused across datasets.
#[derive(Debug, Clone)]
pub struct LineFitter<M = NelderMead> {
    pub(crate) minimizer: M,
    pub(crate) initial_guess: LineParams,
    pub(crate) strict: bool,
}

/// Fluent builder for constructing a [`LineFitter`].
///
/// Defaults:
/// - `minimizer`: `NelderMead::default()`
/// - `initial_guess`: slope 0, intercept 0
/// - `strict`: false
#[derive(Debug, Clone)]
pub struct LineFitterBuilder<M = NelderMead> {
    minimizer: M,
    initial_guess: LineParams,
    strict: bool,
}

impl LineFitterBuilder<NelderMead> {
    pub fn new() -> Self {
        Self {
            minimizer: NelderMead::default(),
            initial_guess: LineParams::default(),
            strict: false,
        }
    }
}

impl Default for LineFitterBuilder<NelderMead> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Minimizer<LineParams>> LineFitterBuilder<M> {
    /// Replaces the minimizer, e.g. with a differently tuned [`NelderMead`].
    pub fn minimizer<N: Minimizer<LineParams>>(self, minimizer: N) -> LineFitterBuilder<N> {
        LineFitterBuilder {
            minimizer,
            initial_guess: self.initial_guess,
            strict: self.strict,
        }
    }

    /// Starting point of the search.
    pub fn initial_guess(mut self, slope: f64, intercept: f64) -> Self {
        self.initial_guess = LineParams::new(slope, intercept);
        self
    }

    /// When `true`, an unconverged search fails with
    /// [`FitError::DidNotConverge`] instead of returning a result flagged
    /// `converged = false`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> LineFitter<M> {
        LineFitter {
            minimizer: self.minimizer,
            initial_guess: self.initial_guess,
            strict: self.strict,
        }
    }
}

impl LineFitter<NelderMead> {
    /// Convenience constructor that starts the builder pattern.
    pub fn builder() -> LineFitterBuilder<NelderMead> {
        LineFitterBuilder::new()
    }
}

impl Default for LineFitter<NelderMead> {
    fn default() -> Self {
        LineFitterBuilder::new().build()
    }
}

impl<M: Minimizer<LineParams>> LineFitter<M> {
    pub fn initial_guess(&self) -> LineParams {
        self.initial_guess
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Fits a line to `dataset`.
    ///
    /// # Errors
    /// - [`FitError::EmptyDataset`] if the dataset has no points
    /// - [`FitError::NonFiniteInput`] if a coordinate is NaN or infinite
    /// - [`FitError::DidNotConverge`] in strict mode when the minimizer runs
    ///   out of budget
    /// - [`FitError::NonFiniteParameters`] if the search diverged to NaN or
    ///   infinite parameters
    ///
    /// At least two distinct x values are needed for a meaningful fit, but
    /// this is not enforced.
    pub fn fit<D>(&self, dataset: &D) -> Result<FitResult>
    where
        D: Dataset + ?Sized,
    {
        let loss = PerpendicularL1Loss::new(dataset)?;
        let minimum = self.minimizer.minimize(&loss, self.initial_guess);

        let params = minimum.params;
        if !params.is_finite() {
            return Err(FitError::NonFiniteParameters {
                slope: params.slope,
                intercept: params.intercept,
            });
        }
        if !minimum.converged {
            if self.strict {
                return Err(FitError::DidNotConverge {
                    iterations: minimum.iterations,
                    evaluations: minimum.evaluations,
                });
            }
            log::warn!(
                "fit did not converge after {} iterations; returning best line found",
                minimum.iterations
            );
        }

        log::info!(
            "fitted slope = {}, intercept = {} (cost {:.6})",
            params.slope,
            params.intercept,
            minimum.value
        );

        Ok(FitResult {
            model: LineModel::from(params),
            cost: minimum.value,
            initial_cost: minimum.initial_value,
            iterations: minimum.iterations,
            evaluations: minimum.evaluations,
            converged: minimum.converged,
        })
    }
}

/// Fits `y = slope * x + intercept` to parallel coordinate slices with default
/// settings, returning `(slope, intercept)`.
///
/// # Errors
/// - [`FitError::LengthMismatch`] if `x.len() != y.len()`
/// - [`FitError::EmptyDataset`] if both are empty
/// - [`FitError::NonFiniteInput`] if any coordinate is NaN or infinite
///
/// # Example
/// ```rust
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [1.0, 3.0, 5.0, 7.0];
/// let (slope, intercept) = orthoreg::fit(&x, &y, 0.0, 0.0).unwrap();
/// assert!((slope - 2.0).abs() < 1e-3);
/// assert!((intercept - 1.0).abs() < 1e-3);
/// ```
pub fn fit(x: &[f64], y: &[f64], initial_slope: f64, initial_intercept: f64) -> Result<(f64, f64)> {
    let dataset = InMemoryDataset::from_slices(x, y)?;
    let result = LineFitter::builder()
        .initial_guess(initial_slope, initial_intercept)
        .build()
        .fit(&dataset)?;
    Ok((result.model.slope(), result.model.intercept()))
}
