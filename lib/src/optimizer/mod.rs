use crate::error::{FitError, Result};
use crate::loss::Objective;
use crate::model::ParamOps;

pub mod nelder_mead;
pub use nelder_mead::{NelderMead, NelderMeadBuilder};

/// Trait for derivative-free minimizers.
///
/// A minimizer only ever calls [`Objective::evaluate`]; it never asks for a
/// gradient, so it can be used on non-smooth objectives such as the L1
/// perpendicular loss. Any state that the objective needs (the dataset) is
/// captured by the objective itself, never passed through the minimizer.
///
/// # Type Parameters
/// * `P` — parameter vector type implementing [`ParamOps`]
///
/// # Example
/// ```rust
/// use orthoreg::optimizer::{Minimizer, NelderMead};
///
/// let bowl = |p: &[f64; 2]| (p[0] - 1.0).powi(2) + (p[1] + 2.0).powi(2);
/// let min = NelderMead::default().minimize(&bowl, [0.0, 0.0]);
///
/// assert!(min.converged);
/// assert!((min.params[0] - 1.0).abs() < 1e-4);
/// assert!((min.params[1] + 2.0).abs() < 1e-4);
/// ```
pub trait Minimizer<P: ParamOps> {
    /// Searches for a minimum of `objective` starting from `x0`.
    ///
    /// Always returns; running out of budget is reported through
    /// [`Minimum::converged`] rather than an error.
    fn minimize<F>(&self, objective: &F, x0: P) -> Minimum<P>
    where
        F: Objective<P> + ?Sized;
}

/// Outcome of a minimization.
///
/// `value <= initial_value` always holds: the starting point is part of the
/// search and the incumbent best never gets worse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimum<P> {
    /// Best parameters found.
    pub params: P,
    /// Objective value at `params`.
    pub value: f64,
    /// Objective value at the starting point.
    pub initial_value: f64,
    /// Iterations performed across all restarts.
    pub iterations: usize,
    /// Objective evaluations across all restarts.
    pub evaluations: usize,
    /// Number of restarts performed after the first convergence.
    pub restarts: usize,
    /// Whether the last run met its tolerances before exhausting its budget.
    pub converged: bool,
}

impl<P> Minimum<P> {
    /// Turns an unconverged minimum into [`FitError::DidNotConverge`].
    pub fn into_result(self) -> Result<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(FitError::DidNotConverge {
                iterations: self.iterations,
                evaluations: self.evaluations,
            })
        }
    }
}
