//! Error types for fitting and segment computation.

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Zero points were supplied where at least one is required.
    #[error("Empty data: at least one point is required")]
    EmptyDataset,

    /// The `x` and `y` coordinate sequences have different lengths.
    #[error("Length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate at index {index}")]
    NonFiniteInput { index: usize },

    /// A reciprocal of an exactly zero slope was required.
    #[error("Degenerate slope: the perpendicular of a horizontal line is vertical")]
    DegenerateSlope,

    /// The minimizer exhausted its budget before meeting its tolerances.
    #[error("Minimizer did not converge after {iterations} iterations ({evaluations} evaluations)")]
    DidNotConverge { iterations: usize, evaluations: usize },

    /// The minimizer produced parameters that are NaN or infinite.
    #[error("Non-finite parameters: slope = {slope}, intercept = {intercept}")]
    NonFiniteParameters { slope: f64, intercept: f64 },

    /// All x values are equal, so a vertical-residual regression is undefined.
    #[error("Constant x: ordinary regression needs at least two distinct x values")]
    ConstantX,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FitError::LengthMismatch { x_len: 3, y_len: 2 }.to_string(),
            "Length mismatch: x has 3 values, y has 2"
        );
        assert_eq!(
            FitError::DidNotConverge {
                iterations: 10,
                evaluations: 25
            }
            .to_string(),
            "Minimizer did not converge after 10 iterations (25 evaluations)"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&FitError::EmptyDataset);
    }
}
