//! # orthoreg
//!
//! Orthogonal line fitting in Rust: finds the line `y = slope * x + intercept`
//! that minimizes the sum of *perpendicular* distances from a set of 2D points,
//! rather than the vertical residuals of ordinary least squares.
//!
//! ## Core Design Principles
//!
//! - **Perpendicular L1 objective**: distances are measured orthogonally to the
//!   candidate line and summed in absolute value, which makes the fit independent
//!   of which axis is "dependent" and less sensitive to outliers.
//! - **Derivative-free search**: the objective has kinks wherever a residual
//!   crosses zero, so it is minimized with a Nelder–Mead simplex search that
//!   only ever compares objective values.
//! - **Explicit context**: the objective borrows the dataset at construction;
//!   there is no global state between the fitter, the objective and the minimizer.
//! - **Explicit failures**: empty input, degenerate slopes and exhausted search
//!   budgets surface as [`FitError`] variants instead of arithmetic faults.
//!
//! ## Quick Start
//!
//! ```rust
//! use orthoreg::dataset::InMemoryDataset;
//! use orthoreg::segments::perpendicular_segments;
//! use orthoreg::trainer::LineFitter;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.1, 0.5, 1.3, 1.7, 2.5];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let result = LineFitter::builder()
//!     .initial_guess(0.0, 0.0)
//!     .build()
//!     .fit(&dataset)
//!     .unwrap();
//! assert!(result.cost <= result.initial_cost);
//!
//! // Residual segments for an external plotter
//! let segments = perpendicular_segments(&result.model, &dataset).unwrap();
//! assert!(segments.len() <= 5);
//! ```
//!
//! ## Module Structure
//!
//! - `geometry` — points, slope/intercept lines, segments
//! - `dataset` — read-only point sets
//! - `model` — the fitted [`LineModel`] and parameter-vector algebra
//! - `loss` — the perpendicular L1 objective
//! - `optimizer` — derivative-free minimizers (Nelder–Mead)
//! - `trainer` — the line fitter and the [`fit`] entry point
//! - `segments` — perpendicular residual segments for visualization
//! - `baseline` — ordinary least squares for comparison
//! - `serialization` — model files for fitted lines (`serde` feature)

/// Planar points, lines and segments.
pub mod geometry;

/// Point set abstractions.
pub mod dataset;

/// Error taxonomy shared by every module.
pub mod error;

/// Objective functions for line fitting.
pub mod loss;

/// Line models and parameter vectors.
pub mod model;

/// Derivative-free minimization.
pub mod optimizer;

/// Line fitting orchestration.
pub mod trainer;

/// Perpendicular residual segments for plotting.
pub mod segments;

/// Vertical-residual regression baseline.
pub mod baseline;

/// Model persistence.
#[cfg(feature = "serde")]
pub mod serialization;

pub use error::{FitError, Result};
pub use geometry::{Line, Point, Segment};
pub use model::{InferenceModel, LineModel, LineParams};
pub use trainer::{fit, FitResult, LineFitter};
