//! Benchmark utilities and tools for orthoreg.
//!
//! This library provides the common functionality shared by the benchmark
//! binaries and criterion benches, including:
//!
//! - Data generation and loading utilities
//! - Residual metrics (perpendicular and vertical)
//! - JSON reports for external plotters
//! - Timing utilities

pub mod data;
pub mod metrics;
pub mod report;
pub mod utils;

pub use data::{demo_dataset, load_points_csv, synthetic_line};
pub use metrics::ResidualMetrics;
pub use report::{FitReport, LineReport};
pub use utils::time_fn;
