//! Point sets for benchmarks and tools.

mod points_csv;
mod synthetic;

pub use points_csv::load_points_csv;
pub use synthetic::{demo_dataset, linspace, synthetic_line};
