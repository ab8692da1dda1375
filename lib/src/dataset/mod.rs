//! Dataset abstractions for line fitting.
//!
//! This module provides a [`Dataset`] trait for uniform, read-only access to an
//! ordered sequence of [`Point`]s and an in-memory implementation,
//! [`InMemoryDataset`].
//!
//! # Core Concepts
//!
//! - **Dataset** — An ordered source of `(x, y)` points. Order does not affect the
//!   fit, but it is preserved by the segment computer for visualization.
//! - **x-range** — The observed `[min(x), max(x)]` interval, used to decide which
//!   perpendicular segments are kept.
//!
//! # Example
//!
//! ```rust
//! use orthoreg::dataset::{Dataset, InMemoryDataset};
//!
//! let dataset = InMemoryDataset::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.x_range(), Some((0.0, 2.0)));
//! ```

use crate::geometry::Point;

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Abstract interface for a read-only set of 2D points.
///
/// Implementors only need to expose their points as a slice; everything else has
/// a default implementation.
///
/// # Example Implementation
///
/// ```rust
/// use orthoreg::dataset::Dataset;
/// use orthoreg::geometry::Point;
///
/// struct Diagonal(Vec<Point>);
///
/// impl Dataset for Diagonal {
///     fn points(&self) -> &[Point] {
///         &self.0
///     }
/// }
///
/// let ds = Diagonal((0..4).map(|i| Point::new(i as f64, i as f64)).collect());
/// assert_eq!(ds.x_range(), Some((0.0, 3.0)));
/// ```
pub trait Dataset {
    /// Returns the points in their original order.
    fn points(&self) -> &[Point];

    /// Number of points.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Checks whether the dataset has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `(min(x), max(x))`, or `None` for an empty dataset.
    fn x_range(&self) -> Option<(f64, f64)> {
        x_range(self.points())
    }
}

impl Dataset for [Point] {
    fn points(&self) -> &[Point] {
        self
    }
}

impl Dataset for Vec<Point> {
    fn points(&self) -> &[Point] {
        self
    }
}

/// Computes `(min(x), max(x))` over `points`.
pub(crate) fn x_range(points: &[Point]) -> Option<(f64, f64)> {
    let first = points.first()?;
    Some(
        points
            .iter()
            .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))),
    )
}
