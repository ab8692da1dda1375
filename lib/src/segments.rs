//! Perpendicular residual segments for plotting a fitted line.
//!
//! For every data point `P` the segment runs from `P` to the foot of the
//! perpendicular dropped from `P` onto the fitted line. Geometrically the foot
//! is where the line through `P` of slope `-1 / slope` meets the fit, so a
//! horizontal fit (`slope == 0`) has no representable perpendicular and is
//! rejected with [`FitError::DegenerateSlope`]. The foot itself is computed
//! in closed form ([`Line::foot_of`](crate::geometry::Line::foot_of)), which
//! stays finite for tiny and huge slopes alike.
//!
//! Exclusion policy: a point whose segment has either endpoint outside the
//! x-range is dropped entirely, not clipped. Near the ends of the data this
//! silently removes some residuals from the picture. A segment with a
//! non-finite endpoint is never inside the range and is dropped too.

use crate::dataset::Dataset;
use crate::error::{FitError, Result};
use crate::geometry::{Point, Segment};
use crate::model::LineModel;

/// Foot of the perpendicular from `point` onto `model`'s line.
///
/// # Errors
/// - [`FitError::DegenerateSlope`] if `model.slope() == 0.0`
/// - [`FitError::NonFiniteParameters`] if the model has a NaN or infinite parameter
pub fn foot_of_perpendicular(model: &LineModel, point: &Point) -> Result<Point> {
    check_model(model)?;
    Ok(model.line().foot_of(point))
}

/// Perpendicular segments for every point of `dataset`, using the dataset's
/// own `[min(x), max(x)]` as the admissible range.
///
/// # Errors
/// - [`FitError::DegenerateSlope`] if `model.slope() == 0.0`
/// - [`FitError::EmptyDataset`] if `dataset` has no points
pub fn perpendicular_segments<D>(model: &LineModel, dataset: &D) -> Result<Vec<Segment>>
where
    D: Dataset + ?Sized,
{
    check_model(model)?;
    let range = dataset.x_range().ok_or(FitError::EmptyDataset)?;
    perpendicular_segments_in_range(model, dataset.points(), range)
}

/// Perpendicular segments for `points` restricted to `x_range = (min, max)`.
///
/// A point is kept only if both its own x and the x of its foot lie within
/// `[min, max]`. The output preserves the relative order of the kept points.
///
/// # Example
/// ```rust
/// use orthoreg::geometry::Point;
/// use orthoreg::model::LineModel;
/// use orthoreg::segments::perpendicular_segments_in_range;
///
/// let model = LineModel::new(1.0, 0.0);
/// let points = [Point::new(1.0, 3.0), Point::new(0.0, 2.0)];
///
/// // (1, 3) projects to (2, 2), inside [0, 3]; (0, 2) projects to (1, 1) and
/// // is kept too.
/// let segments = perpendicular_segments_in_range(&model, &points, (0.0, 3.0)).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert!((segments[0].to.x - 2.0).abs() < 1e-12);
/// ```
pub fn perpendicular_segments_in_range(
    model: &LineModel,
    points: &[Point],
    x_range: (f64, f64),
) -> Result<Vec<Segment>> {
    check_model(model)?;
    let (min_x, max_x) = x_range;

    let mut segments = Vec::with_capacity(points.len());
    for point in points {
        let foot = foot_of_perpendicular(model, point)?;
        if !point.is_finite() || !foot.is_finite() {
            continue;
        }
        let segment = Segment::new(*point, foot);
        let (lower, upper) = segment.x_bounds();
        if lower < min_x || upper > max_x {
            continue;
        }
        segments.push(segment);
    }

    if segments.len() < points.len() {
        log::debug!(
            "dropped {} of {} perpendicular segments outside x-range [{}, {}]",
            points.len() - segments.len(),
            points.len(),
            min_x,
            max_x
        );
    }
    Ok(segments)
}

fn check_model(model: &LineModel) -> Result<()> {
    if !model.slope().is_finite() || !model.intercept().is_finite() {
        return Err(FitError::NonFiniteParameters {
            slope: model.slope(),
            intercept: model.intercept(),
        });
    }
    if model.slope() == 0.0 {
        return Err(FitError::DegenerateSlope);
    }
    Ok(())
}
