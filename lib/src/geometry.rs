//! Planar geometry primitives used by the fitter and the segment computer.
//!
//! Lines are kept in slope/intercept form (`y = slope * x + intercept`), which
//! is the parameterisation the minimizer works in. A vertical line cannot be
//! represented, so constructing the perpendicular of a horizontal line fails
//! with [`FitError::DegenerateSlope`].

use crate::error::{FitError, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Builds the line through `point` perpendicular to `self`.
    ///
    /// The perpendicular slope is `-1 / slope`, so a horizontal line has no
    /// representable perpendicular.
    ///
    /// # Errors
    /// [`FitError::DegenerateSlope`] when `self.slope == 0.0`.
    pub fn perpendicular_through(&self, point: &Point) -> Result<Line> {
        if self.slope == 0.0 {
            return Err(FitError::DegenerateSlope);
        }
        let slope = -1.0 / self.slope;
        let intercept = point.y + point.x / self.slope;
        Ok(Line { slope, intercept })
    }

    /// Intersection with `other`, or `None` when the lines are parallel.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let denom = self.slope - other.slope;
        if denom == 0.0 {
            return None;
        }
        let x = (other.intercept - self.intercept) / denom;
        Some(Point::new(x, self.y_at(x)))
    }

    /// Orthogonal projection of `point` onto the line.
    ///
    /// Closed form `x = (px + m (py - b)) / (1 + m²)`. For `|m| > 1` the
    /// numerator and denominator are divided by `m²` first, so neither a
    /// subnormal nor a huge slope overflows. Unlike
    /// [`perpendicular_through`](Self::perpendicular_through) this is defined
    /// for every finite slope, including zero.
    pub fn foot_of(&self, point: &Point) -> Point {
        let m = self.slope;
        let dy = point.y - self.intercept;
        let x = if m.abs() <= 1.0 {
            (point.x + m * dy) / (1.0 + m * m)
        } else {
            let t = 1.0 / m;
            (point.x * t * t + dy * t) / (t * t + 1.0)
        };
        Point::new(x, self.y_at(x))
    }

    /// Signed vertical residual `point.y - (slope * point.x + intercept)`.
    pub fn vertical_residual(&self, point: &Point) -> f64 {
        point.y - self.y_at(point.x)
    }

    /// Signed perpendicular distance from `point` to the line.
    ///
    /// Positive above the line, negative below.
    pub fn signed_distance(&self, point: &Point) -> f64 {
        self.vertical_residual(point) / (1.0 + self.slope * self.slope).sqrt()
    }
}

/// A bounded piece of a line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }

    /// Smallest and largest x coordinate of the two endpoints.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.from.x.min(self.to.x), self.from.x.max(self.to.x))
    }

    /// Returns `n` evenly spaced points from `from` to `to`, both included.
    ///
    /// `n == 0` yields an empty vector and `n == 1` yields only `from`.
    pub fn sample(&self, n: usize) -> Vec<Point> {
        match n {
            0 => Vec::new(),
            1 => vec![self.from],
            _ => {
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let t = i as f64 / last;
                        Point::new(
                            self.from.x + t * (self.to.x - self.from.x),
                            self.from.y + t * (self.to.y - self.from.y),
                        )
                    })
                    .collect()
            }
        }
    }
}
