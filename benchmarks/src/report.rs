//! JSON-ready summaries of a fit, consumed by external plotters.

use crate::metrics::ResidualMetrics;
use crate::utils::{as_millis_f64, time_fn};
use orthoreg::baseline::ordinary_least_squares;
use orthoreg::dataset::Dataset;
use orthoreg::loss::PerpendicularL1Loss;
use orthoreg::segments::perpendicular_segments;
use orthoreg::{FitError, LineFitter, LineModel, LineParams, Point};
use serde::Serialize;

/// Points sampled along each perpendicular segment.
pub const SEGMENT_SAMPLES: usize = 50;

/// One line and how well it explains the data.
#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    pub slope: f64,
    pub intercept: f64,
    /// Sum of perpendicular distances.
    pub cost: f64,
    pub metrics: ResidualMetrics,
}

impl LineReport {
    pub fn new<D: Dataset + ?Sized>(model: &LineModel, dataset: &D) -> orthoreg::Result<Self> {
        let loss = PerpendicularL1Loss::new(dataset)?;
        Ok(Self {
            slope: model.slope(),
            intercept: model.intercept(),
            cost: loss.cost(&model.params()),
            metrics: ResidualMetrics::compute(model, dataset),
        })
    }
}

/// Everything needed to draw the orthogonal fit next to the ordinary one.
#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub points: Vec<Point>,
    pub orthogonal: LineReport,
    /// Absent when every point shares the same x.
    pub ordinary: Option<LineReport>,
    /// The generating line, when the data is synthetic.
    pub true_line: Option<LineParams>,
    /// Each perpendicular segment sampled at [`SEGMENT_SAMPLES`] points.
    pub segments: Vec<Vec<Point>>,
    pub converged: bool,
    pub iterations: usize,
    pub evaluations: usize,
    pub fit_ms: f64,
}

impl FitReport {
    /// Fit `dataset` with `fitter`, compute the baseline and the residual
    /// segments, and collect the result.
    pub fn fit<D: Dataset + ?Sized>(
        dataset: &D,
        fitter: &LineFitter,
        true_line: Option<LineParams>,
    ) -> orthoreg::Result<Self> {
        let (result, elapsed) = time_fn(|| fitter.fit(dataset));
        let result = result?;

        let ordinary = match ordinary_least_squares(dataset) {
            Ok(model) => Some(LineReport::new(&model, dataset)?),
            Err(FitError::ConstantX) => {
                log::warn!("ordinary regression skipped: every point has the same x");
                None
            }
            Err(e) => return Err(e),
        };

        let segments = match perpendicular_segments(&result.model, dataset) {
            Ok(segments) => segments
                .iter()
                .map(|s| s.sample(SEGMENT_SAMPLES))
                .collect(),
            Err(FitError::DegenerateSlope) => {
                log::warn!("fitted line is horizontal; no perpendicular segments drawn");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            points: dataset.points().to_vec(),
            orthogonal: LineReport::new(&result.model, dataset)?,
            ordinary,
            true_line,
            segments,
            converged: result.converged,
            iterations: result.iterations,
            evaluations: result.evaluations,
            fit_ms: as_millis_f64(elapsed),
        })
    }
}
