//! Compare orthogonal and ordinary regression on the demonstration data.
//!
//! Generates 50 noisy points around `y = 0.6 x`, fits both lines and prints a
//! JSON report (points, both fits, the true line, sampled perpendicular
//! segments) to stdout for an external plotter.
//!
//! Usage: `compare_regressions [seed]`

use anyhow::Context;
use benchmarks::data::demo_dataset;
use benchmarks::report::FitReport;
use orthoreg::{LineFitter, LineParams};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid seed {:?}", arg))?,
        None => 0,
    };

    let dataset = demo_dataset(seed)?;
    let report = FitReport::fit(&dataset, &LineFitter::default(), Some(LineParams::new(0.6, 0.0)))?;

    log::info!(
        "orthogonal: m = {:.6}, b = {:.6} ({} iterations, {:.3} ms)",
        report.orthogonal.slope,
        report.orthogonal.intercept,
        report.iterations,
        report.fit_ms
    );
    if let Some(ordinary) = &report.ordinary {
        log::info!(
            "ordinary:   m = {:.6}, b = {:.6}",
            ordinary.slope,
            ordinary.intercept
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
