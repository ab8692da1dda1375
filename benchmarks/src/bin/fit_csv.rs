//! Fit an orthogonal line to the points in a CSV file.
//!
//! Usage: `fit_csv <path> [initial_slope initial_intercept] [--save <model>]`
//!
//! The file needs a header row; x is read from the first column and y from
//! the second. The JSON report is printed to stdout. With `--save` the fitted
//! line is also written as a model file, then read back and checked.

use anyhow::{bail, ensure, Context};
use benchmarks::data::load_points_csv;
use benchmarks::report::FitReport;
use orthoreg::serialization::{load_model, save_model};
use orthoreg::{LineFitter, LineModel};

const USAGE: &str = "usage: fit_csv <path> [initial_slope initial_intercept] [--save <model>]";

#[derive(Debug, PartialEq)]
struct Args {
    path: String,
    initial_guess: (f64, f64),
    save: Option<String>,
}

fn parse_number(value: &str, name: &str) -> anyhow::Result<f64> {
    value
        .parse()
        .with_context(|| format!("invalid {} {:?}", name, value))
}

fn parse_args(raw: &[String]) -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut save = None;
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--save" {
            match iter.next() {
                Some(path) => save = Some(path.clone()),
                None => bail!("--save needs a path\n{}", USAGE),
            }
        } else {
            positional.push(arg.as_str());
        }
    }

    let (path, initial_guess) = match positional.as_slice() {
        [path] => (*path, (0.0, 0.0)),
        [path, slope, intercept] => (
            *path,
            (
                parse_number(slope, "initial slope")?,
                parse_number(intercept, "initial intercept")?,
            ),
        ),
        _ => bail!(USAGE),
    };

    Ok(Args {
        path: path.to_string(),
        initial_guess,
        save,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    let dataset = load_points_csv(&args.path)?;
    let fitter = LineFitter::builder()
        .initial_guess(args.initial_guess.0, args.initial_guess.1)
        .build();
    let report = FitReport::fit(&dataset, &fitter, None)?;

    if !report.converged {
        log::warn!(
            "minimizer stopped before converging ({} iterations)",
            report.iterations
        );
    }

    if let Some(model_path) = &args.save {
        let model = LineModel::new(report.orthogonal.slope, report.orthogonal.intercept);
        save_model(&model, model_path).with_context(|| format!("saving {}", model_path))?;
        let reloaded = load_model(model_path).with_context(|| format!("reloading {}", model_path))?;
        ensure!(
            reloaded == model,
            "model file {} does not round-trip: wrote {:?}, read {:?}",
            model_path,
            model,
            reloaded
        );
        log::info!("saved fitted line to {}", model_path);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
