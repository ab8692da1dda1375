use anyhow::{bail, Context};
use csv::ReaderBuilder;
use orthoreg::dataset::InMemoryDataset;
use orthoreg::geometry::Point;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a point set from a CSV file.
///
/// The first row is a header and is skipped. Each following row holds x in
/// its first column and y in its second; extra columns are ignored.
///
/// # Example
///
/// ```no_run
/// use benchmarks::data::load_points_csv;
///
/// let dataset = load_points_csv("benchmarks/datasets/points.csv").unwrap();
/// ```
pub fn load_points_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<InMemoryDataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_points(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn read_points<R: Read>(reader: R) -> anyhow::Result<InMemoryDataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() < 2 {
            bail!("row {}: expected at least 2 columns, found {}", row + 1, record.len());
        }
        let x: f64 = record[0]
            .parse()
            .with_context(|| format!("row {}: bad x value {:?}", row + 1, &record[0]))?;
        let y: f64 = record[1]
            .parse()
            .with_context(|| format!("row {}: bad y value {:?}", row + 1, &record[1]))?;
        points.push(Point::new(x, y));
    }

    log::debug!("loaded {} points", points.len());
    Ok(InMemoryDataset::from_points(points)?)
}
