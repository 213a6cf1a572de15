//! CSV artifact — the persisted projection of a price series.

use crate::series::{PricePoint, PriceSeries};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Write the series as `Date,Close` rows. Overwrites any existing file.
pub fn write_series_csv(path: &Path, series: &PriceSeries) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create CSV {}", path.display()))?;

    wtr.write_record(["Date", "Close"])?;
    for point in series.points() {
        // Default f64 display is the shortest lossless form, so the file
        // round-trips exactly.
        wtr.write_record([point.date.to_string(), point.close.to_string()])?;
    }

    wtr.flush()
        .with_context(|| format!("failed to flush CSV {}", path.display()))?;
    Ok(())
}

/// Read a `Date,Close` CSV back into a series.
pub fn read_series_csv(path: &Path, ticker: &str) -> Result<PriceSeries> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV {}", path.display()))?;

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record.context("malformed CSV record")?;
        let date: NaiveDate = record
            .get(0)
            .context("missing Date column")?
            .parse()
            .context("unparseable date")?;
        let close: f64 = record
            .get(1)
            .context("missing Close column")?
            .parse()
            .context("unparseable close")?;
        points.push(PricePoint { date, close });
    }

    Ok(PriceSeries::new(ticker, points))
}
