//! Export orchestration — the single linear pipeline behind the CLI.
//!
//! window → fetch → CSV → summary tags → manifest. Fail-fast throughout:
//! any error propagates without retries and without cleaning up artifacts
//! already written.

use crate::csv_export::write_series_csv;
use crate::manifest::{write_manifest, DatasetManifest};
use crate::paths::ExportPaths;
use crate::provider::PriceProvider;
use crate::window::DateWindow;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info};

/// One export run, fully specified.
///
/// The anchor date is explicit so offset arithmetic is deterministic under
/// test; the CLI passes the current local date.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub ticker: String,
    pub start_offset: u32,
    pub end_offset: u32,
    pub anchor: NaiveDate,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct ExportReport {
    pub csv_path: PathBuf,
    pub manifest_path: PathBuf,
    pub rows: usize,
    pub window: DateWindow,
}

/// Run the full export: fetch the closing-price series, persist it as CSV,
/// and write the dataset manifest.
pub fn run_export(
    provider: &dyn PriceProvider,
    paths: &ExportPaths,
    request: &ExportRequest,
) -> Result<ExportReport> {
    let window = DateWindow::from_offsets(request.anchor, request.start_offset, request.end_offset);

    info!(
        ticker = %request.ticker,
        start = %window.start,
        end = %window.end,
        provider = provider.name(),
        "downloading data"
    );
    let series = provider
        .fetch_daily_closes(&request.ticker, &window)
        .with_context(|| format!("download failed for '{}'", request.ticker))?;
    info!("downloaded the data");
    debug!(rows = series.len(), "total rows");

    let csv_path = paths.series_csv(&request.ticker);
    write_series_csv(&csv_path, &series)?;
    info!(path = %csv_path.display(), "CSV saved");

    // The CSV is written before name derivation, so a malformed ticker still
    // leaves the downloaded data on disk.
    let manifest = DatasetManifest::build(&series, &csv_path, request.anchor)?;
    debug!(tags = ?manifest.tags, "tags");

    let manifest_path = paths.manifest();
    write_manifest(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "YAML manifest saved");

    Ok(ExportReport {
        csv_path,
        manifest_path,
        rows: series.len(),
        window,
    })
}
