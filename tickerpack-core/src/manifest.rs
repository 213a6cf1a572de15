//! Dataset manifest (YAML) for the downstream MLOps pipeline.
//!
//! The manifest mirrors the Azure ML data-asset schema. It is a typed record
//! serialized with serde_yaml rather than templated text, so the output
//! contract is explicit and cannot silently drift.

use crate::series::PriceSeries;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Schema URL embedded in every manifest.
pub const MANIFEST_SCHEMA_URL: &str =
    "https://azuremlschemas.azureedge.net/latest/data.schema.json";

/// Asset type expected by the consuming pipeline.
pub const ASSET_TYPE_URI_FILE: &str = "uri_file";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot summarize an empty series for '{ticker}'")]
    EmptySeries { ticker: String },

    #[error("ticker '{ticker}' has no exchange suffix (expected a '.' separator)")]
    MissingExchangeSuffix { ticker: String },
}

/// Summary statistics attached to the manifest as tags.
///
/// Recomputed fresh from the series on every run. Median and SD carry
/// exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTags {
    #[serde(rename = "Length")]
    pub length: usize,
    #[serde(rename = "Start")]
    pub start: NaiveDate,
    #[serde(rename = "End")]
    pub end: NaiveDate,
    #[serde(rename = "Median")]
    pub median: f64,
    #[serde(rename = "SD")]
    pub sd: f64,
}

impl SummaryTags {
    pub fn from_series(series: &PriceSeries) -> Result<Self, ManifestError> {
        let empty = || ManifestError::EmptySeries {
            ticker: series.ticker().to_string(),
        };
        Ok(Self {
            length: series.len(),
            start: series.first_date().ok_or_else(empty)?,
            end: series.last_date().ok_or_else(empty)?,
            median: round2(series.median().ok_or_else(empty)?),
            sd: round2(series.sample_std_dev().ok_or_else(empty)?),
        })
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Dataset name: the ticker text before its first period.
///
/// A period-less ticker is rejected rather than silently passed through —
/// the name would otherwise collide with the raw symbol and the consuming
/// pipeline keys assets by this name.
pub fn dataset_name(ticker: &str) -> Result<&str, ManifestError> {
    match ticker.split_once('.') {
        Some((name, _)) if !name.is_empty() => Ok(name),
        _ => Err(ManifestError::MissingExchangeSuffix {
            ticker: ticker.to_string(),
        }),
    }
}

/// Version stamp: the anchor date with hyphens removed, e.g. `20240305`.
pub fn version_stamp(anchor: NaiveDate) -> String {
    anchor.format("%Y%m%d").to_string()
}

/// The manifest record written to `data_upload.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub name: String,
    pub description: String,
    pub path: String,
    pub tags: SummaryTags,
    pub version: String,
}

impl DatasetManifest {
    /// Build the manifest for a fetched series and its CSV artifact.
    pub fn build(
        series: &PriceSeries,
        csv_path: &Path,
        anchor: NaiveDate,
    ) -> Result<Self, ManifestError> {
        let tags = SummaryTags::from_series(series)?;
        let name = dataset_name(series.ticker())?.to_string();
        let description = format!(
            "Stock data for {} during {}:{} in 1d interval.",
            series.ticker(),
            tags.start,
            tags.end
        );

        Ok(Self {
            schema: MANIFEST_SCHEMA_URL.to_string(),
            asset_type: ASSET_TYPE_URI_FILE.to_string(),
            name,
            description,
            path: csv_path.display().to_string(),
            tags,
            version: version_stamp(anchor),
        })
    }
}

/// Serialize and write the manifest, fully replacing any previous file.
pub fn write_manifest(path: &Path, manifest: &DatasetManifest) -> Result<()> {
    let yaml = serde_yaml::to_string(manifest).context("failed to serialize manifest")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("failed to write manifest to {}", path.display()))?;
    Ok(())
}
