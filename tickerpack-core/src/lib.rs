//! TickerPack Core — everything behind the `tickerpack` CLI.
//!
//! This crate contains the export pipeline:
//! - Output path configuration and directory provisioning
//! - Offset-based date window arithmetic
//! - Price series with descriptive statistics (median, sample SD)
//! - `PriceProvider` trait and the Yahoo Finance chart-API implementation
//! - CSV artifact writer/reader
//! - Typed YAML dataset manifest for the downstream MLOps pipeline
//! - The `run_export` orchestration that wires the steps together

pub mod csv_export;
pub mod exporter;
pub mod manifest;
pub mod paths;
pub mod provider;
pub mod series;
pub mod window;
pub mod yahoo;

pub use exporter::{run_export, ExportReport, ExportRequest};
pub use manifest::{DatasetManifest, SummaryTags};
pub use paths::ExportPaths;
pub use provider::{PriceProvider, ProviderError};
pub use series::{PricePoint, PriceSeries};
pub use window::DateWindow;
pub use yahoo::YahooProvider;
