//! Price provider trait and structured error types.
//!
//! The `PriceProvider` trait abstracts over the market-data source so the
//! export pipeline can be exercised against a mock in tests.

use crate::series::PriceSeries;
use crate::window::DateWindow;
use thiserror::Error;

/// Structured error types for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("HTTP {status} from provider for '{ticker}'")]
    Http { status: u16, ticker: String },

    #[error("ticker not found: {ticker}")]
    SymbolNotFound { ticker: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("no rows returned for '{ticker}' over the requested window")]
    NoData { ticker: String },
}

/// Trait for market-data providers.
///
/// Implementations fetch daily closing prices for a ticker over a date
/// window. Single-shot by contract: no retries, no partial results.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the daily closing-price series for a ticker over a window.
    fn fetch_daily_closes(
        &self,
        ticker: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries, ProviderError>;
}
