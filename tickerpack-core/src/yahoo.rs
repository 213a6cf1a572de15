//! Yahoo Finance data provider.
//!
//! Fetches daily bars from Yahoo's v8 chart API and reduces them to a
//! closing-price series. One request per run: the export is all-or-nothing,
//! so there is no retry or backoff layer here.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; parse failures are reported as `ResponseFormat` errors.

use crate::provider::{PriceProvider, ProviderError};
use crate::series::{PricePoint, PriceSeries};
use crate::window::DateWindow;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Yahoo Finance provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the chart API URL for a ticker and date window.
    fn chart_url(ticker: &str, window: &DateWindow) -> String {
        let start_ts = window
            .start
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();
        let end_ts = window
            .end
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_utc()
            .timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Parse the chart API response into a closing-price series.
    ///
    /// Timestamps normalize to calendar dates; rows with a null close
    /// (holidays, non-trading days) are dropped.
    fn parse_response(ticker: &str, resp: ChartResponse) -> Result<PriceSeries, ProviderError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    ProviderError::SymbolNotFound {
                        ticker: ticker.to_string(),
                    }
                } else {
                    ProviderError::ResponseFormat(format!("{}: {}", err.code, err.description))
                }
            } else {
                ProviderError::ResponseFormat("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| ProviderError::NoData {
                ticker: ticker.to_string(),
            })?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("no quote data".into()))?;

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    ProviderError::ResponseFormat(format!("invalid timestamp: {ts}"))
                })?;

            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };

            points.push(PricePoint { date, close });
        }

        if points.is_empty() {
            return Err(ProviderError::NoData {
                ticker: ticker.to_string(),
            });
        }

        Ok(PriceSeries::new(ticker, points))
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch_daily_closes(
        &self,
        ticker: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries, ProviderError> {
        let url = Self::chart_url(ticker, window);

        let resp = self.client.get(&url).send().map_err(|e| {
            ProviderError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                ticker: ticker.to_string(),
            });
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            ProviderError::ResponseFormat(format!("failed to parse response for {ticker}: {e}"))
        })?;

        Self::parse_response(ticker, chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window() -> DateWindow {
        DateWindow {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn chart_url_encodes_window_and_interval() {
        let url = YahooProvider::chart_url("WIPRO.NS", &window());
        assert!(url.starts_with("https://query2.finance.yahoo.com/v8/finance/chart/WIPRO.NS"));
        assert!(url.contains("interval=1d"));
        assert!(url.contains("period1=1704067200"));
    }

    #[test]
    fn parse_reduces_to_dated_closes() {
        // 2024-01-02 and 2024-01-03 midnight UTC
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000],
                    "indicators": {
                        "quote": [{"close": [465.25, 470.10]}]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let series = YahooProvider::parse_response("WIPRO.NS", resp).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].date.to_string(), "2024-01-02");
        assert_eq!(series.points()[0].close, 465.25);
        assert_eq!(series.points()[1].date.to_string(), "2024-01-03");
    }

    #[test]
    fn parse_skips_null_closes() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000, 1704326400],
                    "indicators": {
                        "quote": [{"close": [465.25, null, 472.0]}]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let series = YahooProvider::parse_response("WIPRO.NS", resp).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[1].close, 472.0);
    }

    #[test]
    fn parse_maps_not_found_to_symbol_error() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let err = YahooProvider::parse_response("NOSUCH.NS", resp).unwrap_err();
        assert!(matches!(err, ProviderError::SymbolNotFound { .. }));
    }

    #[test]
    fn parse_all_null_closes_is_no_data() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600],
                    "indicators": {
                        "quote": [{"close": [null]}]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let err = YahooProvider::parse_response("WIPRO.NS", resp).unwrap_err();
        assert!(matches!(err, ProviderError::NoData { .. }));
    }
}
