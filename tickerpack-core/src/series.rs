//! Closing-price series and its descriptive statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily observation: calendar date and closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Chronological closing-price series for a single ticker.
///
/// Built once per run from the provider response and immutable afterwards;
/// only its CSV projection outlives the process.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    ticker: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            ticker: ticker.into(),
            points,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Median closing price. `None` for an empty series.
    pub fn median(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let mut closes: Vec<f64> = self.points.iter().map(|p| p.close).collect();
        closes.sort_by(|a, b| a.total_cmp(b));
        let n = closes.len();
        let mid = n / 2;
        if n % 2 == 1 {
            Some(closes[mid])
        } else {
            Some((closes[mid - 1] + closes[mid]) / 2.0)
        }
    }

    /// Sample standard deviation (n − 1 denominator) of closing prices.
    ///
    /// `Some(0.0)` for a single observation, `None` for an empty series.
    pub fn sample_std_dev(&self) -> Option<f64> {
        let n = self.points.len();
        match n {
            0 => None,
            1 => Some(0.0),
            _ => {
                let mean = self.points.iter().map(|p| p.close).sum::<f64>() / n as f64;
                let var = self
                    .points
                    .iter()
                    .map(|p| {
                        let d = p.close - mean;
                        d * d
                    })
                    .sum::<f64>()
                    / (n - 1) as f64;
                Some(var.sqrt())
            }
        }
    }
}
