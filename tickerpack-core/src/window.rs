//! Offset-based date window arithmetic.
//!
//! The CLI takes day offsets relative to an anchor date ("today" in normal
//! operation) rather than absolute dates. The anchor is always passed in
//! explicitly so the conversion is deterministic under test.

use chrono::{Duration, NaiveDate};

/// The anchor date minus `days`.
pub fn date_from_offset(anchor: NaiveDate, days: u32) -> NaiveDate {
    anchor - Duration::days(i64::from(days))
}

/// Absolute date range for a fetch, both ends derived from offsets.
///
/// No ordering invariant is enforced here: an inverted or empty window is
/// passed through to the provider and surfaces as an empty result downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Build a window from day offsets: `start = anchor - start_offset`,
    /// `end = anchor - end_offset`.
    pub fn from_offsets(anchor: NaiveDate, start_offset: u32, end_offset: u32) -> Self {
        Self {
            start: date_from_offset(anchor, start_offset),
            end: date_from_offset(anchor, end_offset),
        }
    }
}
