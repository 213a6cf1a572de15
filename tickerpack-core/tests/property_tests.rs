//! Property tests for date arithmetic and summary statistics.
//!
//! Uses proptest to verify:
//! 1. Window ordering — start_offset > end_offset gives start < end
//! 2. Offset round-trip — (anchor - n) + n == anchor
//! 3. Version stamp — eight digits, no hyphens
//! 4. Median bounds — median lies within [min, max] of the closes

use chrono::NaiveDate;
use proptest::prelude::*;
use tickerpack_core::manifest::version_stamp;
use tickerpack_core::series::{PricePoint, PriceSeries};
use tickerpack_core::window::{date_from_offset, DateWindow};

fn arb_anchor() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2035, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..10_000.0f64, 1..200)
}

proptest! {
    /// start_offset > end_offset implies a forward-ordered window.
    #[test]
    fn forward_window_for_ordered_offsets(
        anchor in arb_anchor(),
        end_offset in 0u32..1000,
        gap in 1u32..1000,
    ) {
        let start_offset = end_offset + gap;
        let w = DateWindow::from_offsets(anchor, start_offset, end_offset);
        prop_assert!(w.start < w.end);
    }

    /// Subtracting and re-adding an offset is the identity.
    #[test]
    fn offset_round_trips(anchor in arb_anchor(), days in 0u32..10_000) {
        let d = date_from_offset(anchor, days);
        prop_assert_eq!(d + chrono::Duration::days(i64::from(days)), anchor);
    }

    /// Version stamps are exactly eight digits with no separators.
    #[test]
    fn version_stamp_is_eight_digits(anchor in arb_anchor()) {
        let v = version_stamp(anchor);
        prop_assert_eq!(v.len(), 8);
        prop_assert!(v.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(&v, &anchor.to_string().replace('-', ""));
    }

    /// The median always lies within the observed close range.
    #[test]
    fn median_within_close_bounds(closes in arb_closes()) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points: Vec<PricePoint> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                close,
            })
            .collect();
        let series = PriceSeries::new("T.NS", points);

        let median = series.median().unwrap();
        let min = closes.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = closes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(median >= min && median <= max);
    }
}
