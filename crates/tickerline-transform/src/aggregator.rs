//! Daily-to-weekly/monthly bar aggregation.

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use tickerline_types::{Bar, Granularity};

/// Re-aggregates daily bars at the given granularity, bucketing by local
/// calendar dates.
///
/// `Daily` returns the input borrowed and unchanged. `Weekly` groups by ISO
/// week and `Monthly` by calendar month. Each bucket becomes one bar:
/// first open, highest high, lowest low, last close, summed volume, and the
/// timestamp of its first member. Buckets are emitted in the order they are
/// first seen.
#[must_use]
pub fn aggregate(bars: &[Bar], granularity: Granularity) -> Cow<'_, [Bar]> {
    aggregate_in(bars, granularity, &Local)
}

/// Like [`aggregate`], but buckets by calendar dates in `tz`.
#[must_use]
pub fn aggregate_in<'a, Tz: TimeZone>(
    bars: &'a [Bar],
    granularity: Granularity,
    tz: &Tz,
) -> Cow<'a, [Bar]> {
    let key: fn(NaiveDate) -> BucketKey = match granularity {
        Granularity::Daily => return Cow::Borrowed(bars),
        Granularity::Weekly => BucketKey::week,
        Granularity::Monthly => BucketKey::month,
    };

    let mut slots: HashMap<BucketKey, usize> = HashMap::new();
    let mut buckets: Vec<BarBuilder> = Vec::new();

    for bar in bars {
        match slots.entry(key(bar.timestamp.with_timezone(tz).date_naive())) {
            Entry::Occupied(slot) => buckets[*slot.get()].update(bar),
            Entry::Vacant(slot) => {
                slot.insert(buckets.len());
                buckets.push(BarBuilder::new(bar));
            }
        }
    }

    Cow::Owned(buckets.into_iter().map(BarBuilder::finish).collect())
}

/// Identifies the bucket a bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BucketKey {
    /// ISO year and week number (the week's Thursday decides the year).
    Week { year: i32, week: u32 },
    /// Calendar year and month.
    Month { year: i32, month: u32 },
}

impl BucketKey {
    fn week(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self::Week {
            year: iso.year(),
            week: iso.week(),
        }
    }

    fn month(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Builder for one aggregated bar.
#[derive(Debug)]
struct BarBuilder {
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl BarBuilder {
    /// Starts a bucket from its first member.
    const fn new(bar: &Bar) -> Self {
        Self {
            timestamp: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }

    /// Folds a later member into the bucket.
    fn update(&mut self, bar: &Bar) {
        self.high = self.high.max(bar.high);
        self.low = self.low.min(bar.low);
        self.close = bar.close;
        self.volume += bar.volume;
    }

    const fn finish(self) -> Bar {
        Bar::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::FixedOffset;

    /// Buckets in UTC so results do not depend on the host zone.
    fn utc(bars: &[Bar], granularity: Granularity) -> Cow<'_, [Bar]> {
        aggregate_in(bars, granularity, &Utc)
    }

    #[allow(clippy::too_many_arguments)]
    fn day(y: i32, m: u32, d: u32, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        let timestamp = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        Bar::new(timestamp, open, high, low, close, volume)
    }

    /// Two trading weeks in January 2024 (Mon 8th through Fri 19th).
    fn two_weeks() -> Vec<Bar> {
        vec![
            day(2024, 1, 8, 10.0, 11.0, 9.5, 10.5, 100.0),
            day(2024, 1, 9, 10.5, 12.0, 10.0, 11.5, 150.0),
            day(2024, 1, 10, 11.5, 11.8, 9.0, 9.2, 200.0),
            day(2024, 1, 11, 9.2, 9.9, 8.8, 9.5, 50.0),
            day(2024, 1, 12, 9.5, 10.1, 9.4, 10.0, 75.0),
            day(2024, 1, 16, 10.0, 10.4, 9.7, 10.2, 120.0),
            day(2024, 1, 17, 10.2, 13.0, 10.1, 12.8, 300.0),
            day(2024, 1, 19, 12.8, 12.9, 11.0, 11.1, 80.0),
        ]
    }

    #[test]
    fn test_daily_is_identity() {
        let bars = two_weeks();
        let out = aggregate(&bars, Granularity::Daily);

        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, bars.as_slice());
    }

    #[test]
    fn test_weekly_reduction() {
        let bars = two_weeks();
        let weekly = utc(&bars, Granularity::Weekly);

        assert_eq!(weekly.len(), 2);

        let first = weekly[0];
        assert_eq!(first.timestamp, bars[0].timestamp);
        assert_relative_eq!(first.open, 10.0);
        assert_relative_eq!(first.high, 12.0);
        assert_relative_eq!(first.low, 8.8);
        assert_relative_eq!(first.close, 10.0);
        assert_relative_eq!(first.volume, 575.0);

        let second = weekly[1];
        assert_eq!(second.timestamp, bars[5].timestamp);
        assert_relative_eq!(second.open, 10.0);
        assert_relative_eq!(second.high, 13.0);
        assert_relative_eq!(second.low, 9.7);
        assert_relative_eq!(second.close, 11.1);
        assert_relative_eq!(second.volume, 500.0);
    }

    #[test]
    fn test_volume_conserved() {
        let bars = two_weeks();
        let total: f64 = bars.iter().map(|b| b.volume).sum();

        for granularity in [Granularity::Weekly, Granularity::Monthly] {
            let out = utc(&bars, granularity);
            let out_total: f64 = out.iter().map(|b| b.volume).sum();
            assert_relative_eq!(out_total, total);
            assert!(out.len() <= bars.len());
        }
    }

    #[test]
    fn test_monthly_groups_by_calendar_month() {
        let bars = vec![
            day(2024, 1, 30, 1.0, 2.0, 0.5, 1.5, 10.0),
            day(2024, 1, 31, 1.5, 3.0, 1.0, 2.5, 10.0),
            day(2024, 2, 1, 2.5, 2.6, 0.2, 0.4, 10.0),
            day(2024, 2, 29, 0.4, 0.9, 0.3, 0.8, 10.0),
            day(2024, 3, 1, 0.8, 1.0, 0.7, 0.9, 10.0),
        ];
        let monthly = utc(&bars, Granularity::Monthly);

        assert_eq!(monthly.len(), 3);
        assert_relative_eq!(monthly[0].high, 3.0);
        assert_relative_eq!(monthly[0].close, 2.5);
        assert_relative_eq!(monthly[1].open, 2.5);
        assert_relative_eq!(monthly[1].low, 0.2);
        assert_relative_eq!(monthly[1].volume, 20.0);
        assert_eq!(monthly[2].timestamp, bars[4].timestamp);
    }

    #[test]
    fn test_iso_week_crosses_calendar_year() {
        // Mon 2024-12-30 and Tue 2024-12-31 belong to ISO week 2025-W01,
        // together with Thu 2025-01-02.
        let bars = vec![
            day(2024, 12, 27, 1.0, 1.0, 1.0, 1.0, 1.0),
            day(2024, 12, 30, 2.0, 2.0, 2.0, 2.0, 1.0),
            day(2024, 12, 31, 3.0, 3.0, 3.0, 3.0, 1.0),
            day(2025, 1, 2, 4.0, 4.0, 4.0, 4.0, 1.0),
        ];
        let weekly = utc(&bars, Granularity::Weekly);

        assert_eq!(weekly.len(), 2);
        assert_relative_eq!(weekly[1].open, 2.0);
        assert_relative_eq!(weekly[1].close, 4.0);
        assert_relative_eq!(weekly[1].volume, 3.0);
    }

    #[test]
    fn test_iso_week_53_spans_new_year() {
        // Fri 2021-01-01 is in ISO week 2020-W53, like Mon 2020-12-28.
        let bars = vec![
            day(2020, 12, 28, 1.0, 5.0, 1.0, 1.0, 1.0),
            day(2021, 1, 1, 2.0, 2.0, 0.5, 2.0, 1.0),
            day(2021, 1, 4, 3.0, 3.0, 3.0, 3.0, 1.0),
        ];
        let weekly = utc(&bars, Granularity::Weekly);

        assert_eq!(weekly.len(), 2);
        assert_relative_eq!(weekly[0].high, 5.0);
        assert_relative_eq!(weekly[0].low, 0.5);
        assert_relative_eq!(weekly[0].close, 2.0);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let bars = two_weeks();
        let a = utc(&bars, Granularity::Weekly).into_owned();
        let b = utc(&bars, Granularity::Weekly).into_owned();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[], Granularity::Weekly).is_empty());
        assert!(aggregate(&[], Granularity::Monthly).is_empty());
        assert!(aggregate(&[], Granularity::Daily).is_empty());
    }

    #[test]
    fn test_bucket_uses_time_zone() {
        // 2024-03-31 23:00 UTC is already April 1st at UTC+2.
        let late = Bar::new(
            Utc.with_ymd_and_hms(2024, 3, 31, 23, 0, 0).unwrap(),
            1.0,
            1.0,
            1.0,
            1.0,
            1.0,
        );
        let april = day(2024, 4, 2, 2.0, 2.0, 2.0, 2.0, 1.0);
        let bars = vec![late, april];

        assert_eq!(utc(&bars, Granularity::Monthly).len(), 2);

        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(aggregate_in(&bars, Granularity::Monthly, &tz).len(), 1);
    }
}
