//! Prepared chart views: the pipeline from a raw series to what gets drawn.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use tickerline_types::{Bar, DateRange, Granularity, Series, Symbol};

use crate::aggregator::aggregate_in;
use crate::display::{Change, format_change};
use crate::range::filter_by_range_in;
use crate::returns::{PercentPoint, Return, calculate_return, normalize_to_percent};

/// A single-symbol candlestick view.
///
/// Bars are the series filtered to the window and then re-aggregated. The
/// window return is measured on the filtered daily bars, so it does not
/// depend on the granularity. Last close, day change and all-time return
/// always describe the whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// Instrument shown.
    pub symbol: Symbol,
    /// Granularity of [`bars`](Self::bars).
    pub granularity: Granularity,
    /// Window applied, if any.
    pub range: Option<DateRange>,
    /// Bars to draw.
    pub bars: Vec<Bar>,
    /// Return across the window.
    pub window_return: Option<Return>,
    /// Latest close of the series.
    pub last_close: Option<f64>,
    /// Change of the latest close against the previous one.
    pub day_change: Option<Change>,
    /// Change of the latest close against the first one.
    pub all_time: Option<Change>,
}

impl ChartView {
    /// Runs the window filter and the aggregator over `series`, both on the
    /// local calendar.
    #[must_use]
    pub fn build(series: &Series, range: Option<&DateRange>, granularity: Granularity) -> Self {
        Self::build_in(series, range, granularity, &Local)
    }

    /// Like [`build`](Self::build), but filters and buckets on the calendar
    /// of `tz`.
    #[must_use]
    pub fn build_in<Tz: TimeZone>(
        series: &Series,
        range: Option<&DateRange>,
        granularity: Granularity,
        tz: &Tz,
    ) -> Self {
        let all = series.bars();
        let window = filter_by_range_in(all, range, tz);
        let window_return = calculate_return(&window);
        let bars = aggregate_in(&window, granularity, tz).into_owned();

        let last_close = all.last().map(|b| b.close);
        let day_change = match all {
            [.., previous, last] => Some(format_change(last.close, previous.close)),
            _ => None,
        };
        let all_time = match (all.first(), all.last()) {
            (Some(first), Some(last)) if first.close > 0.0 => {
                Some(format_change(last.close, first.close))
            }
            _ => None,
        };

        Self {
            symbol: series.symbol().clone(),
            granularity,
            range: range.copied(),
            bars,
            window_return,
            last_close,
            day_change,
            all_time,
        }
    }

    /// Returns true if nothing falls inside the window.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// One instrument's line in an overlay comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLine {
    /// Instrument shown.
    pub symbol: Symbol,
    /// Percent change from the first point in the window.
    pub points: Vec<PercentPoint>,
    /// Return across the window.
    pub window_return: Option<Return>,
    /// Latest close of the series.
    pub last_close: Option<f64>,
}

/// Several instruments rebased to a common percent scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    /// Granularity of every line.
    pub granularity: Granularity,
    /// Window applied, if any.
    pub range: Option<DateRange>,
    /// One line per series, in input order.
    pub lines: Vec<ComparisonLine>,
}

impl ComparisonView {
    /// Filters, aggregates and normalizes each series on the local calendar.
    #[must_use]
    pub fn build<'a>(
        datasets: impl IntoIterator<Item = &'a Series>,
        range: Option<&DateRange>,
        granularity: Granularity,
    ) -> Self {
        Self::build_in(datasets, range, granularity, &Local)
    }

    /// Like [`build`](Self::build), but on the calendar of `tz`.
    #[must_use]
    pub fn build_in<'a, Tz: TimeZone>(
        datasets: impl IntoIterator<Item = &'a Series>,
        range: Option<&DateRange>,
        granularity: Granularity,
        tz: &Tz,
    ) -> Self {
        let lines = datasets
            .into_iter()
            .map(|series| {
                let window = filter_by_range_in(series.bars(), range, tz);
                let bars = aggregate_in(&window, granularity, tz);
                ComparisonLine {
                    symbol: series.symbol().clone(),
                    points: normalize_to_percent(&bars),
                    window_return: calculate_return(&window),
                    last_close: series.last().map(|b| b.close),
                }
            })
            .collect();

        Self {
            granularity,
            range: range.copied(),
            lines,
        }
    }

    /// Returns the line for `symbol`, if present.
    #[must_use]
    pub fn line(&self, symbol: &Symbol) -> Option<&ComparisonLine> {
        self.lines.iter().find(|line| &line.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{FixedOffset, NaiveDate, Utc};

    /// Bars at local noon, so calendar filtering is stable in any zone.
    fn series(symbol: &str, days: &[(u32, f64)]) -> Series {
        let bars = days
            .iter()
            .map(|&(day, close)| {
                let timestamp = Local
                    .with_ymd_and_hms(2024, 1, day, 12, 0, 0)
                    .unwrap()
                    .with_timezone(&Utc);
                Bar::new(timestamp, close, close, close, close, 1_000.0)
            })
            .collect();
        Series::new(Symbol::new(symbol).unwrap(), bars).unwrap()
    }

    fn window(from: u32, to: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, from).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, to).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_window_return_end_to_end() {
        let s = series("AAA", &[(2, 100.0), (3, 105.0), (4, 95.0)]);

        let full = ChartView::build(&s, Some(&window(2, 4)), Granularity::Daily);
        let full_return = full.window_return.unwrap();
        assert_eq!(full_return.percent, "-5.00%");
        assert!(!full_return.positive);

        let head = ChartView::build(&s, Some(&window(2, 3)), Granularity::Daily);
        let head_return = head.window_return.unwrap();
        assert_eq!(head_return.percent, "+5.00%");
        assert!(head_return.positive);
        assert_eq!(head.bars.len(), 2);
    }

    #[test]
    fn test_return_ignores_granularity() {
        let s = series("AAA", &[(8, 100.0), (9, 110.0), (15, 120.0), (16, 90.0)]);
        let daily = ChartView::build(&s, None, Granularity::Daily);
        let weekly = ChartView::build(&s, None, Granularity::Weekly);

        assert_eq!(daily.window_return, weekly.window_return);
        assert!(weekly.bars.len() < daily.bars.len());
    }

    #[test]
    fn test_whole_series_stats() {
        let s = series("AAA", &[(2, 100.0), (3, 105.0), (4, 95.0)]);
        let view = ChartView::build(&s, Some(&window(2, 2)), Granularity::Daily);

        assert_eq!(view.bars.len(), 1);
        assert!(view.window_return.is_none());
        assert_relative_eq!(view.last_close.unwrap(), 95.0);

        let day = view.day_change.unwrap();
        assert!(!day.positive);
        assert_eq!(view.all_time.unwrap().percent, "-5.00%");
    }

    #[test]
    fn test_empty_window() {
        let s = series("AAA", &[(2, 100.0), (3, 105.0)]);
        let view = ChartView::build(&s, Some(&window(20, 25)), Granularity::Weekly);

        assert!(view.is_empty());
        assert!(view.window_return.is_none());
    }

    #[test]
    fn test_comparison_normalizes_each_line() {
        let a = series("AAA", &[(2, 100.0), (3, 110.0)]);
        let b = series("BBB", &[(2, 50.0), (3, 40.0)]);
        let view = ComparisonView::build([&a, &b], None, Granularity::Daily);

        assert_eq!(view.lines.len(), 2);
        let a_line = view.line(a.symbol()).unwrap();
        assert_relative_eq!(a_line.points[0].value, 0.0);
        assert_relative_eq!(a_line.points[1].value, 10.0);

        let b_line = view.line(b.symbol()).unwrap();
        assert_relative_eq!(b_line.points[1].value, -20.0);
        assert_eq!(b_line.window_return.as_ref().unwrap().percent, "-20.00%");
    }

    /// Bars at 05:00 UTC, which is the previous evening at UTC-8.
    fn early_utc(symbol: &str, days: &[(u32, u32, f64)]) -> Series {
        let bars = days
            .iter()
            .map(|&(month, day, close)| {
                let timestamp = Utc.with_ymd_and_hms(2024, month, day, 5, 0, 0).unwrap();
                Bar::new(timestamp, close, close, close, close, 1_000.0)
            })
            .collect();
        Series::new(Symbol::new(symbol).unwrap(), bars).unwrap()
    }

    #[test]
    fn test_window_and_buckets_share_calendar() {
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let s = early_utc("AAA", &[(1, 30, 100.0), (2, 1, 104.0), (2, 2, 108.0)]);
        let january = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();

        // Local Jan 29 and Jan 31 fall in the window and form one January bar.
        let view = ChartView::build_in(&s, Some(&january), Granularity::Monthly, &pacific);
        assert_eq!(view.bars.len(), 1);
        assert_relative_eq!(view.bars[0].open, 100.0);
        assert_relative_eq!(view.bars[0].close, 104.0);
        assert_relative_eq!(view.bars[0].volume, 2_000.0);
        assert_eq!(view.window_return.unwrap().percent, "+4.00%");

        let comparison =
            ComparisonView::build_in([&s], Some(&january), Granularity::Monthly, &pacific);
        assert_eq!(comparison.lines[0].points.len(), 1);
    }
}
