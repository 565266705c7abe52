//! Calendar window filtering.

use std::borrow::Cow;

use chrono::{Local, TimeZone};
use tickerline_types::{Bar, DateRange};

/// Keeps the bars that fall inside `range`, using the local calendar.
///
/// The window covers 00:00:00 on `range.from` through 23:59:59 on
/// `range.to`. `None` means the whole series and returns the input
/// borrowed. Order is preserved; an empty result is not an error.
#[must_use]
pub fn filter_by_range<'a>(bars: &'a [Bar], range: Option<&DateRange>) -> Cow<'a, [Bar]> {
    filter_by_range_in(bars, range, &Local)
}

/// Like [`filter_by_range`], but evaluates day boundaries in `tz`.
#[must_use]
pub fn filter_by_range_in<'a, Tz: TimeZone>(
    bars: &'a [Bar],
    range: Option<&DateRange>,
    tz: &Tz,
) -> Cow<'a, [Bar]> {
    let Some(range) = range else {
        return Cow::Borrowed(bars);
    };
    let (start, end) = range.timestamp_bounds(tz);

    Cow::Owned(
        bars.iter()
            .filter(|bar| {
                let ts = bar.unix_seconds();
                ts >= start && ts <= end
            })
            .copied()
            .collect(),
    )
}
