//! Calendar date windows and window presets.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::DateRangeError;

/// An inclusive window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub from: NaiveDate,
    /// Last day (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that from <= to.
    ///
    /// # Errors
    ///
    /// Returns an error if from > to.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if from > to {
            return Err(DateRangeError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.to - self.from).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns the first and last whole second covered by the range in `tz`,
    /// as Unix timestamps.
    ///
    /// The window runs from 00:00:00 on `from` through 23:59:59 on `to`.
    #[must_use]
    pub fn timestamp_bounds<Tz: TimeZone>(&self, tz: &Tz) -> (i64, i64) {
        let start = self.from.and_time(NaiveTime::MIN);
        let end = self.to.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));

        let start = tz
            .from_local_datetime(&start)
            .earliest()
            .map_or_else(|| tz.from_utc_datetime(&start).timestamp(), |dt| dt.timestamp());
        let end = tz
            .from_local_datetime(&end)
            .latest()
            .map_or_else(|| tz.from_utc_datetime(&end).timestamp(), |dt| dt.timestamp());
        (start, end)
    }

    /// Returns true if the instant falls inside the range in `tz`.
    #[must_use]
    pub fn contains_instant<Tz: TimeZone>(&self, instant: &DateTime<Tz>, tz: &Tz) -> bool {
        let (start, end) = self.timestamp_bounds(tz);
        let ts = instant.timestamp();
        ts >= start && ts <= end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Quick window selections offered next to the date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    /// Last month.
    #[serde(rename = "1M")]
    OneMonth,
    /// Last three months.
    #[serde(rename = "3M")]
    ThreeMonths,
    /// Last six months.
    #[serde(rename = "6M")]
    SixMonths,
    /// Last year.
    #[serde(rename = "1Y")]
    OneYear,
    /// Last five years.
    #[serde(rename = "5Y")]
    FiveYears,
    /// Entire available history.
    #[serde(rename = "All")]
    All,
}

impl RangePreset {
    /// Returns the button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
            Self::All => "All",
        }
    }

    /// Returns the look-back in months, or None for [`RangePreset::All`].
    #[must_use]
    pub const fn months(&self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(1),
            Self::ThreeMonths => Some(3),
            Self::SixMonths => Some(6),
            Self::OneYear => Some(12),
            Self::FiveYears => Some(60),
            Self::All => None,
        }
    }

    /// Returns all presets in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::FiveYears,
            Self::All,
        ]
    }

    /// Resolves the preset against an instrument's available dates.
    ///
    /// The window ends on `max` and starts the preset's look-back earlier,
    /// clamped to `min`. Returns `None` for [`RangePreset::All`], which means
    /// "no filtering".
    ///
    /// The look-back keeps the day of month and lets days past the end of the
    /// target month roll over, so one month before 2024-03-31 is 2024-03-02
    /// rather than 2024-02-29.
    #[must_use]
    pub fn resolve(&self, min: NaiveDate, max: NaiveDate) -> Option<DateRange> {
        let months = self.months()?;
        let from = months_before(max, months)
            .unwrap_or(min)
            .max(min)
            .min(max);
        Some(DateRange { from, to: max })
    }

    /// Finds the preset that produces `range` for the given bounds.
    #[must_use]
    pub fn matching(range: Option<&DateRange>, min: NaiveDate, max: NaiveDate) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.resolve(min, max).as_ref() == range)
    }
}

/// Moves `date` back by whole months, rolling overflow days forward.
fn months_before(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let index = date.year() * 12 + i32::try_from(date.month0()).ok()?
        - i32::try_from(months).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(index.div_euclid(12), month, 1)?
        .checked_add_days(Days::new(u64::from(date.day0())))
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for RangePreset {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DateRangeError::UnknownPreset(s.to_string()))
    }
}
