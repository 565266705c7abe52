//! Human-readable rendering of prices, volumes and changes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::returns::signed_percent;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a price with precision scaled to its magnitude.
///
/// Two decimals at or above 1, four at or above 0.01, six below that.
/// Negative values are scaled by their magnitude.
#[must_use]
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if magnitude >= 1.0 {
        format!("{price:.2}")
    } else if magnitude >= 0.01 {
        format!("{price:.4}")
    } else {
        format!("{price:.6}")
    }
}

/// Formats a volume with a `K`, `M` or `B` suffix.
#[must_use]
pub fn format_volume(volume: f64) -> String {
    if volume >= 1e9 {
        format!("{:.1}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("{:.1}M", volume / 1e6)
    } else if volume >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        volume.to_string()
    }
}

/// A signed price change between two values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Signed price delta (e.g., "+1.25").
    pub value: String,
    /// Signed percent delta (e.g., "-0.40%").
    pub percent: String,
    /// True when the delta is zero or positive.
    pub positive: bool,
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.value, self.percent)
    }
}

/// Describes the change from `previous` to `current`.
///
/// The percent is reported as zero when `previous` is zero.
#[must_use]
pub fn format_change(current: f64, previous: f64) -> Change {
    let change = current - previous;
    let pct = if previous == 0.0 {
        0.0
    } else {
        change / previous * 100.0
    };
    let sign = if change >= 0.0 { "+" } else { "" };

    Change {
        value: format!("{sign}{}", format_price(change)),
        percent: signed_percent(pct),
        positive: change >= 0.0,
    }
}

/// Formats a date as abbreviated month and year (e.g., "Jan 2024").
#[must_use]
pub fn format_month(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}
