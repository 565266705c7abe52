//! Percentage return and percent normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickerline_types::Bar;

/// Close-to-close return across a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    /// Return in percent.
    pub value: f64,
    /// Signed, two-decimal rendering (e.g., "+5.00%", "-5.00%").
    pub percent: String,
    /// True when the return is zero or positive.
    pub positive: bool,
}

impl Return {
    /// Builds a return from a percentage value.
    #[must_use]
    pub fn from_percent(value: f64) -> Self {
        Self {
            value,
            percent: signed_percent(value),
            positive: value >= 0.0,
        }
    }
}

impl std::fmt::Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.percent)
    }
}

/// Computes the return from the first close to the last close.
///
/// Returns `None` for fewer than two bars or when the first close is not
/// positive.
#[must_use]
pub fn calculate_return(bars: &[Bar]) -> Option<Return> {
    if bars.len() < 2 {
        return None;
    }
    let first = bars.first()?.close;
    let last = bars.last()?.close;
    if first <= 0.0 {
        return None;
    }
    Some(Return::from_percent((last - first) / first * 100.0))
}

/// One point of a series rebased to percent change from its first close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    /// Bar timestamp.
    pub timestamp: DateTime<Utc>,
    /// Change from the first close, in percent.
    pub value: f64,
}

/// Rebases closes to percent change from the first close.
///
/// The first point is always 0. Returns an empty vector when the input is
/// empty or its first close is not positive.
#[must_use]
pub fn normalize_to_percent(bars: &[Bar]) -> Vec<PercentPoint> {
    let Some(base) = bars.first().map(|b| b.close).filter(|&close| close > 0.0) else {
        return Vec::new();
    };
    bars.iter()
        .map(|bar| PercentPoint {
            timestamp: bar.timestamp,
            value: (bar.close - base) / base * 100.0,
        })
        .collect()
}

/// Formats a percentage with an explicit sign and two decimals.
pub(crate) fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}
