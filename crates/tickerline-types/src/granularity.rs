//! Aggregation granularity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bucket size used to re-aggregate a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bar per trading day (no aggregation).
    #[default]
    Daily,
    /// One bar per ISO-8601 week.
    Weekly,
    /// One bar per calendar month.
    Monthly,
}

impl Granularity {
    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns the short label shown on selector buttons.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
        }
    }

    /// Returns all available granularities.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "d" | "1d" => Ok(Self::Daily),
            "weekly" | "week" | "w" | "1w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" | "1mo" => Ok(Self::Monthly),
            _ => Err(GranularityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid granularity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityParseError(String);

impl std::fmt::Display for GranularityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid granularity '{}', expected one of: daily, weekly, monthly",
            self.0
        )
    }
}

impl std::error::Error for GranularityParseError {}
