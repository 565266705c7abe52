//! Display utilities and output formatting for the tickerline CLI.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tickerline_lib::prelude::*;

use crate::WindowArgs;

/// Output format for prepared views.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

/// Renders a bar timestamp as a local calendar date.
pub(crate) fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

fn parse_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid {what} date: {s}"))
}

impl WindowArgs {
    /// Resolves the flags to a window within `[min, max]`.
    ///
    /// `None` means the whole series.
    pub(crate) fn resolve(&self, min: NaiveDate, max: NaiveDate) -> Result<Option<DateRange>> {
        if let Some(preset) = self.preset {
            return Ok(preset.resolve(min, max));
        }
        let from = self.from.as_deref().map(|s| parse_date(s, "start")).transpose()?;
        let to = self.to.as_deref().map(|s| parse_date(s, "end")).transpose()?;
        if from.is_none() && to.is_none() {
            return Ok(None);
        }
        Ok(Some(DateRange::new(from.unwrap_or(min), to.unwrap_or(max))?))
    }
}

/// Opens the output file, or stdout when no path is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    })
}

/// Writes bars in a machine-readable format.
pub(crate) fn write_bars(bars: &[Bar], output: Option<&Path>, format: Format) -> Result<()> {
    let writer = open_output(output)?;
    match format {
        Format::Table | Format::Csv => CsvFormatter::new().write_bars(bars, writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, writer)?,
    }
    Ok(())
}

/// Writes comparison lines in a machine-readable format.
pub(crate) fn write_lines(
    lines: &[tickerline_lib::ComparisonLine],
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let writer = open_output(output)?;
    match format {
        Format::Table | Format::Csv => CsvFormatter::new().write_lines(lines, writer)?,
        Format::Json => JsonFormatter::new().write_lines(lines, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_lines(lines, writer)?,
    }
    Ok(())
}

/// Renders an optional return, or a dash.
pub(crate) fn return_label(r: Option<&Return>) -> String {
    r.map_or_else(|| "-".to_string(), |r| r.percent.clone())
}

/// Describes the applied window.
pub(crate) fn window_label(range: Option<&DateRange>) -> String {
    range.map_or_else(|| "entire history".to_string(), ToString::to_string)
}
