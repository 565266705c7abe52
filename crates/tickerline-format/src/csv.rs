//! CSV output format.

use std::io::Write;

use tickerline_transform::ComparisonLine;
use tickerline_types::Bar;

use crate::formatter::point_records;
use crate::{FormatError, Formatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}open{d}high{d}low{d}close{d}volume")?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.timestamp.format(TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        Ok(())
    }

    fn write_lines<W: Write + Send>(
        &self,
        lines: &[ComparisonLine],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}symbol{d}percent")?;
        }

        for record in point_records(lines) {
            writeln!(
                writer,
                "{}{d}{}{d}{:.4}",
                record.timestamp.format(TIMESTAMP_FORMAT),
                record.symbol,
                record.value
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;
    use tickerline_transform::PercentPoint;
    use tickerline_types::Symbol;

    fn create_test_bar() -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        Bar::new(timestamp, 185.5, 187.25, 184.0, 186.75, 48_200_000.0)
    }

    fn create_test_line() -> ComparisonLine {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        ComparisonLine {
            symbol: Symbol::new("AAPL").unwrap(),
            points: vec![
                PercentPoint {
                    timestamp: start,
                    value: 0.0,
                },
                PercentPoint {
                    timestamp: start + chrono::Duration::days(1),
                    value: 1.25,
                },
            ],
            window_return: None,
            last_close: Some(188.0),
        }
    }

    #[test]
    fn test_csv_bars() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_bars(&[create_test_bar()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp,open,high,low,close,volume"));
        assert!(result.contains("2024-01-15T00:00:00Z,185.5,187.25,184,186.75,48200000"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_bars(&[create_test_bar()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("timestamp,open"));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_bars(&[create_test_bar()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp\topen\thigh"));
    }

    #[test]
    fn test_csv_lines_long_form() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_lines(&[create_test_line()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let rows: Vec<_> = result.lines().collect();
        assert_eq!(rows[0], "timestamp,symbol,percent");
        assert_eq!(rows[1], "2024-01-15T00:00:00Z,AAPL,0.0000");
        assert_eq!(rows[2], "2024-01-16T00:00:00Z,AAPL,1.2500");
    }
}
