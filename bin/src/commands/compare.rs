//! Compare command implementation.
//!
//! Loads up to four series side by side and prints their percent change
//! from the start of the window.

use anyhow::{Result, bail};
use std::collections::BTreeMap;
use std::sync::Arc;
use tickerline_lib::format_price;
use tickerline_lib::prelude::*;

use crate::WindowArgs;
use crate::display::{Format, local_date, return_label, window_label, write_lines};
use crate::session::Session;

/// Compare instruments over a shared window.
pub(crate) async fn compare(
    session: &Session,
    symbols: &[String],
    window: &WindowArgs,
) -> Result<()> {
    let symbols = symbols
        .iter()
        .map(Symbol::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut coordinator =
        MultiCoordinator::new(Arc::clone(&session.source), Arc::clone(&session.cache));
    coordinator.set_symbols(&symbols)?;

    let progress = session.spinner(format!("Loading {} series", symbols.len()))?;
    let state = coordinator.wait_settled().await;
    progress.finish_and_clear();

    if state.datasets.is_empty() {
        match state.first_error() {
            Some((symbol, error)) => bail!("{symbol}: {error}"),
            None => bail!("No data loaded"),
        }
    }
    if !session.quiet() {
        for symbol in &state.symbols {
            if let Some(error) = state.errors.get(symbol) {
                eprintln!("Warning: {symbol}: {error}");
            }
        }
    }

    let min = state
        .ready()
        .filter_map(|s| s.first())
        .map(|b| local_date(b.timestamp))
        .min();
    let max = state
        .ready()
        .filter_map(|s| s.last())
        .map(|b| local_date(b.timestamp))
        .max();
    let (Some(min), Some(max)) = (min, max) else {
        bail!("Loaded series have no bars");
    };

    let range = window.resolve(min, max)?;
    let view = ComparisonView::build(
        state.ready().map(Arc::as_ref),
        range.as_ref(),
        window.granularity,
    );

    match window.format {
        Format::Table => print_view(&view),
        format => write_lines(&view.lines, window.output.as_deref(), format)?,
    }
    Ok(())
}

fn print_view(view: &ComparisonView) {
    println!(
        "Window: {} ({})",
        window_label(view.range.as_ref()),
        view.granularity
    );
    println!("\n{:<10} {:>12} {:>10}", "SYMBOL", "LAST", "RETURN");
    println!("{}", "-".repeat(34));
    for line in &view.lines {
        println!(
            "{:<10} {:>12} {:>10}",
            line.symbol.to_string(),
            line.last_close.map_or_else(|| "-".to_string(), format_price),
            return_label(line.window_return.as_ref())
        );
    }

    let mut rows: BTreeMap<i64, Vec<Option<f64>>> = BTreeMap::new();
    for (column, line) in view.lines.iter().enumerate() {
        for point in &line.points {
            let row = rows
                .entry(point.timestamp.timestamp())
                .or_insert_with(|| vec![None; view.lines.len()]);
            row[column] = Some(point.value);
        }
    }
    if rows.is_empty() {
        println!("\nNo bars in this window.");
        return;
    }

    print!("\n{:<12}", "DATE");
    for line in &view.lines {
        print!(" {:>10}", line.symbol.to_string());
    }
    println!();
    println!("{}", "-".repeat(12 + 11 * view.lines.len()));
    for (timestamp, values) in &rows {
        let date = chrono::DateTime::from_timestamp(*timestamp, 0)
            .map_or_else(String::new, |t| local_date(t).to_string());
        print!("{date:<12}");
        for value in values {
            match value {
                Some(v) => print!(" {:>10}", format!("{v:+.2}%")),
                None => print!(" {:>10}", "-"),
            }
        }
        println!();
    }
    println!("\nTotal: {} points", rows.len());
}
