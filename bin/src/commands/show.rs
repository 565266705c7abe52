//! Show command implementation.
//!
//! Loads one series through a fetch coordinator and prints the prepared
//! candlestick view.

use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tickerline_lib::prelude::*;
use tickerline_lib::{format_price, format_volume};

use crate::WindowArgs;
use crate::display::{Format, local_date, return_label, window_label, write_bars};
use crate::session::Session;

/// Show one instrument's bars and window return.
pub(crate) async fn show(session: &Session, symbol: &str, window: &WindowArgs) -> Result<()> {
    let symbol = Symbol::new(symbol)?;
    let mut coordinator =
        FetchCoordinator::new(Arc::clone(&session.source), Arc::clone(&session.cache));

    let progress = session.spinner(format!("Loading {symbol}"))?;
    coordinator.set_symbol(Some(symbol.clone()));
    let state = coordinator.wait_settled().await;
    progress.finish_and_clear();

    if let Some(error) = state.error {
        bail!(error);
    }
    let series = state
        .data
        .with_context(|| format!("No data for {symbol}"))?;
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        bail!("{symbol} has no bars");
    };

    let range = window.resolve(local_date(first.timestamp), local_date(last.timestamp))?;
    let view = ChartView::build(&series, range.as_ref(), window.granularity);

    match window.format {
        Format::Table => print_view(&view),
        format => write_bars(&view.bars, window.output.as_deref(), format)?,
    }
    Ok(())
}

fn print_view(view: &ChartView) {
    let mut header = view.symbol.to_string();
    if let Some(close) = view.last_close {
        header.push_str(&format!("  {}", format_price(close)));
    }
    if let Some(day) = &view.day_change {
        header.push_str(&format!("  Day: {day}"));
    }
    if let Some(all_time) = &view.all_time {
        header.push_str(&format!("  All-time: {}", all_time.percent));
    }
    println!("{header}");
    println!(
        "Window: {} ({})  Return: {}",
        window_label(view.range.as_ref()),
        view.granularity,
        return_label(view.window_return.as_ref())
    );

    if view.is_empty() {
        println!("\nNo bars in this window.");
        return;
    }

    println!(
        "\n{:<12} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    );
    println!("{}", "-".repeat(75));
    for bar in &view.bars {
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>12} {:>10}",
            local_date(bar.timestamp).to_string(),
            format_price(bar.open),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.close),
            format_volume(bar.volume)
        );
    }
    println!("\nTotal: {} bars", view.bars.len());
}
