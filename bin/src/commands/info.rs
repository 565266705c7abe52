//! Info command implementation.
//!
//! Shows one catalog entry and the windows each preset resolves to.

use anyhow::{Context, Result};
use tickerline_lib::format_month;
use tickerline_lib::prelude::*;

use crate::session::Session;

/// Show catalog details for an instrument.
pub(crate) async fn show_info(session: &Session, symbol: &str) -> Result<()> {
    let catalog = session.catalog().await?;
    let entry = catalog
        .get(symbol)
        .with_context(|| format!("Unknown symbol: {symbol}"))?;
    let (min, max) = entry.bounds();

    println!("Instrument: {}", entry.name());
    println!("Symbol:     {}", entry.symbol());
    println!("Exchange:   {}", entry.exchange());
    println!("Status:     {}", entry.status_label());
    println!(
        "Data:       {} to {} ({} - {})",
        min,
        max,
        format_month(min),
        format_month(max)
    );

    println!("\nWindow presets:");
    println!("{:<6} {:<12} {:<12}", "PRESET", "FROM", "TO");
    println!("{}", "-".repeat(30));
    for preset in RangePreset::all() {
        match preset.resolve(min, max) {
            Some(range) => println!("{:<6} {:<12} {:<12}", preset.label(), range.from, range.to),
            None => println!("{:<6} {:<12} {:<12}", preset.label(), min, max),
        }
    }

    Ok(())
}
