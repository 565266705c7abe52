//! Search command implementation.

use anyhow::Result;

use crate::session::Session;

/// Search the catalog by symbol prefix, then name prefix.
pub(crate) async fn search(session: &Session, query: &str) -> Result<()> {
    let catalog = session.catalog().await?;
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No instruments found.");
        return Ok(());
    }

    println!("{:<10} {:<40} {:<10} {:<8}", "SYMBOL", "NAME", "EXCHANGE", "STATUS");
    println!("{}", "-".repeat(71));

    for entry in &results {
        println!(
            "{:<10} {:<40} {:<10} {:<8}",
            entry.symbol(),
            truncate(entry.name(), 40),
            entry.exchange(),
            entry.status_label()
        );
    }

    println!("\nTotal: {} matches (catalog updated {})", results.len(), catalog.updated());
    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('~');
    out
}
