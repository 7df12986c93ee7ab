//! Demo driver: Company-A invoices four customers and reports the mean and
//! median amount owed to it.

use anyhow::Context;

use invoicestats_core::format_pennies;
use invoicestats_invoicing::Invoice;
use invoicestats_stats::{InvoiceStats, StatsConfig};

fn main() -> anyhow::Result<()> {
    invoicestats_observability::init();

    let config = StatsConfig::from_env();
    tracing::info!(max_invoices = config.max_invoices(), "starting invoice stats demo");

    // Company-A issues three invoices to Companies B, C and D.
    let issued = [
        Invoice::new("Company-A", "Company-B", 12955, 79)?,
        Invoice::new("Company-A", "Company-C", 36001, 12)?,
        Invoice::new("Company-A", "Company-D", 9849, 9)?,
    ];
    for invoice in &issued {
        println!("{invoice}");
    }

    let mut stats = InvoiceStats::from_invoices_with_config(config, issued)
        .context("seeding invoice stats")?;

    // A missed invoice to Company-E is added afterwards.
    let late = Invoice::new("Company-A", "Company-E", 18500, 50)?;
    println!("{late}");
    stats.add_invoice(late).context("adding late invoice")?;

    let mean = stats.mean()?;
    println!("Mean: {}", format_pennies(mean));

    let median = stats.median()?;
    println!("Median: {}", format_pennies(median));

    Ok(())
}
