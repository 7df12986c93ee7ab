//! Invoice statistics.
//!
//! [`InvoiceStats`] stores invoices in insertion order, up to a configurable
//! maximum, and reports the mean and median amount owed in pennies, rounded
//! half down.

pub mod config;
pub mod invoice_stats;
pub mod statistics;

pub use config::StatsConfig;
pub use invoice_stats::InvoiceStats;
