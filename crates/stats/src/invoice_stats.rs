use std::sync::Arc;

use serde_json::Value;

use invoicestats_core::{round_half_down, DomainError, DomainResult};
use invoicestats_invoicing::{value::json_type_name, Invoice};

use crate::config::StatsConfig;
use crate::statistics;

/// Collection of invoices with mean and median amount owed.
///
/// Invoices are shared, not copied: the collection keeps an `Arc<Invoice>`
/// per entry and never mutates it. Insertion order is preserved.
///
/// There is no internal synchronization; wrap in a `Mutex` to share mutable
/// access across threads.
#[derive(Debug, Clone)]
pub struct InvoiceStats {
    invoices: Vec<Arc<Invoice>>,
    invoice_count: usize,
    config: StatsConfig,
}

impl InvoiceStats {
    /// Empty collection with the default maximum of 20,000,000 invoices.
    pub fn new() -> Self {
        Self::with_config(StatsConfig::default())
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self {
            invoices: Vec::new(),
            invoice_count: 0,
            config,
        }
    }

    /// Collection seeded with `invoices`, each stored through
    /// [`add_invoice`](Self::add_invoice).
    pub fn from_invoices<I>(invoices: I) -> DomainResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<Invoice>>,
    {
        Self::from_invoices_with_config(StatsConfig::default(), invoices)
    }

    pub fn from_invoices_with_config<I>(config: StatsConfig, invoices: I) -> DomainResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<Invoice>>,
    {
        let mut stats = Self::with_config(config);
        stats.add_invoices(invoices)?;
        Ok(stats)
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn max_invoices(&self) -> usize {
        self.config.max_invoices()
    }

    /// Number of stored invoices.
    pub fn invoice_count(&self) -> usize {
        self.invoice_count
    }

    pub fn len(&self) -> usize {
        self.invoice_count
    }

    pub fn is_empty(&self) -> bool {
        self.invoice_count == 0
    }

    /// Stored invoices in insertion order.
    pub fn invoices(&self) -> &[Arc<Invoice>] {
        &self.invoices
    }

    /// Store one invoice.
    ///
    /// Fails with [`DomainError::CapacityExceeded`] once the configured maximum
    /// has been reached, leaving the collection unchanged.
    pub fn add_invoice(&mut self, invoice: impl Into<Arc<Invoice>>) -> DomainResult<()> {
        self.check_max_invoice_num()?;

        let invoice = invoice.into();
        self.invoice_count += 1;
        tracing::debug!(
            invoice_count = self.invoice_count,
            total_pennies = invoice.total_pennies(),
            "invoice stored"
        );
        self.invoices.push(invoice);
        Ok(())
    }

    /// Store each invoice in turn.
    ///
    /// Stops at the first failure; invoices stored before it are kept.
    pub fn add_invoices<I>(&mut self, invoices: I) -> DomainResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Arc<Invoice>>,
    {
        for invoice in invoices {
            self.add_invoice(invoice)?;
        }
        Ok(())
    }

    /// Store an invoice given as untyped JSON.
    ///
    /// Anything other than a JSON object fails with
    /// [`DomainError::TypeMismatch`] naming the JSON type received. Objects are
    /// parsed with [`Invoice::from_value`], whose validation errors propagate,
    /// and then stored like [`add_invoice`](Self::add_invoice), so the
    /// capacity check comes last.
    pub fn add_value(&mut self, value: &Value) -> DomainResult<()> {
        if !value.is_object() {
            return Err(DomainError::type_mismatch(json_type_name(value)));
        }

        let invoice = Invoice::from_value(value)?;
        self.add_invoice(invoice)
    }

    /// Drop every stored invoice and reset the count to zero.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.invoice_count, "invoice stats cleared");
        self.invoices = Vec::new();
        self.invoice_count = 0;
    }

    /// Totals of the stored invoices in pennies, in insertion order.
    ///
    /// Lazy; call again for a fresh pass.
    pub fn invoice_amounts(&self) -> impl Iterator<Item = u64> + '_ {
        self.invoices.iter().map(|invoice| invoice.total_pennies())
    }

    /// Mean invoice amount in pennies, rounded half down.
    ///
    /// Fails with [`DomainError::EmptyData`] when no invoices are stored.
    pub fn mean(&self) -> DomainResult<i64> {
        let mean = statistics::mean(self.invoice_amounts())?;
        Ok(round_half_down(mean))
    }

    /// Median invoice amount in pennies, rounded half down.
    ///
    /// Fails with [`DomainError::EmptyData`] when no invoices are stored.
    pub fn median(&self) -> DomainResult<i64> {
        let median = statistics::median(self.invoice_amounts())?;
        Ok(round_half_down(median))
    }

    /// See [`invoicestats_core::round_half_down`].
    pub fn round_half_down(pennies: f64) -> i64 {
        round_half_down(pennies)
    }

    fn check_max_invoice_num(&self) -> DomainResult<()> {
        if self.invoice_count >= self.config.max_invoices() {
            tracing::warn!(
                max_invoices = self.config.max_invoices(),
                "invoice rejected: invoice stats is full"
            );
            return Err(DomainError::capacity_exceeded(self.config.max_invoices()));
        }
        Ok(())
    }
}

impl Default for InvoiceStats {
    fn default() -> Self {
        Self::new()
    }
}
