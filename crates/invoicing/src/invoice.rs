use chrono::{Local, NaiveDate};
use serde::Serialize;

use invoicestats_core::{Amount, DomainResult};

/// An invoice: payment owed by `recipient` to `supplier`.
///
/// Immutable after construction. `Debug` and `Serialize` expose every field;
/// `Display` renders the printable invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    issue_date: NaiveDate,
    supplier: String,
    recipient: String,
    amount: Amount,
}

impl Invoice {
    /// Format used for `issue_date` in printed invoices.
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Create an invoice dated today (local time).
    ///
    /// Fails with a validation error when the amount is negative, when
    /// `pennies` exceeds 99, or when the total is above £200,000,000.00.
    pub fn new(
        supplier: impl Into<String>,
        recipient: impl Into<String>,
        pounds: i64,
        pennies: i64,
    ) -> DomainResult<Self> {
        Self::issued_on(
            Local::now().date_naive(),
            supplier,
            recipient,
            pounds,
            pennies,
        )
    }

    /// Create an invoice with an explicit issue date.
    pub fn issued_on(
        issue_date: NaiveDate,
        supplier: impl Into<String>,
        recipient: impl Into<String>,
        pounds: i64,
        pennies: i64,
    ) -> DomainResult<Self> {
        let amount = Amount::new(pounds, pennies)?;
        Ok(Self::with_amount(issue_date, supplier, recipient, amount))
    }

    /// Create an invoice from an already validated amount.
    pub fn with_amount(
        issue_date: NaiveDate,
        supplier: impl Into<String>,
        recipient: impl Into<String>,
        amount: Amount,
    ) -> Self {
        let invoice = Self {
            issue_date,
            supplier: supplier.into(),
            recipient: recipient.into(),
            amount,
        };

        tracing::trace!(
            supplier = %invoice.supplier,
            recipient = %invoice.recipient,
            total_pennies = amount.total_pennies(),
            "invoice created"
        );
        invoice
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    /// Issue date as `YYYY-MM-DD`.
    pub fn issue_date_display(&self) -> String {
        self.issue_date.format(Self::DATE_FORMAT).to_string()
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn pounds(&self) -> u64 {
        self.amount.pounds()
    }

    pub fn pennies(&self) -> u8 {
        self.amount.pennies()
    }

    /// Invoice total in pennies (£799.99 -> 79999).
    pub fn total_pennies(&self) -> u64 {
        self.amount.total_pennies()
    }

    /// Amount owed, formatted as `£{pounds}.{pennies:02}`.
    pub fn amount_due(&self) -> String {
        self.amount.to_string()
    }
}

impl core::fmt::Display for Invoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Invoice")?;
        writeln!(f, "Date Created: {}", self.issue_date_display())?;
        writeln!(f, "Supplier: {}", self.supplier)?;
        writeln!(f, "Recipient: {}", self.recipient)?;
        writeln!(f, "Amount due: {}", self.amount)
    }
}
