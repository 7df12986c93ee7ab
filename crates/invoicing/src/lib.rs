//! Invoicing domain module.
//!
//! An [`Invoice`] records an amount owed by a recipient to the supplier that
//! issued it. Invoices are validated once at construction and are immutable
//! afterwards (no IO, no storage).

pub mod invoice;
pub mod value;

pub use invoice::Invoice;
