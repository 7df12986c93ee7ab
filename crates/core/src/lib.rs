//! `invoicestats-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the invoicing and
//! statistics crates: the error model, the validated [`Amount`] value object
//! and the rounding policy applied to aggregate statistics.

pub mod error;
pub mod money;
pub mod rounding;

pub use error::{DomainError, DomainResult};
pub use money::{format_pennies, Amount};
pub use rounding::round_half_down;
