//! Monetary amounts held as integer pence.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Validated invoice amount: whole pounds plus remaining pennies.
///
/// The canonical representation is `total_pennies`, computed once at
/// construction (£799.99 -> 79999). All statistics read this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Amount {
    pounds: u64,
    pennies: u8,
    total_pennies: u64,
}

impl Amount {
    /// Largest invoice value accepted: £200,000,000.00.
    pub const MAX_TOTAL_PENNIES: u64 = 20_000_000_000;

    /// Largest value the pennies component may take.
    pub const MAX_PENNIES: i128 = 99;

    /// Build an amount from its pounds and pennies components.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// negativity, then pennies range, then the maximum invoice value.
    pub fn new(pounds: i64, pennies: i64) -> DomainResult<Self> {
        Self::from_components(i128::from(pounds), i128::from(pennies))
    }

    /// Same checks as [`Amount::new`], for components that may not fit in
    /// `i64` (integers parsed from untyped input).
    pub fn from_components(pounds: i128, pennies: i128) -> DomainResult<Self> {
        if pounds < 0 || pennies < 0 {
            return Err(DomainError::validation("invoice values cannot be negative"));
        }

        if pennies > Self::MAX_PENNIES {
            return Err(DomainError::validation(
                "pennies cannot be greater than 99",
            ));
        }

        // Anything above this many pounds is over the limit, and multiplying
        // it by 100 could overflow.
        let max_pounds = i128::from(Self::MAX_TOTAL_PENNIES / 100);
        let over_limit = pounds > max_pounds
            || pounds * 100 + pennies > i128::from(Self::MAX_TOTAL_PENNIES);
        if over_limit {
            return Err(DomainError::validation(format!(
                "total invoice amount cannot be greater than £200,000,000.00; \
                 attempted invoice value: £{pounds}.{pennies:02}"
            )));
        }

        Ok(Self {
            pounds: pounds as u64,
            pennies: pennies as u8,
            total_pennies: (pounds * 100 + pennies) as u64,
        })
    }

    pub fn pounds(&self) -> u64 {
        self.pounds
    }

    pub fn pennies(&self) -> u8 {
        self.pennies
    }

    /// Total value in pennies (`100 * pounds + pennies`).
    pub fn total_pennies(&self) -> u64 {
        self.total_pennies
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "£{}.{:02}", self.pounds, self.pennies)
    }
}

/// Render an integer pence value as pounds, e.g. `216667` -> `£2166.67`.
///
/// Used by presentation code for aggregate results, which are plain pence
/// integers rather than [`Amount`]s.
pub fn format_pennies(total: i64) -> String {
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    format!("{sign}£{}.{:02}", abs / 100, abs % 100)
}
