//! Runtime configuration for [`InvoiceStats`](crate::InvoiceStats).

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`StatsConfig::max_invoices`].
pub const MAX_INVOICES_ENV: &str = "INVOICESTATS_MAX_INVOICES";

/// Collection limits.
///
/// The maximum can be lowered but never raised above
/// [`StatsConfig::HARD_MAX_INVOICES`], and never set to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStatsConfig")]
pub struct StatsConfig {
    max_invoices: usize,
}

impl StatsConfig {
    /// Hard cap on the number of invoices a single collection may hold.
    pub const HARD_MAX_INVOICES: usize = 20_000_000;

    pub const DEFAULT_MAX_INVOICES: usize = Self::HARD_MAX_INVOICES;

    /// Maximum number of invoices a single collection may hold.
    pub fn max_invoices(&self) -> usize {
        self.max_invoices
    }

    /// Set the maximum, clamped to `1..=HARD_MAX_INVOICES`.
    pub fn with_max_invoices(mut self, max_invoices: usize) -> Self {
        let clamped = max_invoices.clamp(1, Self::HARD_MAX_INVOICES);
        if clamped != max_invoices {
            tracing::warn!(
                requested = max_invoices,
                applied = clamped,
                "max_invoices outside 1..=20000000; clamped"
            );
        }
        self.max_invoices = clamped;
        self
    }

    /// Defaults, overridden by `INVOICESTATS_MAX_INVOICES` when it is set.
    ///
    /// A value that is not an integer in `1..=20000000` is logged and ignored.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(MAX_INVOICES_ENV) {
            Ok(raw) => config.apply_max_invoices_override(&raw),
            Err(_) => config,
        }
    }

    fn apply_max_invoices_override(self, raw: &str) -> Self {
        let parsed = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| e.to_string())
            .and_then(validate_max_invoices);

        match parsed {
            Ok(max) => Self { max_invoices: max },
            Err(reason) => {
                tracing::warn!(
                    value = raw,
                    default = self.max_invoices,
                    %reason,
                    "ignoring INVOICESTATS_MAX_INVOICES; using default"
                );
                self
            }
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            max_invoices: Self::DEFAULT_MAX_INVOICES,
        }
    }
}

fn validate_max_invoices(max_invoices: usize) -> Result<usize, String> {
    if (1..=StatsConfig::HARD_MAX_INVOICES).contains(&max_invoices) {
        Ok(max_invoices)
    } else {
        Err(format!(
            "max_invoices must be between 1 and {}, got {max_invoices}",
            StatsConfig::HARD_MAX_INVOICES
        ))
    }
}

/// Unvalidated shape of [`StatsConfig`] as it appears in a settings document.
#[derive(Deserialize)]
#[serde(default)]
struct RawStatsConfig {
    max_invoices: usize,
}

impl Default for RawStatsConfig {
    fn default() -> Self {
        Self {
            max_invoices: StatsConfig::DEFAULT_MAX_INVOICES,
        }
    }
}

impl TryFrom<RawStatsConfig> for StatsConfig {
    type Error = String;

    fn try_from(raw: RawStatsConfig) -> Result<Self, Self::Error> {
        let max_invoices = validate_max_invoices(raw.max_invoices)?;
        Ok(Self { max_invoices })
    }
}
