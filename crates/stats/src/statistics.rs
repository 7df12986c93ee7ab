//! Statistics kernels over invoice totals in pennies.
//!
//! Both functions return the exact statistic as `f64`; rounding is left to the
//! caller. An empty input is an error, not zero.

use invoicestats_core::{DomainError, DomainResult};

/// Arithmetic mean.
pub fn mean(data: impl IntoIterator<Item = u64>) -> DomainResult<f64> {
    let (sum, count) = data
        .into_iter()
        .fold((0u128, 0u128), |(sum, count), x| (sum + u128::from(x), count + 1));

    if count == 0 {
        return Err(DomainError::empty_data("mean"));
    }

    // Split into whole and fractional parts so large sums keep their fraction.
    let whole = sum / count;
    let remainder = sum % count;
    Ok(whole as f64 + remainder as f64 / count as f64)
}

/// Median: the middle value, or the mean of the two middle values when the
/// number of data points is even.
pub fn median(data: impl IntoIterator<Item = u64>) -> DomainResult<f64> {
    let mut sorted: Vec<u64> = data.into_iter().collect();
    if sorted.is_empty() {
        return Err(DomainError::empty_data("median"));
    }
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid] as f64)
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}
