//! Rounding policy for aggregate statistics.

/// Round a pence value "half down": floor when the fractional part is at most
/// one half, ceil otherwise.
///
/// The fractional part is the Euclidean remainder, so it always lies in
/// `[0, 1)` and negative inputs follow the same rule. Exact halves go down:
/// `10.5 -> 10`, `10.5000001 -> 11`.
pub fn round_half_down(pennies: f64) -> i64 {
    let fractional_penny = pennies.rem_euclid(1.0);
    if fractional_penny <= 0.5 {
        pennies.floor() as i64
    } else {
        pennies.ceil() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_down() {
        let values = [10.0, 10.2, 10.5, 10.5000001, 10.8];
        let rounded: Vec<i64> = values.iter().map(|v| round_half_down(*v)).collect();
        assert_eq!(rounded, vec![10, 10, 10, 11, 11]);
    }

    #[test]
    fn mean_of_three_invoices_rounds_up() {
        assert_eq!(round_half_down(650_000.0 / 3.0), 216_667);
    }

    #[test]
    fn negative_values_use_the_same_fractional_rule() {
        // -10.5 has fractional part 0.5 -> floor.
        assert_eq!(round_half_down(-10.5), -11);
        // -10.2 has fractional part 0.8 -> ceil.
        assert_eq!(round_half_down(-10.2), -10);
    }
}
