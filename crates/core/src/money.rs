//! Monetary rounding.
//!
//! Amounts cross the wire as plain decimal numbers, so they are carried as
//! `f64` and rounded to cents wherever a derived amount is produced.

/// Round an amount to two decimal places (cents).
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(round_to_cents(10.004), 10.0);
        assert_eq!(round_to_cents(10.006), 10.01);
        assert_eq!(round_to_cents(34.999), 35.0);
    }

    #[test]
    fn rounds_half_cents_away_from_zero() {
        // 0.125 is exactly representable, so the half-cent case is exercised
        // without binary-representation noise.
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }

    #[test]
    fn preserves_exact_cent_amounts() {
        assert_eq!(round_to_cents(25.00), 25.00);
        assert_eq!(round_to_cents(0.0), 0.0);
    }
}
