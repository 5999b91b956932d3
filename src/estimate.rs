//! Post-fee share estimates.

/// Number of shares purchasable once fees are paid.
///
/// Returns `(amount - total_fees) / price_per_share`, or `0.0` when the
/// price is not positive. Fractional shares are returned as-is; callers
/// decide whether to floor. When fees exceed the amount the result is
/// negative, which renders naturally as "you cannot afford this order".
pub fn shares_after_fees(amount: f64, price_per_share: f64, total_fees: f64) -> f64 {
    if price_per_share <= 0.0 {
        return 0.0;
    }
    (amount - total_fees) / price_per_share
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_estimate() {
        // $1000 minus $15 in fees buys 19.7 shares at $50.
        assert!((shares_after_fees(1000.0, 50.0, 15.0) - 19.7).abs() < 1e-9);
    }

    #[test]
    fn zero_price_yields_zero() {
        assert_eq!(shares_after_fees(1000.0, 0.0, 15.0), 0.0);
        assert_eq!(shares_after_fees(1000.0, -5.0, 15.0), 0.0);
    }

    #[test]
    fn fees_exceeding_amount_go_negative() {
        assert!(shares_after_fees(10.0, 50.0, 15.0) < 0.0);
    }

    #[test]
    fn no_fees_is_straight_division() {
        assert!((shares_after_fees(1000.0, 40.0, 0.0) - 25.0).abs() < 1e-9);
    }
}
