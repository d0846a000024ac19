use rust_decimal::{Decimal, RoundingStrategy};

/// Currency precision after every computed step.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds a currency value to cents, midpoint away from zero.
///
/// Applied right after each multiplication or subtraction, not once at the end,
/// so totals line up when inputs carry more than two decimal places.
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percent / 100`, rounded to cents.
///
/// The rate is reduced first so the product stays within range for any
/// `amount` when `percent` is at most 100; beyond that it saturates.
#[inline]
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    let rate = percent / Decimal::ONE_HUNDRED;
    let product = amount.checked_mul(rate).unwrap_or_else(|| {
        if amount.is_sign_negative() != rate.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    });
    round2(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn below_midpoint_truncates() {
        assert_eq!(round2(dec!(8.99999)), dec!(9.00));
        assert_eq!(round2(dec!(3.3349)), dec!(3.33));
    }

    #[test]
    fn percent_of_order() {
        assert_eq!(percent_of(dec!(1000), dec!(2.7)), dec!(27));
        assert_eq!(percent_of(dec!(333.33), dec!(2.7)), dec!(9.00));
        assert_eq!(percent_of(dec!(333.33), dec!(0.6)), dec!(2.00));
    }

    #[test]
    fn percent_of_largest_amount_stays_in_range() {
        let total = percent_of(Decimal::MAX, dec!(2.7));
        assert!(total > Decimal::ZERO && total < Decimal::MAX);
        assert_eq!(percent_of(Decimal::MAX, dec!(100)), Decimal::MAX);
        assert_eq!(percent_of(Decimal::MAX, dec!(200)), Decimal::MAX);
    }
}
