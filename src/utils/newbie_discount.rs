use crate::utils::money::round2;
use rust_decimal::Decimal;

/// Price the buyer pays after the one-time newbie reward.
///
/// Only the buyer's price changes. Referral commission is always computed on
/// the original amount, never on the value returned here.
pub fn apply_newbie_discount(
    price: Decimal,
    discount_amount: Decimal,
    is_newbie: bool,
    reward_claimed: bool,
) -> Decimal {
    if !is_newbie || reward_claimed {
        return price;
    }

    let discounted = price - discount_amount;
    if discounted < Decimal::ZERO {
        Decimal::ZERO
    } else {
        round2(discounted)
    }
}

/// Whether the next purchase consumes the newbie reward.
pub fn is_discount_eligible(is_newbie: bool, reward_claimed: bool) -> bool {
    is_newbie && !reward_claimed
}
