use crate::utils::constants::{LEVEL_1_PERCENT, LEVEL_2_PERCENT, TOTAL_COMMISSION_PERCENT};
use crate::utils::money::{percent_of, round2};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How the 2.7% fee on an order is split. The platform share is always the
/// residual, so `level1_amount + level2_amount + platform_amount == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct CommissionBreakdown {
    pub total: Decimal,
    pub level1_amount: Decimal,
    pub level2_amount: Decimal,
    pub platform_amount: Decimal,
    pub level1_percent: Decimal,
    pub level2_percent: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralTier {
    Orphan,
    SingleReferrer,
    TwoTier,
}

impl ReferralTier {
    /// A level-2 referrer without a level-1 referrer counts as no referrer at all.
    /// Empty ids count as absent.
    pub fn resolve(level1_id: Option<&str>, level2_id: Option<&str>) -> Self {
        fn present(id: Option<&str>) -> Option<&str> {
            id.filter(|id| !id.is_empty())
        }
        match (present(level1_id), present(level2_id)) {
            (None, _) => ReferralTier::Orphan,
            (Some(_), None) => ReferralTier::SingleReferrer,
            (Some(_), Some(_)) => ReferralTier::TwoTier,
        }
    }
}

pub fn calculate_commission(
    order_amount: Decimal,
    level1_id: Option<&str>,
    level2_id: Option<&str>,
) -> CommissionBreakdown {
    if order_amount <= Decimal::ZERO {
        return CommissionBreakdown::default();
    }

    let total = percent_of(order_amount, TOTAL_COMMISSION_PERCENT);

    match ReferralTier::resolve(level1_id, level2_id) {
        ReferralTier::Orphan => CommissionBreakdown {
            total,
            platform_amount: total,
            ..Default::default()
        },
        ReferralTier::SingleReferrer => {
            let level1_amount = percent_of(order_amount, LEVEL_1_PERCENT);
            CommissionBreakdown {
                total,
                level1_amount,
                level2_amount: Decimal::ZERO,
                platform_amount: round2(total - level1_amount),
                level1_percent: LEVEL_1_PERCENT,
                level2_percent: Decimal::ZERO,
            }
        }
        ReferralTier::TwoTier => {
            let level1_amount = percent_of(order_amount, LEVEL_1_PERCENT);
            let level2_amount = percent_of(order_amount, LEVEL_2_PERCENT);
            CommissionBreakdown {
                total,
                level1_amount,
                level2_amount,
                platform_amount: round2(total - level1_amount - level2_amount),
                level1_percent: LEVEL_1_PERCENT,
                level2_percent: LEVEL_2_PERCENT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::PLATFORM_PERCENT;
    use rust_decimal_macros::dec;

    fn sum(b: &CommissionBreakdown) -> Decimal {
        b.level1_amount + b.level2_amount + b.platform_amount
    }

    #[test]
    fn orphan_order_goes_to_platform() {
        let result = calculate_commission(dec!(1000), None, None);
        assert_eq!(result.total, dec!(27));
        assert_eq!(result.level1_amount, Decimal::ZERO);
        assert_eq!(result.level2_amount, Decimal::ZERO);
        assert_eq!(result.platform_amount, dec!(27));
        assert_eq!(result.level1_percent, Decimal::ZERO);
        assert_eq!(result.level2_percent, Decimal::ZERO);
    }

    #[test]
    fn level2_without_level1_is_orphan() {
        let result = calculate_commission(dec!(1000), None, Some("user_l2"));
        assert_eq!(result, calculate_commission(dec!(1000), None, None));
    }

    #[test]
    fn empty_ids_count_as_absent() {
        assert_eq!(calculate_commission(dec!(1000), Some(""), None).platform_amount, dec!(27));
        assert_eq!(
            calculate_commission(dec!(1000), Some(""), Some("user_l2")),
            calculate_commission(dec!(1000), None, None)
        );
        assert_eq!(
            calculate_commission(dec!(1000), Some("user_l1"), Some("")),
            calculate_commission(dec!(1000), Some("user_l1"), None)
        );
        assert_eq!(ReferralTier::resolve(Some(""), Some("")), ReferralTier::Orphan);
    }

    #[test]
    fn single_referrer_split() {
        let result = calculate_commission(dec!(1000), Some("user_l1"), None);
        assert_eq!(result.level1_percent, dec!(1.8));
        assert_eq!(result.level1_amount, dec!(18));
        assert_eq!(result.level2_amount, Decimal::ZERO);
        assert_eq!(result.platform_amount, dec!(9));
        assert_eq!(result.total, dec!(27));

        let large = calculate_commission(dec!(10000), Some("user_l1"), None);
        assert_eq!(large.level1_amount, dec!(180));
        assert_eq!(large.total, dec!(270));
    }

    #[test]
    fn two_tier_split() {
        let result = calculate_commission(dec!(1000), Some("user_l1"), Some("user_l2"));
        assert_eq!(result.level1_amount, dec!(18));
        assert_eq!(result.level2_amount, dec!(6));
        assert_eq!(result.platform_amount, dec!(3));
        assert_eq!(result.total, dec!(27));
        assert_eq!(result.level1_percent, dec!(1.8));
        assert_eq!(result.level2_percent, dec!(0.6));
    }

    #[test]
    fn non_positive_amounts_are_zeroed() {
        for amount in [dec!(0), dec!(-500), dec!(-0.01)] {
            let result = calculate_commission(amount, Some("l1"), Some("l2"));
            assert_eq!(result, CommissionBreakdown::default());
        }
    }

    #[test]
    fn shares_reconcile_with_total_in_every_tier() {
        for amount in [dec!(2450), dec!(333.33), dec!(0.37), dec!(19.99), dec!(123456.789)] {
            for (l1, l2) in [(None, None), (Some("l1"), None), (Some("l1"), Some("l2"))] {
                let result = calculate_commission(amount, l1, l2);
                assert_eq!(sum(&result), result.total, "amount {amount} tier {l1:?}/{l2:?}");
                assert_eq!(result.total, round2(amount * dec!(0.027)));
            }
        }
    }

    #[test]
    fn residual_absorbs_rounding() {
        // 0.37 * 2.7% = 0.00999 -> 0.01; 1.8% -> 0.01; 0.6% -> 0.00
        let result = calculate_commission(dec!(0.37), Some("l1"), Some("l2"));
        assert_eq!(result.total, dec!(0.01));
        assert_eq!(result.level1_amount, dec!(0.01));
        assert_eq!(result.level2_amount, dec!(0.00));
        assert_eq!(result.platform_amount, dec!(0.00));
    }

    #[test]
    fn residual_can_go_negative_on_tiny_orders() {
        // 0.9 * 2.7% = 0.0243 -> 0.02; 1.8% -> 0.02; 0.6% = 0.0054 -> 0.01
        let result = calculate_commission(dec!(0.9), Some("l1"), Some("l2"));
        assert_eq!(result.total, dec!(0.02));
        assert_eq!(result.level1_amount, dec!(0.02));
        assert_eq!(result.level2_amount, dec!(0.01));
        assert_eq!(result.platform_amount, dec!(-0.01));
        assert_eq!(sum(&result), result.total);
    }

    #[test]
    fn largest_amounts_do_not_overflow() {
        for amount in [Decimal::MAX, dec!(30000000000000000000000000000)] {
            for (l1, l2) in [(None, None), (Some("l1"), None), (Some("l1"), Some("l2"))] {
                let result = calculate_commission(amount, l1, l2);
                assert!(result.total > Decimal::ZERO);
                assert_eq!(sum(&result), result.total, "amount {amount} tier {l1:?}/{l2:?}");
            }
        }
    }

    #[test]
    fn platform_is_nominally_the_remaining_rate() {
        let result = calculate_commission(dec!(1000), Some("l1"), Some("l2"));
        assert_eq!(result.platform_amount, percent_of(dec!(1000), PLATFORM_PERCENT));
    }

    #[test]
    fn commission_totals_for_common_amounts() {
        let cases = [
            (dec!(100), dec!(2.7)),
            (dec!(1000), dec!(27)),
            (dec!(5000), dec!(135)),
            (dec!(10000), dec!(270)),
        ];
        for (amount, expected) in cases {
            assert_eq!(calculate_commission(amount, Some("l1"), Some("l2")).total, expected);
        }
    }
}
