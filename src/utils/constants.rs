use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TOTAL_COMMISSION_PERCENT: Decimal = dec!(2.7);
pub const LEVEL_1_PERCENT: Decimal = dec!(1.8);
pub const LEVEL_2_PERCENT: Decimal = dec!(0.6);
/// Never applied directly, the platform share is whatever the referrers leave of the total.
pub const PLATFORM_PERCENT: Decimal = dec!(0.3);
/// Ledger entries below this amount are not paid and not recorded.
pub const MIN_PAYOUT: Decimal = dec!(10);

pub const NEWBIE_REWARD_AMOUNT: Decimal = dec!(350);
pub const MIN_SELL_AMOUNT: Decimal = dec!(200);
/// Currency units per token.
pub const TOKEN_CONVERSION_RATE: Decimal = dec!(100);
/// Upper bound for any single amount a caller submits.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

pub const MIN_TOKEN_BUY: u32 = 1;
pub const MAX_TOKEN_BUY: u32 = 10_000;

pub const RECENT_COMMISSIONS_LIMIT: usize = 10;
pub const REFERRAL_CODE_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditMode {
    /// Referrer balances are credited in the same request that completes the order.
    Instant,
}

pub const CREDIT_MODE: CreditMode = CreditMode::Instant;

pub const REFERRAL_BASE_URL: &str = "https://cryptotrade.app/ref/";
