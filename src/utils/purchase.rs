use crate::structs::order_structs::{BuyOrder, Transaction, TransactionType};
use crate::structs::user_structs::UserRecord;
use crate::utils::commission_calculator::CommissionBreakdown;
use crate::utils::constants::{CreditMode, CREDIT_MODE, MAX_TOKEN_BUY, MIN_TOKEN_BUY, NEWBIE_REWARD_AMOUNT};
use crate::utils::id_generator::IdGenerator;
use crate::utils::newbie_discount::{apply_newbie_discount, is_discount_eligible};
use crate::utils::process_commission::{process_commission, Commission};
use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Order is no longer available")]
    OrderUnavailable,
    #[error("Can't buy your own order")]
    OwnOrder,
    #[error("Token count {count} is outside {min}..={max}")]
    InvalidTokenCount { count: u32, min: u32, max: u32 },
    #[error("You do not have enough balance to complete this purchase (need {required}, have {available})")]
    InsufficientBalance { required: Decimal, available: Decimal },
}

/// A transaction to append to one user's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTransaction {
    pub user_id: String,
    pub transaction: Transaction,
}

#[derive(Debug, Clone)]
pub struct PurchaseOutcome {
    pub buyer: UserRecord,
    pub order: BuyOrder,
    pub final_price: Decimal,
    pub discount: Decimal,
    pub breakdown: CommissionBreakdown,
    pub commissions: Vec<Commission>,
    /// Referrers whose balances were credited, in ledger order.
    pub credited_referrers: Vec<UserRecord>,
    pub transactions: Vec<UserTransaction>,
}

/// Settles a buy of `order` by `buyer` against already-loaded records.
///
/// The buyer pays the price after the newbie rule, while the referral
/// commission is computed on the listing's full `total_price`.
pub fn complete_purchase(
    commission_ids: &dyn IdGenerator,
    transaction_ids: &dyn IdGenerator,
    buyer: &UserRecord,
    order: &BuyOrder,
    level1_user: Option<&UserRecord>,
    level2_user: Option<&UserRecord>,
) -> Result<PurchaseOutcome, PurchaseError> {
    if !order.is_available {
        return Err(PurchaseError::OrderUnavailable);
    }
    if order.seller_id == buyer.id {
        return Err(PurchaseError::OwnOrder);
    }
    if !(MIN_TOKEN_BUY..=MAX_TOKEN_BUY).contains(&order.token_count) {
        return Err(PurchaseError::InvalidTokenCount {
            count: order.token_count,
            min: MIN_TOKEN_BUY,
            max: MAX_TOKEN_BUY,
        });
    }

    let eligible = is_discount_eligible(buyer.is_newbie, buyer.newbie_reward_claimed);
    let final_price = apply_newbie_discount(
        order.total_price,
        NEWBIE_REWARD_AMOUNT,
        buyer.is_newbie,
        buyer.newbie_reward_claimed,
    );
    if buyer.balance < final_price {
        return Err(PurchaseError::InsufficientBalance {
            required: final_price,
            available: buyer.balance,
        });
    }

    let processed = process_commission(
        commission_ids,
        &order.id,
        order.total_price,
        &buyer.id,
        level1_user,
        level2_user,
    );

    let now = Utc::now();
    let discount = order.total_price - final_price;

    let mut updated_buyer = buyer.clone();
    updated_buyer.balance -= final_price;
    updated_buyer.token_balance = updated_buyer.token_balance.saturating_add(order.token_count);
    if eligible {
        updated_buyer.claim_newbie_reward();
    }

    let mut updated_order = order.clone();
    updated_order.is_available = false;

    let mut buy_tx = Transaction::completed(transaction_ids.next_id(), TransactionType::Buy, final_price, now);
    buy_tx.tokens = Some(order.token_count);
    buy_tx.reference_id = Some(format!("REF{}", now.timestamp_millis()));
    buy_tx.description = Some(format!("Bought {} tokens", order.token_count));
    buy_tx.order_id = Some(order.id.clone());

    let mut transactions = vec![UserTransaction {
        user_id: buyer.id.clone(),
        transaction: buy_tx,
    }];

    if eligible && discount > Decimal::ZERO {
        let mut reward_tx = Transaction::completed(transaction_ids.next_id(), TransactionType::Reward, discount, now);
        reward_tx.description = Some("Newbie welcome discount".into());
        reward_tx.order_id = Some(order.id.clone());
        transactions.push(UserTransaction {
            user_id: buyer.id.clone(),
            transaction: reward_tx,
        });
    }

    let mut credited_referrers = Vec::with_capacity(processed.commissions.len());
    for commission in &processed.commissions {
        let referrer = [level1_user, level2_user]
            .into_iter()
            .flatten()
            .find(|u| u.id == commission.to_user_id);
        let Some(referrer) = referrer else {
            continue;
        };

        match CREDIT_MODE {
            CreditMode::Instant => {
                let mut credited = referrer.clone();
                credited.balance = credited.balance.saturating_add(commission.amount);
                credited_referrers.push(credited);
            }
        }

        let mut commission_tx = Transaction::completed(
            transaction_ids.next_id(),
            TransactionType::Commission,
            commission.amount,
            now,
        );
        commission_tx.description = Some(format!("Level {} referral commission", commission.level.as_u8()));
        commission_tx.order_id = Some(order.id.clone());
        commission_tx.reference_id = Some(commission.id.clone());
        transactions.push(UserTransaction {
            user_id: commission.to_user_id.clone(),
            transaction: commission_tx,
        });
    }

    Ok(PurchaseOutcome {
        buyer: updated_buyer,
        order: updated_order,
        final_price,
        discount,
        breakdown: processed.breakdown,
        commissions: processed.commissions,
        credited_referrers,
        transactions,
    })
}
