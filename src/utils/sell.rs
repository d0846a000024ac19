use crate::structs::order_structs::{Transaction, TransactionType};
use crate::structs::user_structs::{UpiConfig, UserRecord};
use crate::utils::constants::{MIN_SELL_AMOUNT, TOKEN_CONVERSION_RATE};
use crate::utils::id_generator::IdGenerator;
use crate::utils::money::round2;
use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SellError {
    #[error("Sell at least one token")]
    ZeroTokens,
    #[error("Please setup your UPI ID before selling")]
    UpiNotConfigured,
    #[error("Not enough tokens (requested {requested}, available {available})")]
    InsufficientTokens { requested: u32, available: u32 },
    #[error("Minimum sell amount is {minimum}, got {amount}")]
    BelowMinimum { amount: Decimal, minimum: Decimal },
}

#[derive(Debug, Clone)]
pub struct SellOutcome {
    pub seller: UserRecord,
    pub amount: Decimal,
    pub transaction: Transaction,
}

/// Cash value of `tokens`, checked against the seller's holdings and UPI setup.
pub fn quote_sell(tokens: u32, token_balance: u32, upi: Option<&UpiConfig>) -> Result<Decimal, SellError> {
    if tokens == 0 {
        return Err(SellError::ZeroTokens);
    }
    if !upi.is_some_and(|u| u.is_active) {
        return Err(SellError::UpiNotConfigured);
    }
    if token_balance < tokens {
        return Err(SellError::InsufficientTokens {
            requested: tokens,
            available: token_balance,
        });
    }

    let amount = round2(Decimal::from(tokens) * TOKEN_CONVERSION_RATE);
    if amount < MIN_SELL_AMOUNT {
        return Err(SellError::BelowMinimum {
            amount,
            minimum: MIN_SELL_AMOUNT,
        });
    }
    Ok(amount)
}

pub fn complete_sell(
    transaction_ids: &dyn IdGenerator,
    seller: &UserRecord,
    tokens: u32,
    upi: Option<&UpiConfig>,
) -> Result<SellOutcome, SellError> {
    let amount = quote_sell(tokens, seller.token_balance, upi)?;
    let now = Utc::now();

    let mut updated = seller.clone();
    updated.token_balance -= tokens;
    updated.balance = updated.balance.saturating_add(amount);

    let mut transaction = Transaction::completed(transaction_ids.next_id(), TransactionType::Sell, amount, now);
    transaction.tokens = Some(tokens);
    transaction.upi_id = upi.map(|u| u.upi_id.clone());
    transaction.reference_id = Some(format!("SELL{}", now.timestamp_millis()));
    transaction.description = Some(format!("Sold {tokens} tokens"));

    Ok(SellOutcome {
        seller: updated,
        amount,
        transaction,
    })
}
