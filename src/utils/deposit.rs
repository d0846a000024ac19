use crate::structs::order_structs::{Transaction, TransactionType};
use crate::structs::user_structs::UserRecord;
use crate::utils::constants::MAX_AMOUNT;
use crate::utils::id_generator::IdGenerator;
use crate::utils::validators::validate_amount;
use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepositError {
    #[error("Amount must be positive, at most {max}, with at most 2 decimals")]
    InvalidAmount { max: Decimal },
    #[error("Balance limit reached")]
    BalanceOverflow,
}

#[derive(Debug, Clone)]
pub struct DepositOutcome {
    pub user: UserRecord,
    pub transaction: Transaction,
}

pub fn complete_deposit(
    transaction_ids: &dyn IdGenerator,
    user: &UserRecord,
    amount: Decimal,
) -> Result<DepositOutcome, DepositError> {
    if !validate_amount(amount) {
        return Err(DepositError::InvalidAmount { max: MAX_AMOUNT });
    }

    let mut updated = user.clone();
    updated.balance = user
        .balance
        .checked_add(amount)
        .ok_or(DepositError::BalanceOverflow)?;

    let mut transaction = Transaction::completed(transaction_ids.next_id(), TransactionType::Transfer, amount, Utc::now());
    transaction.description = Some("Wallet top-up".into());

    Ok(DepositOutcome {
        user: updated,
        transaction,
    })
}
