use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A seller's listing of tokens offered at a fixed total price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BuyOrder {
    pub id: String,
    pub token_count: u32,
    pub price_per_token: Decimal,
    pub total_price: Decimal,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    pub is_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
    Commission,
    Reward,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: String,
    pub tx_type: TransactionType,
    pub amount: Decimal,
    pub tokens: Option<u32>,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub upi_id: Option<String>,
    pub reference_id: Option<String>,
    pub description: Option<String>,
    pub order_id: Option<String>,
}

impl Transaction {
    pub fn completed(id: String, tx_type: TransactionType, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            tx_type,
            amount,
            tokens: None,
            status: TransactionStatus::Completed,
            timestamp,
            upi_id: None,
            reference_id: None,
            description: None,
            order_id: None,
        }
    }
}

/// Which history list a transaction is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Buy,
    Sell,
    Wallet,
}

impl HistoryKind {
    pub fn for_transaction(tx_type: TransactionType) -> Self {
        match tx_type {
            TransactionType::Buy => HistoryKind::Buy,
            TransactionType::Sell => HistoryKind::Sell,
            TransactionType::Commission | TransactionType::Reward | TransactionType::Transfer => {
                HistoryKind::Wallet
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::Buy => "buy",
            HistoryKind::Sell => "sell",
            HistoryKind::Wallet => "wallet",
        }
    }
}
