use crate::structs::user_structs::UserRecord;
use crate::utils::commission_calculator::{calculate_commission, CommissionBreakdown};
use crate::utils::constants::MIN_PAYOUT;
use crate::utils::id_generator::IdGenerator;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Position of the earning referrer relative to the buyer. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommissionLevel {
    One,
    Two,
}

impl CommissionLevel {
    pub fn as_u8(&self) -> u8 {
        match self {
            CommissionLevel::One => 1,
            CommissionLevel::Two => 2,
        }
    }
}

impl Serialize for CommissionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for CommissionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(CommissionLevel::One),
            2 => Ok(CommissionLevel::Two),
            other => Err(serde::de::Error::custom(format!("invalid commission level {other}"))),
        }
    }
}

/// Append-only ledger entry paid to one referrer for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Commission {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    #[schema(value_type = u8)]
    pub level: CommissionLevel,
    pub amount: Decimal,
    pub percentage: Decimal,
    pub order_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessCommissionResult {
    /// Level 1 before level 2; levels below the payout threshold are absent.
    pub commissions: Vec<Commission>,
    pub breakdown: CommissionBreakdown,
}

pub fn process_commission(
    ids: &dyn IdGenerator,
    order_id: &str,
    order_amount: Decimal,
    buyer_id: &str,
    level1_user: Option<&UserRecord>,
    level2_user: Option<&UserRecord>,
) -> ProcessCommissionResult {
    let breakdown = calculate_commission(
        order_amount,
        level1_user.map(|u| u.id.as_str()),
        level2_user.map(|u| u.id.as_str()),
    );

    let now = Utc::now();
    let levels = [
        (level1_user, CommissionLevel::One, breakdown.level1_amount, breakdown.level1_percent),
        (level2_user, CommissionLevel::Two, breakdown.level2_amount, breakdown.level2_percent),
    ];

    let commissions = levels
        .into_iter()
        .filter_map(|(user, level, amount, percentage)| {
            let user = user?;
            if amount < MIN_PAYOUT {
                tracing::debug!(
                    order_id,
                    to_user_id = %user.id,
                    level = level.as_u8(),
                    %amount,
                    "commission below minimum payout, dropped"
                );
                return None;
            }
            Some(Commission {
                id: ids.next_id(),
                from_user_id: buyer_id.to_owned(),
                to_user_id: user.id.clone(),
                level,
                amount,
                percentage,
                order_id: order_id.to_owned(),
                created_at: now,
            })
        })
        .collect();

    ProcessCommissionResult {
        commissions,
        breakdown,
    }
}
