use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub referral_code: String,
    /// Id of the user whose referral code was used at registration.
    pub referred_by: Option<String>,
    pub balance: Decimal,
    pub token_balance: u32,
    pub is_newbie: bool,
    pub newbie_reward_claimed: bool,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(
        id: String,
        name: String,
        email: String,
        phone: String,
        referral_code: String,
        referred_by: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            referral_code,
            referred_by,
            balance: Decimal::ZERO,
            token_balance: 0,
            is_newbie: true,
            newbie_reward_claimed: false,
            created_at: Utc::now(),
        }
    }

    /// Sets both newbie flags; the reward can never be granted again afterwards.
    pub fn claim_newbie_reward(&mut self) {
        self.newbie_reward_claimed = true;
        self.is_newbie = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpiApp {
    Gpay,
    Phonepe,
    Paytm,
    Bhim,
    Other,
}

impl UpiApp {
    pub fn display_name(&self) -> &'static str {
        match self {
            UpiApp::Gpay => "Google Pay",
            UpiApp::Phonepe => "PhonePe",
            UpiApp::Paytm => "Paytm",
            UpiApp::Bhim => "BHIM UPI",
            UpiApp::Other => "Other UPI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpiConfig {
    pub app: UpiApp,
    pub upi_id: String,
    pub is_active: bool,
}
