use crate::utils::constants::REFERRAL_BASE_URL;
use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::get_user;
use crate::{extract_or_http_err_with_opt_msg, AppState};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[utoipa::path(
    tag = "User",
    security(
        ("bearer_token" = [])
    )
)]
#[get("/api/v1/users/info")]
pub async fn user_info(
    state: web::Data<AppState>,
    token: AccessToken
) -> impl Responder {
    let user = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");

    HttpResponse::Ok().json(CommonResponse::ok(UserResponse {
        referral_link: format!("{REFERRAL_BASE_URL}{}", user.referral_code),
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        referral_code: user.referral_code,
        balance: user.balance,
        token_balance: user.token_balance,
        is_newbie: user.is_newbie,
        newbie_reward_claimed: user.newbie_reward_claimed,
        created_at: user.created_at,
    }))
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub referral_code: String,
    pub referral_link: String,
    pub balance: Decimal,
    pub token_balance: u32,
    pub is_newbie: bool,
    pub newbie_reward_claimed: bool,
    pub created_at: DateTime<Utc>,
}
