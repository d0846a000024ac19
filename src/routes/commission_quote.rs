use crate::utils::commission_calculator::{calculate_commission, CommissionBreakdown};
use crate::utils::constants::NEWBIE_REWARD_AMOUNT;
use crate::utils::jwt::AccessToken;
use crate::utils::newbie_discount::apply_newbie_discount;
use crate::utils::response::CommonResponse;
use crate::utils::store::{get_user, load_referrers};
use crate::utils::validators::validate_amount;
use crate::{extract_or_http_err_with_opt_msg, try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[utoipa::path(
    request_body = QuoteInput,
    tag = "Commission",
    security(
        ("bearer_token" = [])
    )
)]
#[post("/api/v1/commission/quote")]
pub async fn commission_quote(
    state: web::Data<AppState>,
    input: web::Json<QuoteInput>,
    token: AccessToken,
) -> impl Responder {
    if !validate_amount(input.order_amount) {
        return HttpResponse::BadRequest().json(CommonResponse::error("Amount must be positive with at most 2 decimals"));
    }

    let buyer = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");
    let (level1, level2) = try_or_http_err!(load_referrers(&state.cache, &buyer).await);

    let breakdown = calculate_commission(
        input.order_amount,
        level1.as_ref().map(|u| u.id.as_str()),
        level2.as_ref().map(|u| u.id.as_str()),
    );
    let final_price = apply_newbie_discount(
        input.order_amount,
        NEWBIE_REWARD_AMOUNT,
        buyer.is_newbie,
        buyer.newbie_reward_claimed,
    );

    HttpResponse::Ok().json(CommonResponse::ok(QuoteResponse {
        order_amount: input.order_amount,
        final_price,
        discount: input.order_amount - final_price,
        breakdown,
    }))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteInput {
    order_amount: Decimal,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    order_amount: Decimal,
    final_price: Decimal,
    discount: Decimal,
    breakdown: CommissionBreakdown,
}
