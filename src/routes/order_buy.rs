use crate::utils::commission_calculator::CommissionBreakdown;
use crate::utils::jwt::AccessToken;
use crate::utils::process_commission::Commission;
use crate::utils::purchase::complete_purchase;
use crate::utils::response::CommonResponse;
use crate::utils::store::{get_order, get_user, load_referrers, save_purchase};
use crate::{extract_or_http_err_with_opt_msg, reject_or_http_err, try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[utoipa::path(
    request_body = OrderBuyInput,
    tag = "Market",
    security(
        ("bearer_token" = [])
    )
)]
#[post("/api/v1/order/buy")]
pub async fn order_buy(
    state: web::Data<AppState>,
    input: web::Json<OrderBuyInput>,
    token: AccessToken,
) -> impl Responder {
    let input = input.into_inner();
    let buyer = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");
    let order = extract_or_http_err_with_opt_msg!(get_order(&state.cache, &input.order_id).await, "No order with this ID");
    let (level1, level2) = try_or_http_err!(load_referrers(&state.cache, &buyer).await);

    let outcome = reject_or_http_err!(complete_purchase(
        &state.ids.commissions,
        &state.ids.transactions,
        &buyer,
        &order,
        level1.as_ref(),
        level2.as_ref(),
    ));
    try_or_http_err!(save_purchase(&state.cache, &outcome).await);

    tracing::info!(
        order_id = %order.id,
        buyer_id = %buyer.id,
        total_price = %order.total_price,
        final_price = %outcome.final_price,
        commission_total = %outcome.breakdown.total,
        entries = outcome.commissions.len(),
        "order bought"
    );

    HttpResponse::Ok().json(CommonResponse::ok(BuyOrderResponse {
        final_price: outcome.final_price,
        discount: outcome.discount,
        balance: outcome.buyer.balance,
        token_balance: outcome.buyer.token_balance,
        commission: outcome.breakdown,
        commissions: outcome.commissions,
    }))
}

#[derive(Deserialize, ToSchema)]
pub struct OrderBuyInput {
    order_id: String,
}

#[derive(Serialize)]
pub struct BuyOrderResponse {
    final_price: Decimal,
    discount: Decimal,
    balance: Decimal,
    token_balance: u32,
    commission: CommissionBreakdown,
    commissions: Vec<Commission>,
}
