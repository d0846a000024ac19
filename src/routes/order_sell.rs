use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::sell::complete_sell;
use crate::utils::store::{get_upi, get_user, save_user_with_transaction};
use crate::{extract_or_http_err_with_opt_msg, reject_or_http_err, try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[utoipa::path(
    request_body = OrderSellInput,
    tag = "Market",
    security(
        ("bearer_token" = [])
    )
)]
#[post("/api/v1/order/sell")]
pub async fn order_sell(
    state: web::Data<AppState>,
    input: web::Json<OrderSellInput>,
    token: AccessToken,
) -> impl Responder {
    let seller = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");
    let upi = try_or_http_err!(get_upi(&state.cache, &seller.id).await);

    let outcome = reject_or_http_err!(complete_sell(&state.ids.transactions, &seller, input.tokens, upi.as_ref()));
    try_or_http_err!(save_user_with_transaction(&state.cache, &outcome.seller, &outcome.transaction).await);
    tracing::info!(user_id = %seller.id, tokens = input.tokens, amount = %outcome.amount, "tokens sold");

    HttpResponse::Ok().json(CommonResponse::ok(SellResponse {
        amount: outcome.amount,
        balance: outcome.seller.balance,
        token_balance: outcome.seller.token_balance,
        upi_id: outcome.transaction.upi_id,
    }))
}

#[derive(Deserialize, ToSchema)]
pub struct OrderSellInput {
    tokens: u32,
}

#[derive(Serialize)]
pub struct SellResponse {
    amount: Decimal,
    balance: Decimal,
    token_balance: u32,
    upi_id: Option<String>,
}
