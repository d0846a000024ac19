use crate::utils::deposit::complete_deposit;
use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::{get_user, save_user_with_transaction};
use crate::{extract_or_http_err_with_opt_msg, reject_or_http_err, try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[utoipa::path(
    request_body = DepositInput,
    tag = "User",
    security(
        ("bearer_token" = [])
    )
)]
#[post("/api/v1/users/deposit")]
pub async fn user_deposit(
    state: web::Data<AppState>,
    input: web::Json<DepositInput>,
    token: AccessToken,
) -> impl Responder {
    let user = extract_or_http_err_with_opt_msg!(get_user(&state.cache, token.user_id()).await, "No user");
    let outcome = reject_or_http_err!(complete_deposit(&state.ids.transactions, &user, input.amount));
    try_or_http_err!(save_user_with_transaction(&state.cache, &outcome.user, &outcome.transaction).await);

    HttpResponse::Ok().json(CommonResponse::ok(DepositResponse {
        balance: outcome.user.balance,
    }))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositInput {
    amount: Decimal,
}

#[derive(Serialize)]
pub struct DepositResponse {
    balance: Decimal,
}
