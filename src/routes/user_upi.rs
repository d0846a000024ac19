use crate::structs::user_structs::{UpiApp, UpiConfig};
use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::save_upi;
use crate::utils::validators::validate_upi_id;
use crate::{try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

#[utoipa::path(
    request_body = UpiInput,
    tag = "User",
    security(
        ("bearer_token" = [])
    )
)]
#[post("/api/v1/users/upi")]
pub async fn user_upi(
    state: web::Data<AppState>,
    input: web::Json<UpiInput>,
    token: AccessToken,
) -> impl Responder {
    let input = input.into_inner();
    if !validate_upi_id(&input.upi_id) {
        return HttpResponse::BadRequest().json(CommonResponse::error("Invalid UPI ID"));
    }

    let config = UpiConfig {
        app: input.app,
        upi_id: input.upi_id.trim().to_string(),
        is_active: input.is_active.unwrap_or(true),
    };
    try_or_http_err!(save_upi(&state.cache, token.user_id(), &config).await);
    tracing::info!(user_id = token.user_id(), app = config.app.display_name(), "UPI saved");

    HttpResponse::Ok().json(CommonResponse::ok(config))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpiInput {
    app: UpiApp,
    upi_id: String,
    is_active: Option<bool>,
}
