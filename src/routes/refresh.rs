use crate::utils::jwt::{decode_token, generate_access_token, generate_refresh_token, REFRESH};
use crate::utils::response::CommonResponse;
use crate::utils::store::get_user;
use crate::{try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[utoipa::path(request_body = RefreshInput, tag="Authorization")]
#[post("/api/v1/auth/refresh")]
pub async fn refresh(state: web::Data<AppState>, input: web::Json<RefreshInput>) -> impl Responder {
    let Some(token_data) = decode_token(&input.refresh_token, &state.jwt_secret, REFRESH) else {
        return HttpResponse::Unauthorized().json(CommonResponse::error("Invalid refresh token"));
    };

    let user = try_or_http_err!(get_user(&state.cache, &token_data.claims.sub).await);
    let Some(user) = user else {
        return HttpResponse::Unauthorized().json(CommonResponse::error("Unauthorized user"));
    };

    let access_token = try_or_http_err!(generate_access_token(&user.id, &user.phone, &state.jwt_secret));
    let refresh_token = try_or_http_err!(generate_refresh_token(&user.id, &user.phone, &state.jwt_secret));

    HttpResponse::Ok().json(CommonResponse::ok(RefreshResponse {
        access_token,
        refresh_token,
        user_id: user.id,
    }))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshInput {
    refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    access_token: String,
    refresh_token: String,
    user_id: String,
}
