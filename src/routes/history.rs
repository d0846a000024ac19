use crate::structs::order_structs::HistoryKind;
use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::history as load_history;
use crate::{try_or_http_err, AppState};
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

#[utoipa::path(
    params(HistoryQuery),
    tag = "User",
    security(
        ("bearer_token" = [])
    )
)]
#[get("/api/v1/history")]
pub async fn history(
    state: web::Data<AppState>,
    query: web::Query<HistoryQuery>,
    token: AccessToken,
) -> impl Responder {
    let transactions = try_or_http_err!(load_history(&state.cache, query.kind, token.user_id()).await);
    HttpResponse::Ok().json(CommonResponse::ok(transactions))
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    kind: HistoryKind,
}
