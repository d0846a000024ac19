use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::commissions_for;
use crate::{try_or_http_err, AppState};
use actix_web::{get, web, HttpResponse, Responder};

/// Ledger entries earned by the caller, newest first.
#[utoipa::path(
    tag = "Team",
    security(
        ("bearer_token" = [])
    )
)]
#[get("/api/v1/team/commissions")]
pub async fn team_commissions(
    state: web::Data<AppState>,
    token: AccessToken,
) -> impl Responder {
    let commissions = try_or_http_err!(commissions_for(&state.cache, token.user_id()).await);
    HttpResponse::Ok().json(CommonResponse::ok(commissions))
}
