use crate::utils::jwt::AccessToken;
use crate::utils::response::CommonResponse;
use crate::utils::store::{commissions_for, team_counts};
use crate::utils::team_stats::build_team_stats;
use crate::{try_or_http_err, AppState};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

#[utoipa::path(
    tag = "Team",
    security(
        ("bearer_token" = [])
    )
)]
#[get("/api/v1/team/stats")]
pub async fn team_stats(
    state: web::Data<AppState>,
    token: AccessToken,
) -> impl Responder {
    let user_id = token.user_id();
    let (level1_count, level2_count) = try_or_http_err!(team_counts(&state.cache, user_id).await);
    let commissions = try_or_http_err!(commissions_for(&state.cache, user_id).await);

    let stats = build_team_stats(&commissions, user_id, level1_count, level2_count, Utc::now().date_naive());
    HttpResponse::Ok().json(CommonResponse::ok(stats))
}
