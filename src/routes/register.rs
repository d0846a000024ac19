use crate::structs::user_structs::UserRecord;
use crate::utils::id_generator::IdGenerator;
use crate::utils::jwt::{generate_access_token, generate_refresh_token};
use crate::utils::referral_code::{generate_referral_code, normalize_referral_code};
use crate::utils::response::CommonResponse;
use crate::utils::store::{find_user_by_referral_code, insert_user, reserve_referral_code};
use crate::utils::validators::{validate_phone, validate_referral_code};
use crate::{try_or_http_err, AppState};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const CODE_ATTEMPTS: usize = 5;

#[utoipa::path(
    request_body = RegisterInput,
    tag="Authorization"
)]
#[post("/api/v1/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    input: web::Json<RegisterInput>,
) -> impl Responder {
    let input = input.into_inner();

    if input.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(CommonResponse::error("Name is required"));
    }
    if !validate_phone(&input.phone) {
        return HttpResponse::BadRequest().json(CommonResponse::error("Invalid phone number"));
    }

    let referred_by = match input.referral_code.as_deref() {
        Some(code) => {
            if !validate_referral_code(code) {
                return HttpResponse::BadRequest().json(CommonResponse::error("Invalid referral code"));
            }
            let code = normalize_referral_code(code);
            match try_or_http_err!(find_user_by_referral_code(&state.cache, &code).await) {
                Some(referrer) => Some(referrer.id),
                None => {
                    return HttpResponse::BadRequest().json(CommonResponse::error("Unknown referral code"))
                }
            }
        }
        None => None,
    };

    let mut user = UserRecord::new(
        state.ids.users.next_id(),
        input.name.trim().to_string(),
        input.email.trim().to_string(),
        input.phone.trim().to_string(),
        generate_referral_code(),
        referred_by,
    );

    let mut reserved = false;
    for _ in 0..CODE_ATTEMPTS {
        if try_or_http_err!(reserve_referral_code(&state.cache, &user).await) {
            reserved = true;
            break;
        }
        user.referral_code = generate_referral_code();
    }
    if !reserved {
        return HttpResponse::InternalServerError().json(CommonResponse::error("Can't allocate referral code"));
    }

    try_or_http_err!(insert_user(&state.cache, &user).await);
    tracing::info!(user_id = %user.id, referred_by = ?user.referred_by, "user registered");

    let access_token = try_or_http_err!(generate_access_token(&user.id, &user.phone, &state.jwt_secret));
    let refresh_token = try_or_http_err!(generate_refresh_token(&user.id, &user.phone, &state.jwt_secret));

    HttpResponse::Created().json(CommonResponse::ok(RegisterResponse {
        access_token,
        refresh_token,
        user_id: user.id,
        referral_code: user.referral_code,
    }))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterInput {
    name: String,
    email: String,
    phone: String,
    referral_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    access_token: String,
    refresh_token: String,
    user_id: String,
    referral_code: String,
}
