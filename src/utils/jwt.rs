use crate::AppState;
use actix_web::{dev::Payload, error::ErrorUnauthorized, web, Error, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

pub const ACCESS: &str = "access";
pub const REFRESH: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
    pub phone: String,
    pub token_type: String,
}

fn generate_token(
    user_id: &str,
    phone: &str,
    secret: &str,
    token_type: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_owned(),
        iat: now.timestamp() as usize,
        exp: (now + ttl).timestamp() as usize,
        phone: phone.to_owned(),
        token_type: token_type.to_owned(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
}

pub fn generate_access_token(user_id: &str, phone: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    generate_token(user_id, phone, secret, ACCESS, Duration::hours(1))
}

pub fn generate_refresh_token(user_id: &str, phone: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    generate_token(user_id, phone, secret, REFRESH, Duration::days(30))
}

/// Decodes `token` and checks that it is of `token_type`.
pub fn decode_token(token: &str, secret: &str, token_type: &str) -> Option<TokenData<Claims>> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()?;
    (data.claims.token_type == token_type).then_some(data)
}

/// Bearer access token from the `Authorization` header.
pub struct AccessToken(pub TokenData<Claims>);

impl AccessToken {
    pub fn user_id(&self) -> &str {
        &self.0.claims.sub
    }
}

impl FromRequest for AccessToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(ErrorUnauthorized("Unauthorized")));
        };

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));

        ready(
            token
                .and_then(|t| decode_token(t, &state.jwt_secret, ACCESS))
                .map(AccessToken)
                .ok_or_else(|| ErrorUnauthorized("Invalid access token")),
        )
    }
}
