use crate::utils::constants::REFERRAL_CODE_LEN;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Uppercase alphanumeric code handed out at registration.
pub fn generate_referral_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(REFERRAL_CODE_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect()
}

pub fn normalize_referral_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
