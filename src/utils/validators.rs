use crate::utils::constants::MAX_AMOUNT;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    static ref UPI_ID: Regex = Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z]{2,}$").unwrap();
    static ref REFERRAL_CODE: Regex = Regex::new(r"^[A-Z0-9]{6,12}$").unwrap();
    static ref PHONE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
}

/// `localpart@provider`, checked after trimming.
pub fn validate_upi_id(upi_id: &str) -> bool {
    UPI_ID.is_match(upi_id.trim())
}

/// Positive, at most `MAX_AMOUNT`, with at most two decimal places.
pub fn validate_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= MAX_AMOUNT && amount.normalize().scale() <= 2
}

/// 6 to 12 letters or digits, case-insensitive.
pub fn validate_referral_code(code: &str) -> bool {
    REFERRAL_CODE.is_match(&code.trim().to_ascii_uppercase())
}

/// Indian 10-digit mobile number.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_valid_upi_ids() {
        for id in [
            "rahul@okaxis",
            "9876543210@paytm",
            "rahul.sharma@gpay",
            "rahul-sharma@upi",
            "rahul_sharma@sbi",
            "user123@okhdfcbank",
            "RahulSharma@YESB",
            "test@ok",
            "  padded@okaxis  ",
        ] {
            assert!(validate_upi_id(id), "{id}");
        }
    }

    #[test]
    fn rejects_invalid_upi_ids() {
        for id in [
            "",
            "rahulokaxis",
            "@okaxis",
            "rahul@",
            "rahul@123",
            "rahul@a",
            "ra hul@okaxis",
            "rahul@ok@axis",
            "rahul#1@okaxis",
        ] {
            assert!(!validate_upi_id(id), "{id}");
        }
    }

    #[test]
    fn amounts() {
        assert!(validate_amount(dec!(100)));
        assert!(validate_amount(dec!(99.99)));
        assert!(validate_amount(dec!(5.10)));
        assert!(validate_amount(dec!(5.100)));
        assert!(!validate_amount(dec!(0)));
        assert!(!validate_amount(dec!(-1)));
        assert!(!validate_amount(dec!(1.005)));
    }

    #[test]
    fn amounts_are_capped() {
        assert!(validate_amount(MAX_AMOUNT));
        assert!(!validate_amount(MAX_AMOUNT + dec!(0.01)));
        assert!(!validate_amount(Decimal::MAX));
        assert!(!validate_amount(dec!(30000000000000000000000000000)));
    }

    #[test]
    fn referral_codes() {
        assert!(validate_referral_code("ABC123"));
        assert!(validate_referral_code("abc123xyz"));
        assert!(validate_referral_code(" REF2024XYZ "));
        assert!(!validate_referral_code("AB12"));
        assert!(!validate_referral_code("ABCDEFGHIJKLM"));
        assert!(!validate_referral_code("ABC-123"));
        assert!(!validate_referral_code("ÄBC1234"));
    }

    #[test]
    fn phones() {
        assert!(validate_phone("9876543210"));
        assert!(validate_phone("6000000000"));
        assert!(!validate_phone("5876543210"));
        assert!(!validate_phone("987654321"));
        assert!(!validate_phone("98765432a0"));
        assert!(!validate_phone("+919876543210"));
        assert!(!validate_phone("९८७६५४३२१०"));
    }
}
