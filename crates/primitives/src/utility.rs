use validator::ValidationError;

pub const IBAN_LENGTH: usize = 26;
pub const IBAN_COUNTRY_PREFIX: &str = "TR";
pub const OTP_CODE_LENGTH: usize = 6;

/// Strip whitespace and upper-case, the form the backend expects.
pub fn normalize_iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub fn validate_iban(iban: &str) -> Result<(), ValidationError> {
    let normalized = normalize_iban(iban);

    if normalized.len() != IBAN_LENGTH {
        return Err(error("iban_length"));
    }

    if !normalized.starts_with(IBAN_COUNTRY_PREFIX) {
        return Err(error("iban_country"));
    }

    if !normalized[IBAN_COUNTRY_PREFIX.len()..]
        .chars()
        .all(|c| c.is_ascii_digit())
    {
        return Err(error("iban_characters"));
    }

    Ok(())
}

pub fn validate_holder_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("holder_name_blank"));
    }
    Ok(())
}

/// A one-time passcode is exactly 6 ASCII digits; anything else is rejected
/// locally without a network call.
pub fn is_otp_code(code: &str) -> bool {
    code.len() == OTP_CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

fn error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param("length".into(), &IBAN_LENGTH);
    err.add_param("country_prefix".into(), &IBAN_COUNTRY_PREFIX);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_iban_with_spaces_and_lowercase() {
        assert!(validate_iban("tr33 0006 1005 1978 6457 8413 26").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(validate_iban("TR330006100519786457841").is_err());
    }

    #[test]
    fn rejects_foreign_country_prefix() {
        assert!(validate_iban("DE330006100519786457841326").is_err());
    }

    #[test]
    fn rejects_letters_after_the_prefix() {
        assert!(validate_iban("TR33000610051978645784132X").is_err());
    }

    #[test]
    fn otp_code_must_be_exactly_six_digits() {
        assert!(is_otp_code("123456"));
        assert!(!is_otp_code("12345"));
        assert!(!is_otp_code("1234567"));
        assert!(!is_otp_code("12a456"));
        assert!(!is_otp_code(""));
    }

    #[test]
    fn holder_name_must_not_be_blank() {
        assert!(validate_holder_name("Ayşe Yılmaz").is_ok());
        assert!(validate_holder_name("   ").is_err());
    }
}
