use rust_decimal::Decimal;
use std::fmt;

/// Rejection produced by the amount validator before anything touches the
/// network. Variants carry the violated limit so messages can interpolate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    Invalid,
    BelowMinimum(Decimal),
    AboveMaximum(Decimal),
    DailyLimitExceeded(Decimal),
    InsufficientBalance,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Invalid => write!(f, "Enter a valid amount"),
            AmountError::BelowMinimum(min) => {
                write!(f, "Minimum withdrawal amount is {:.2}", min)
            }
            AmountError::AboveMaximum(max) => {
                write!(f, "Maximum withdrawal amount is {:.2}", max)
            }
            AmountError::DailyLimitExceeded(limit) => {
                write!(f, "Remaining daily withdrawal limit is {:.2}", limit)
            }
            AmountError::InsufficientBalance => write!(f, "Insufficient withdrawable balance"),
        }
    }
}

impl std::error::Error for AmountError {}

#[derive(Debug)]
pub enum ApiError {
    Amount(AmountError),
    Validation(validator::ValidationErrors),
    OtpFormat,
    State(String),
    Transport(String),
    InvalidResponse(String),
    Api { status: u16, message: String },
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Amount(e) => write!(f, "{}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::OtpFormat => write!(f, "Verification code must be 6 digits"),
            ApiError::State(e) => write!(f, "Invalid operation: {}", e),
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::InvalidResponse(e) => write!(f, "Invalid response: {}", e),
            ApiError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Amount(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AmountError> for ApiError {
    fn from(err: AmountError) -> Self {
        ApiError::Amount(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
