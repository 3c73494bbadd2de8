use crate::models::withdrawal::WithdrawalSettings;
use eyre::Report;
use rust_decimal::Decimal;
use secrecy::SecretString;
use std::env;

pub const DEFAULT_OTP_RESEND_WINDOW_SECS: u32 = 60;

/// Process-wide configuration, constructed once at startup and passed by
/// reference into the services. No ambient lookups happen past this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,

    pub api_token: SecretString,

    pub http_timeout_secs: u64,

    pub withdrawal_settings: WithdrawalSettings,

    pub otp_resend_window_secs: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),

            api_token: env::var("API_BEARER_TOKEN")
                .map(SecretString::from)
                .map_err(|_| eyre::eyre!("API_BEARER_TOKEN must be set"))?,

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,

            withdrawal_settings: WithdrawalSettings {
                minimum_amount: parse_limit("WITHDRAWAL_MIN_AMOUNT")?,
                maximum_amount: parse_limit("WITHDRAWAL_MAX_AMOUNT")?,
            },

            otp_resend_window_secs: env::var("OTP_RESEND_WINDOW_SECS")
                .unwrap_or_else(|_| DEFAULT_OTP_RESEND_WINDOW_SECS.to_string())
                .parse()?,
        })
    }
}

fn parse_limit(var: &str) -> Result<Decimal, Report> {
    let raw = env::var(var).unwrap_or_else(|_| "0".into());
    raw.parse()
        .map_err(|e| eyre::eyre!("Invalid {}: {}", var, e))
}
