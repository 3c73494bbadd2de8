use cashout_core::AppState;
use cashout_primitives::models::app_config::AppConfig;
use cashout_primitives::models::{BalanceSnapshot, WithdrawalForm, WithdrawalSettings};
use rust_decimal_macros::dec;
use secrecy::SecretString;
use std::sync::Arc;

pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: base_url.to_string(),
        api_token: SecretString::from("test_bearer_token"),
        http_timeout_secs: 5,
        withdrawal_settings: WithdrawalSettings {
            minimum_amount: dec!(50),
            maximum_amount: dec!(5000),
        },
        otp_resend_window_secs: 60,
    }
}

pub fn test_state(base_url: &str) -> Arc<AppState> {
    AppState::new(test_config(base_url)).expect("failed to build test app state")
}

#[allow(dead_code)]
pub fn test_form() -> WithdrawalForm {
    WithdrawalForm {
        amount: "100,50".to_string(),
        iban: "TR33 0006 1005 1978 6457 8413 26".to_string(),
        account_holder_name: "Ayşe Yılmaz".to_string(),
    }
}

#[allow(dead_code)]
pub fn test_snapshot() -> BalanceSnapshot {
    BalanceSnapshot {
        total_balance: dec!(250.00),
        withdrawable_balance: dec!(200.00),
        blocked_balance: dec!(50.00),
        remaining_withdrawal_limit: None,
    }
}
