use crate::models::enum_types::WithdrawalStatus;
use crate::utility::{validate_holder_name, validate_iban};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Balances as of one validation pass. Fetched fresh before each pass and
/// never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub total_balance: Decimal,
    pub withdrawable_balance: Decimal,
    pub blocked_balance: Decimal,
    pub remaining_withdrawal_limit: Option<Decimal>,
}

/// Session-wide withdrawal limits. `Decimal::ZERO` means the limit is not
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalSettings {
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
}

impl WithdrawalSettings {
    pub fn unlimited() -> Self {
        Self {
            minimum_amount: Decimal::ZERO,
            maximum_amount: Decimal::ZERO,
        }
    }
}

/// What the user typed into the withdrawal form. The amount stays raw text
/// here; the amount validator owns its normalization.
#[derive(Debug, Clone, Validate)]
pub struct WithdrawalForm {
    pub amount: String,

    #[validate(custom(function = "validate_iban"))]
    pub iban: String,

    #[validate(custom(function = "validate_holder_name"))]
    pub account_holder_name: String,
}

/// A withdrawal request as accepted by the backend. `status` is the
/// authoritative discriminator; `id` is backend-assigned and joins OTP
/// verification and history lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub id: Uuid,
    pub amount: Decimal,
    pub iban: String,
    pub account_holder_name: String,
    pub status: WithdrawalStatus,
    pub masked_iban: Option<String>,
    pub created_at: DateTime<Utc>,
    pub message: Option<String>,
}
