use crate::models::enum_types::WithdrawalStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/v1/Withdrawals`. Built from an already-validated form:
/// the amount is normalized and the IBAN is space-stripped and upper-cased
/// before this struct exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWithdrawalRequest {
    pub amount: Decimal,
    pub iban: String,
    pub account_holder_name: String,
}

/// Body of `POST /api/v1/Withdrawals/{id}/verify-otp`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub otp_code: String,
}

/// Response shape shared by submit and verify-otp. `status` stays the raw
/// wire integer; the orchestrator decodes it so an unknown code can still be
/// resolved into a defined terminal state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResponse {
    pub withdrawal_id: Uuid,
    pub status: i32,
    pub amount: Decimal,
    #[serde(rename = "maskedIBAN")]
    pub masked_iban: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WithdrawalResponse {
    pub fn decoded_status(&self) -> Option<WithdrawalStatus> {
        WithdrawalStatus::from_wire(self.status)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResponse {
    pub commission_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn response_decodes_camel_case_payload() {
        let body = serde_json::json!({
            "withdrawalId": "7f8c6a36-9e3b-4a37-9c39-6f6f24dd0a11",
            "status": 2,
            "amount": 100.50,
            "maskedIBAN": "TR33**********8413 26",
            "message": null,
            "createdAt": "2024-04-02T10:15:30Z"
        });

        let resp: WithdrawalResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.amount, dec!(100.50));
        assert_eq!(
            resp.decoded_status(),
            Some(WithdrawalStatus::AwaitingOtpVerification)
        );
        assert!(resp.message.is_none());
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let req = CreateWithdrawalRequest {
            amount: dec!(250.00),
            iban: "TR330006100519786457841326".into(),
            account_holder_name: "Ayşe Yılmaz".into(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("accountHolderName").is_some());
        assert!(value.get("iban").is_some());
    }
}
