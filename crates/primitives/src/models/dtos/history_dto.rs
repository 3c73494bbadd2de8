use crate::models::enum_types::WithdrawalStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// One row of `GET /api/v1/Withdrawals`. Optional fields absent from the
/// payload mean "not applicable", never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalHistoryItem {
    pub id: Uuid,
    pub amount: Decimal,
    pub status: i32,
    pub status_description: Option<String>,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "maskedIBAN")]
    pub masked_iban: Option<String>,
    pub masked_phone: Option<String>,
    pub receiver_name: Option<String>,
    pub yandex_transaction_id: Option<String>,
    pub bank_transaction_ref_no: Option<String>,
    pub bank_payment_no: Option<String>,
    pub failure_reason: Option<String>,
}

impl WithdrawalHistoryItem {
    pub fn decoded_status(&self) -> Option<WithdrawalStatus> {
        WithdrawalStatus::from_wire(self.status)
    }
}

/// `GET /api/v1/Withdrawals/{id}` adds the commission and the external
/// payment reference to the summary row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDetail {
    pub id: Uuid,
    pub amount: Decimal,
    pub status: i32,
    pub status_description: Option<String>,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "maskedIBAN")]
    pub masked_iban: Option<String>,
    pub receiver_name: Option<String>,
    pub commission: Option<Decimal>,
    pub payment_reference_id: Option<String>,
    pub failure_reason: Option<String>,
}

impl WithdrawalDetail {
    pub fn decoded_status(&self) -> Option<WithdrawalStatus> {
        WithdrawalStatus::from_wire(self.status)
    }
}
