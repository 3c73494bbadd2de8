use serde::Deserialize;

/// `GET /api/v1/users/me/bank-details`, used to prefill the withdrawal form.
/// Fetch failure is non-fatal; the user just types the details by hand.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub iban: String,
    pub account_holder_name: String,
}
