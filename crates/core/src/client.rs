use cashout_primitives::error::ApiError;
use cashout_primitives::models::dtos::{
    BankDetails, CommissionResponse, CreateWithdrawalRequest, VerifyOtpRequest, WithdrawalDetail,
    WithdrawalHistoryItem, WithdrawalResponse,
};
use reqwest::{Client, Response, Url};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

const WITHDRAWALS_PATH: &str = "api/v1/Withdrawals";
const BANK_DETAILS_PATH: &str = "api/v1/users/me/bank-details";

/// Thin client over the withdrawals REST surface. Owns nothing but the
/// connection handle, the base URL, and the bearer token; every response is
/// normalized into [`ApiError`] so callers never branch on reqwest internals.
#[derive(Clone)]
pub struct WithdrawalsClient {
    http: Client,
    base_url: Url,
    bearer_token: SecretString,
}

impl WithdrawalsClient {
    pub fn new(http: Client, base_url: &str, bearer_token: SecretString) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid API base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            bearer_token,
        })
    }

    pub async fn create_withdrawal(
        &self,
        payload: &CreateWithdrawalRequest,
    ) -> Result<WithdrawalResponse, ApiError> {
        let url = self.endpoint(WITHDRAWALS_PATH);

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .json(payload)
            .send()
            .await?;

        self.read_json(resp, "create_withdrawal").await
    }

    pub async fn verify_otp(
        &self,
        withdrawal_id: Uuid,
        payload: &VerifyOtpRequest,
    ) -> Result<WithdrawalResponse, ApiError> {
        let url = self.endpoint(&format!("{WITHDRAWALS_PATH}/{withdrawal_id}/verify-otp"));

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .json(payload)
            .send()
            .await?;

        self.read_json(resp, "verify_otp").await
    }

    pub async fn list_withdrawals(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<WithdrawalHistoryItem>, ApiError> {
        let mut url = self.endpoint(WITHDRAWALS_PATH);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;

        self.read_json(resp, "list_withdrawals").await
    }

    pub async fn get_withdrawal(&self, withdrawal_id: Uuid) -> Result<WithdrawalDetail, ApiError> {
        let url = self.endpoint(&format!("{WITHDRAWALS_PATH}/{withdrawal_id}"));

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;

        self.read_json(resp, "get_withdrawal").await
    }

    pub async fn get_commission(&self, amount: Decimal) -> Result<CommissionResponse, ApiError> {
        let mut url = self.endpoint(&format!("{WITHDRAWALS_PATH}/commission"));
        url.query_pairs_mut()
            .append_pair("amount", &amount.to_string());

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;

        self.read_json(resp, "get_commission").await
    }

    pub async fn get_bank_details(&self) -> Result<BankDetails, ApiError> {
        let url = self.endpoint(BANK_DETAILS_PATH);

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;

        self.read_json(resp, "get_bank_details").await
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        resp: Response,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        let body_text = resp.text().await?;

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                operation,
                response = %truncated(&body_text),
                "withdrawals API request failed"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_message(&body_text),
            });
        }

        serde_json::from_str(&body_text).map_err(|e| {
            warn!(
                error = %e,
                operation,
                response = %truncated(&body_text),
                "invalid JSON from withdrawals API"
            );
            ApiError::InvalidResponse(format!("{operation}: {e}"))
        })
    }
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| "Request failed".to_string())
}

fn truncated(body: &str) -> String {
    body.chars().take(200).collect()
}
