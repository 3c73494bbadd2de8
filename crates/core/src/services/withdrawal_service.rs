use crate::app_state::AppState;
use crate::services::amount_validator::AmountValidator;
use crate::services::otp_service::OtpChallenge;
use cashout_primitives::error::ApiError;
use cashout_primitives::models::dtos::{
    BankDetails, CreateWithdrawalRequest, VerifyOtpRequest, WithdrawalResponse,
};
use cashout_primitives::models::{
    BalanceSnapshot, WithdrawalForm, WithdrawalRequest, WithdrawalStatus,
};
use cashout_primitives::utility::{is_otp_code, normalize_iban};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

const GENERIC_FAILURE: &str = "Withdrawal could not be completed. Please try again.";
const UNKNOWN_STATUS_FAILURE: &str = "Withdrawal returned an unknown status";
const DEFAULT_FAILURE: &str = "Withdrawal failed";
const OTP_REJECTED: &str = "Invalid code, try again";

/// Where one withdrawal attempt currently stands.
#[derive(Debug)]
pub enum FlowState {
    Idle,
    Submitting,
    AwaitingOtp {
        request: WithdrawalRequest,
        challenge: OtpChallenge,
    },
    VerifyingOtp {
        request: WithdrawalRequest,
        challenge: OtpChallenge,
    },
    Completed(FlowOutcome),
}

/// Terminal result of one attempt. `Pending` resolves to the success screen
/// like `MoneySent`; the transfer just has not settled yet.
#[derive(Debug, Clone)]
pub enum FlowOutcome {
    MoneySent(WithdrawalRequest),
    Pending(WithdrawalRequest),
    Failed { message: String },
}

/// What the caller renders after `submit` or `verify_otp` resolves.
#[derive(Debug, Clone)]
pub enum FlowEvent {
    Success(WithdrawalRequest),
    Pending(WithdrawalRequest),
    OtpRequired { withdrawal_id: Uuid },
    OtpRejected { message: String },
    Failed { message: String },
}

/// The withdrawal state machine. One instance drives one attempt at a time:
/// submit, optional OTP step-up, terminal outcome. A second submit while a
/// request is non-terminal is rejected locally.
///
/// Business failures (`Failed`, `FailedOtp`) and transport failures both
/// surface as [`FlowEvent`]s, so callers branch on one discriminated result.
/// `Err` is reserved for local rejections that never reached the network.
pub struct WithdrawalFlow {
    app: Arc<AppState>,
    state: FlowState,
}

impl WithdrawalFlow {
    pub fn new(app: Arc<AppState>) -> Self {
        Self {
            app,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// True while a request is non-terminal.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.state,
            FlowState::Submitting | FlowState::AwaitingOtp { .. } | FlowState::VerifyingOtp { .. }
        )
    }

    pub fn challenge(&self) -> Option<&OtpChallenge> {
        match &self.state {
            FlowState::AwaitingOtp { challenge, .. }
            | FlowState::VerifyingOtp { challenge, .. } => Some(challenge),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&FlowOutcome> {
        match &self.state {
            FlowState::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Validate the form locally, then submit. Local rejections come back as
    /// `Err` and leave the state untouched; everything after the request hits
    /// the wire resolves into a `FlowEvent`.
    pub async fn submit(
        &mut self,
        form: &WithdrawalForm,
        snapshot: &BalanceSnapshot,
    ) -> Result<FlowEvent, ApiError> {
        if self.is_in_flight() {
            return Err(ApiError::State("a withdrawal is already in progress".into()));
        }

        let amount = AmountValidator::validate(
            &form.amount,
            snapshot,
            &self.app.config.withdrawal_settings,
        )?;
        form.validate()?;

        let payload = CreateWithdrawalRequest {
            amount,
            iban: normalize_iban(&form.iban),
            account_holder_name: form.account_holder_name.trim().to_string(),
        };

        self.state = FlowState::Submitting;
        info!(amount = %payload.amount, "submitting withdrawal");

        let resp = match self.app.api.create_withdrawal(&payload).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "withdrawal submit did not resolve to a status");
                return Ok(self.fail(GENERIC_FAILURE.to_string()));
            }
        };

        Ok(self.apply_submit_response(payload, resp))
    }

    /// Forward a user-entered code for the challenge currently awaiting
    /// verification. The code must be exactly 6 digits; anything else is
    /// rejected locally without a network call.
    pub async fn verify_otp(&mut self, code: &str) -> Result<FlowEvent, ApiError> {
        if !is_otp_code(code) {
            return Err(ApiError::OtpFormat);
        }

        let (request, mut challenge) = match &self.state {
            FlowState::AwaitingOtp { request, challenge } => {
                (request.clone(), challenge.clone())
            }
            FlowState::VerifyingOtp { .. } => {
                return Err(ApiError::State("verification already in progress".into()));
            }
            _ => {
                return Err(ApiError::State("no withdrawal awaiting verification".into()));
            }
        };

        challenge.record_code(code);
        let withdrawal_id = challenge.withdrawal_id();
        self.state = FlowState::VerifyingOtp {
            request: request.clone(),
            challenge: challenge.clone(),
        };

        let payload = VerifyOtpRequest {
            otp_code: code.to_string(),
        };

        let resp = match self.app.api.verify_otp(withdrawal_id, &payload).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, %withdrawal_id, "OTP verification did not resolve to a status");
                return Ok(self.fail(GENERIC_FAILURE.to_string()));
            }
        };

        Ok(self.apply_verify_response(request, challenge, resp))
    }

    /// Restart the resend window for the live challenge. The actual code
    /// delivery is the backend's side of the contract; locally this clears
    /// the entered code and re-arms the countdown.
    pub fn resend_otp(&mut self) -> Result<u32, ApiError> {
        match &mut self.state {
            FlowState::AwaitingOtp { challenge, .. } => challenge.resend(),
            FlowState::VerifyingOtp { .. } => {
                Err(ApiError::State("verification already in progress".into()))
            }
            _ => Err(ApiError::State("no withdrawal awaiting verification".into())),
        }
    }

    /// Walk away from the current attempt. Drops the challenge (and with it
    /// any countdown the screen was watching); responses still in flight are
    /// discarded by whoever awaited them, not cancelled at the transport.
    pub fn abandon(&mut self) {
        if self.is_in_flight() {
            info!("withdrawal flow abandoned");
        }
        self.state = FlowState::Idle;
    }

    /// Prefill the form from the stored bank details. Non-fatal: on any
    /// failure the user types the details by hand.
    pub async fn prefill_bank_details(state: &AppState) -> Option<BankDetails> {
        match state.api.get_bank_details().await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(error = %e, "bank detail prefill failed");
                None
            }
        }
    }

    fn apply_submit_response(
        &mut self,
        payload: CreateWithdrawalRequest,
        resp: WithdrawalResponse,
    ) -> FlowEvent {
        let Some(status) = resp.decoded_status() else {
            warn!(status_code = resp.status, "backend returned an unrecognized status");
            return self.fail(UNKNOWN_STATUS_FAILURE.to_string());
        };

        match status {
            WithdrawalStatus::MoneySent => {
                let request =
                    build_request(&payload.iban, &payload.account_holder_name, &resp, status);
                info!(withdrawal_id = %request.id, "withdrawal completed, money sent");
                self.state = FlowState::Completed(FlowOutcome::MoneySent(request.clone()));
                FlowEvent::Success(request)
            }
            WithdrawalStatus::Pending => {
                let request =
                    build_request(&payload.iban, &payload.account_holder_name, &resp, status);
                info!(withdrawal_id = %request.id, "withdrawal accepted, settlement pending");
                self.state = FlowState::Completed(FlowOutcome::Pending(request.clone()));
                FlowEvent::Pending(request)
            }
            WithdrawalStatus::AwaitingOtpVerification => {
                let request =
                    build_request(&payload.iban, &payload.account_holder_name, &resp, status);
                let withdrawal_id = request.id;
                let challenge =
                    OtpChallenge::new(withdrawal_id, self.app.config.otp_resend_window_secs);
                info!(%withdrawal_id, "withdrawal requires OTP verification");
                self.state = FlowState::AwaitingOtp { request, challenge };
                FlowEvent::OtpRequired { withdrawal_id }
            }
            WithdrawalStatus::Failed => {
                self.fail(resp.message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()))
            }
            // an OTP rejection without a live challenge breaks the contract;
            // resolve it as a terminal failure rather than inventing a challenge
            WithdrawalStatus::FailedOtp => {
                warn!(withdrawal_id = %resp.withdrawal_id, "OTP rejection on submit");
                self.fail(resp.message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()))
            }
        }
    }

    fn apply_verify_response(
        &mut self,
        request: WithdrawalRequest,
        mut challenge: OtpChallenge,
        resp: WithdrawalResponse,
    ) -> FlowEvent {
        let Some(status) = resp.decoded_status() else {
            warn!(status_code = resp.status, "backend returned an unrecognized status");
            return self.fail(UNKNOWN_STATUS_FAILURE.to_string());
        };

        match status {
            WithdrawalStatus::MoneySent => {
                let request = settle_request(request, &resp, status);
                info!(withdrawal_id = %request.id, "OTP accepted, money sent");
                self.state = FlowState::Completed(FlowOutcome::MoneySent(request.clone()));
                FlowEvent::Success(request)
            }
            WithdrawalStatus::Pending => {
                let request = settle_request(request, &resp, status);
                info!(withdrawal_id = %request.id, "OTP accepted, settlement pending");
                self.state = FlowState::Completed(FlowOutcome::Pending(request.clone()));
                FlowEvent::Pending(request)
            }
            // the challenge stays alive: same withdrawal id, code cleared,
            // cooldown untouched
            WithdrawalStatus::FailedOtp => {
                challenge.reject_code();
                let message = resp.message.unwrap_or_else(|| OTP_REJECTED.to_string());
                info!(
                    withdrawal_id = %challenge.withdrawal_id(),
                    attempts = challenge.attempts(),
                    "OTP rejected, awaiting retry"
                );
                self.state = FlowState::AwaitingOtp { request, challenge };
                FlowEvent::OtpRejected { message }
            }
            // still awaiting: the backend re-issued the challenge itself
            WithdrawalStatus::AwaitingOtpVerification => {
                let withdrawal_id = challenge.withdrawal_id();
                self.state = FlowState::AwaitingOtp { request, challenge };
                FlowEvent::OtpRequired { withdrawal_id }
            }
            WithdrawalStatus::Failed => {
                self.fail(resp.message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()))
            }
        }
    }

    fn fail(&mut self, message: String) -> FlowEvent {
        self.state = FlowState::Completed(FlowOutcome::Failed {
            message: message.clone(),
        });
        FlowEvent::Failed { message }
    }
}

fn build_request(
    iban: &str,
    account_holder_name: &str,
    resp: &WithdrawalResponse,
    status: WithdrawalStatus,
) -> WithdrawalRequest {
    WithdrawalRequest {
        id: resp.withdrawal_id,
        amount: resp.amount,
        iban: iban.to_string(),
        account_holder_name: account_holder_name.to_string(),
        status,
        masked_iban: resp.masked_iban.clone(),
        created_at: resp.created_at,
        message: resp.message.clone(),
    }
}

fn settle_request(
    mut request: WithdrawalRequest,
    resp: &WithdrawalResponse,
    status: WithdrawalStatus,
) -> WithdrawalRequest {
    request.status = status;
    request.amount = resp.amount;
    request.message = resp.message.clone();
    if resp.masked_iban.is_some() {
        request.masked_iban = resp.masked_iban.clone();
    }
    request
}
