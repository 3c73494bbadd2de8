pub mod amount_validator;
pub mod commission_service;
pub mod history_service;
pub mod otp_service;
pub mod withdrawal_service;

pub use amount_validator::AmountValidator;
pub use commission_service::{CommissionQuote, CommissionResolver};
pub use history_service::HistoryService;
pub use otp_service::{CooldownTicker, CooldownTimer, OtpChallenge};
pub use withdrawal_service::{FlowEvent, FlowOutcome, FlowState, WithdrawalFlow};
