pub mod bank_dto;
pub mod history_dto;
pub mod withdrawal_dto;

pub use bank_dto::BankDetails;
pub use history_dto::{WithdrawalDetail, WithdrawalHistoryItem};
pub use withdrawal_dto::{
    CommissionResponse, CreateWithdrawalRequest, VerifyOtpRequest, WithdrawalResponse,
};
