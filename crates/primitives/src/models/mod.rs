pub mod app_config;
pub mod dtos;
pub mod enum_types;
pub mod withdrawal;

// Re-export commonly used types
pub use app_config::AppConfig;
pub use enum_types::WithdrawalStatus;
pub use withdrawal::{BalanceSnapshot, WithdrawalForm, WithdrawalRequest, WithdrawalSettings};
