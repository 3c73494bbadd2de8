pub mod app_state;
pub mod client;
pub mod logging;
pub mod services;

pub use app_state::{load_env, AppState};
pub use client::WithdrawalsClient;
