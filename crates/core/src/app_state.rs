use crate::client::WithdrawalsClient;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub use cashout_primitives::models::app_config::AppConfig;

/// Everything the services need, built once at startup and shared.
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: AppConfig,
    pub api: WithdrawalsClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        let api = WithdrawalsClient::new(http.clone(), &config.api_base_url, config.api_token.clone())?;

        Ok(Arc::new(Self {
            http_client: http,
            config,
            api,
        }))
    }
}

pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded environment from .env"),
        Err(_) => info!("no .env file, using process environment"),
    }
}
