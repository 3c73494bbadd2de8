use crate::app_state::AppState;
use cashout_primitives::error::ApiError;
use cashout_primitives::models::dtos::{WithdrawalDetail, WithdrawalHistoryItem};
use tracing::debug;
use uuid::Uuid;

/// Read-only projection of past withdrawal requests. Never mutates anything;
/// an empty page is a valid answer, distinct from a fetch error.
pub struct HistoryService;

impl HistoryService {
    pub async fn list(
        state: &AppState,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<WithdrawalHistoryItem>, ApiError> {
        let items = state.api.list_withdrawals(page, page_size).await?;
        debug!(page, page_size, count = items.len(), "fetched withdrawal history page");
        Ok(items)
    }

    pub async fn get_by_id(
        state: &AppState,
        withdrawal_id: Uuid,
    ) -> Result<WithdrawalDetail, ApiError> {
        state.api.get_withdrawal(withdrawal_id).await
    }
}
