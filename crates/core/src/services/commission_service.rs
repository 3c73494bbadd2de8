use crate::app_state::AppState;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Fee for a candidate amount, or an explicit admission that the lookup
/// failed. The confirmation prompt must disclose an unknown fee instead of
/// blocking the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommissionQuote {
    Known(Decimal),
    Unknown,
}

/// Resolves the commission for the amount currently in the form.
///
/// One lookup per amount change, no retries. While the user keeps typing,
/// older lookups may still be in flight; only the latest issued one is
/// allowed to report back.
#[derive(Debug, Default)]
pub struct CommissionResolver {
    seq: AtomicU64,
}

impl CommissionResolver {
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
        }
    }

    /// `None` means a newer lookup superseded this one and the result must be
    /// discarded. `Some(Unknown)` means the lookup failed.
    pub async fn resolve(&self, state: &AppState, amount: Decimal) -> Option<CommissionQuote> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = state.api.get_commission(amount).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            return None;
        }

        match result {
            Ok(resp) => Some(CommissionQuote::Known(resp.commission_amount)),
            Err(e) => {
                warn!(error = %e, %amount, "commission lookup failed");
                Some(CommissionQuote::Unknown)
            }
        }
    }
}
