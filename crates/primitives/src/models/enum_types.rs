use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Withdrawal lifecycle status as reported by the backend.
///
/// The wire representation is the integer ordinal; the values are part of the
/// API contract and must not be reordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum WithdrawalStatus {
    Pending = 0,
    MoneySent = 1,
    AwaitingOtpVerification = 2,
    Failed = 3,
    FailedOtp = 4,
}

impl WithdrawalStatus {
    /// Decode a wire status code. Unknown codes yield `None` so the caller
    /// decides the fallback instead of failing the whole body decode.
    pub fn from_wire(code: i32) -> Option<Self> {
        match code {
            0 => Some(WithdrawalStatus::Pending),
            1 => Some(WithdrawalStatus::MoneySent),
            2 => Some(WithdrawalStatus::AwaitingOtpVerification),
            3 => Some(WithdrawalStatus::Failed),
            4 => Some(WithdrawalStatus::FailedOtp),
            _ => None,
        }
    }

    pub fn wire_code(self) -> i32 {
        self as i32
    }

    /// Terminal statuses require no further action from the client without a
    /// brand-new user-initiated request.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            WithdrawalStatus::Pending | WithdrawalStatus::MoneySent | WithdrawalStatus::Failed
        )
    }
}

impl From<WithdrawalStatus> for i32 {
    fn from(status: WithdrawalStatus) -> Self {
        status.wire_code()
    }
}

impl TryFrom<i32> for WithdrawalStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        WithdrawalStatus::from_wire(code)
            .ok_or_else(|| format!("unknown withdrawal status code: {code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ordinals_are_fixed() {
        assert_eq!(WithdrawalStatus::Pending.wire_code(), 0);
        assert_eq!(WithdrawalStatus::MoneySent.wire_code(), 1);
        assert_eq!(WithdrawalStatus::AwaitingOtpVerification.wire_code(), 2);
        assert_eq!(WithdrawalStatus::Failed.wire_code(), 3);
        assert_eq!(WithdrawalStatus::FailedOtp.wire_code(), 4);
    }

    #[test]
    fn from_wire_round_trips_every_known_code() {
        for code in 0..=4 {
            let status = WithdrawalStatus::from_wire(code).unwrap();
            assert_eq!(status.wire_code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_none() {
        assert_eq!(WithdrawalStatus::from_wire(5), None);
        assert_eq!(WithdrawalStatus::from_wire(-1), None);
    }

    #[test]
    fn otp_statuses_are_not_terminal() {
        assert!(WithdrawalStatus::Pending.is_terminal());
        assert!(WithdrawalStatus::MoneySent.is_terminal());
        assert!(WithdrawalStatus::Failed.is_terminal());
        assert!(!WithdrawalStatus::AwaitingOtpVerification.is_terminal());
        assert!(!WithdrawalStatus::FailedOtp.is_terminal());
    }
}
