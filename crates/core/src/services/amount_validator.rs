use cashout_primitives::error::AmountError;
use cashout_primitives::models::{BalanceSnapshot, WithdrawalSettings};
use cashout_primitives::money::{parse_user_amount, round2};
use rust_decimal::Decimal;

pub struct AmountValidator;

impl AmountValidator {
    /// Check a candidate amount against every business constraint.
    ///
    /// Pure: the same (input, snapshot, settings) triple always yields the
    /// same verdict, so the caller can re-validate on every keystroke.
    /// Checks run in a fixed precedence order; the first violated limit wins.
    pub fn validate(
        raw: &str,
        snapshot: &BalanceSnapshot,
        settings: &WithdrawalSettings,
    ) -> Result<Decimal, AmountError> {
        let amount = parse_user_amount(raw).ok_or(AmountError::Invalid)?;

        if settings.minimum_amount > Decimal::ZERO && amount < settings.minimum_amount {
            return Err(AmountError::BelowMinimum(settings.minimum_amount));
        }

        if settings.maximum_amount > Decimal::ZERO && amount > settings.maximum_amount {
            return Err(AmountError::AboveMaximum(settings.maximum_amount));
        }

        if let Some(limit) = snapshot.remaining_withdrawal_limit {
            if limit > Decimal::ZERO && amount > round2(limit) {
                return Err(AmountError::DailyLimitExceeded(limit));
            }
        }

        // both sides carry 2-decimal rounding so binary float drift upstream
        // cannot flip the comparison
        if amount > round2(snapshot.withdrawable_balance) {
            return Err(AmountError::InsufficientBalance);
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(withdrawable: Decimal) -> BalanceSnapshot {
        BalanceSnapshot {
            total_balance: withdrawable + dec!(10),
            withdrawable_balance: withdrawable,
            blocked_balance: dec!(10),
            remaining_withdrawal_limit: None,
        }
    }

    fn settings(min: Decimal, max: Decimal) -> WithdrawalSettings {
        WithdrawalSettings {
            minimum_amount: min,
            maximum_amount: max,
        }
    }

    #[test]
    fn accepts_comma_amount_within_limits() {
        let verdict = AmountValidator::validate(
            "100,50",
            &snapshot(dec!(200.00)),
            &settings(dec!(50), dec!(5000)),
        );
        assert_eq!(verdict, Ok(dec!(100.50)));
    }

    #[test]
    fn same_inputs_same_verdict() {
        let snap = snapshot(dec!(80));
        let set = settings(dec!(50), dec!(5000));
        assert_eq!(
            AmountValidator::validate("75", &snap, &set),
            AmountValidator::validate("75", &snap, &set),
        );
    }

    #[test]
    fn empty_and_garbage_are_invalid() {
        let snap = snapshot(dec!(200));
        let set = settings(dec!(0), dec!(0));
        assert_eq!(
            AmountValidator::validate("", &snap, &set),
            Err(AmountError::Invalid)
        );
        assert_eq!(
            AmountValidator::validate("abc", &snap, &set),
            Err(AmountError::Invalid)
        );
    }

    #[test]
    fn minimum_boundary_is_inclusive() {
        let snap = snapshot(dec!(200));
        let set = settings(dec!(50), dec!(5000));
        assert_eq!(AmountValidator::validate("50,00", &snap, &set), Ok(dec!(50)));
        assert_eq!(
            AmountValidator::validate("49,99", &snap, &set),
            Err(AmountError::BelowMinimum(dec!(50)))
        );
    }

    #[test]
    fn maximum_boundary_is_inclusive() {
        let snap = snapshot(dec!(10000));
        let set = settings(dec!(50), dec!(5000));
        assert_eq!(
            AmountValidator::validate("5000", &snap, &set),
            Ok(dec!(5000))
        );
        assert_eq!(
            AmountValidator::validate("5000,01", &snap, &set),
            Err(AmountError::AboveMaximum(dec!(5000)))
        );
    }

    #[test]
    fn zero_limits_are_not_enforced() {
        let snap = snapshot(dec!(200));
        let set = settings(dec!(0), dec!(0));
        assert_eq!(AmountValidator::validate("0,01", &snap, &set), Ok(dec!(0.01)));
        assert_eq!(AmountValidator::validate("200", &snap, &set), Ok(dec!(200)));
    }

    #[test]
    fn daily_limit_applies_when_present_and_positive() {
        let mut snap = snapshot(dec!(500));
        snap.remaining_withdrawal_limit = Some(dec!(150));
        let set = settings(dec!(0), dec!(0));
        assert_eq!(AmountValidator::validate("150", &snap, &set), Ok(dec!(150)));
        assert_eq!(
            AmountValidator::validate("150,01", &snap, &set),
            Err(AmountError::DailyLimitExceeded(dec!(150)))
        );

        // a zero remaining limit means the backend did not report one
        snap.remaining_withdrawal_limit = Some(dec!(0));
        assert_eq!(AmountValidator::validate("300", &snap, &set), Ok(dec!(300)));
    }

    #[test]
    fn balance_check_rounds_both_sides() {
        let snap = snapshot(dec!(100.004));
        let set = settings(dec!(0), dec!(0));
        assert_eq!(AmountValidator::validate("100", &snap, &set), Ok(dec!(100)));
        assert_eq!(
            AmountValidator::validate("100,01", &snap, &set),
            Err(AmountError::InsufficientBalance)
        );
    }

    #[test]
    fn minimum_takes_precedence_over_balance() {
        // below-minimum and over-balance at once: minimum wins
        let snap = snapshot(dec!(5));
        let set = settings(dec!(50), dec!(0));
        assert_eq!(
            AmountValidator::validate("10", &snap, &set),
            Err(AmountError::BelowMinimum(dec!(50)))
        );
    }
}
