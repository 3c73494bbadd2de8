use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places with half-up semantics, the rounding the backend
/// applies to currency values. Idempotent: `round2(round2(x)) == round2(x)`.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Normalize raw user input into a currency amount.
///
/// Strips everything except digits and decimal separators, maps the comma
/// separator to a point, collapses repeated points down to the first one, and
/// rounds the result half-up to 2 decimal places. Returns `None` for input
/// that does not contain a parseable positive amount.
pub fn parse_user_amount(raw: &str) -> Option<Decimal> {
    let mut cleaned = String::with_capacity(raw.len());
    let mut seen_separator = false;

    for c in raw.chars() {
        match c {
            '0'..='9' => cleaned.push(c),
            '.' | ',' if !seen_separator => {
                cleaned.push('.');
                seen_separator = true;
            }
            '.' | ',' => {}
            _ => {}
        }
    }

    let amount: Decimal = cleaned.parse().ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }

    Some(round2(amount))
}
