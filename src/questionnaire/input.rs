//! Raw text → number coercion for the numeric fields.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::profile::amount::from_f64_saturating;

/// Coerce the raw contents of a numeric field.
///
/// Never rejects. Blank input becomes zero rather than "no value", and text
/// that is not a number is treated as blank, which is what a number input
/// reports for it. Numbers outside `Decimal`'s range clamp to `MAX`/`MIN`,
/// and digits past 28 decimal places are rounded off.
pub fn coerce_number(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    if let Ok(value) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return value.normalize();
    }
    match trimmed.parse::<f64>().ok().and_then(from_f64_saturating) {
        Some(value) => {
            tracing::debug!(input = %trimmed, %value, "Numeric input outside decimal range");
            value
        }
        None => {
            tracing::debug!(input = %trimmed, "Non-numeric input coerced to 0");
            Decimal::ZERO
        }
    }
}
