//! Display formatting for monetary values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds half away from zero, the way browsers round currency amounts.
pub fn round_for_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-point rendering with exactly `dp` decimals and no grouping,
/// e.g. `12.3456 -> "12.35"`.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = round_for_display(value, dp);
    rounded.rescale(dp);
    rounded.to_string()
}

/// en-US currency rendering with thousands separators and two decimals,
/// e.g. `1234567.891 -> "$1,234,567.89"`.
pub fn format_usd(value: Decimal) -> String {
    let fixed = format_fixed(value.abs(), DISPLAY_DECIMAL_PRECISION);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let rounds_to_zero = round_for_display(value, DISPLAY_DECIMAL_PRECISION).is_zero();
    let sign = if value.is_sign_negative() && !rounds_to_zero {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, grouped, frac),
        None => format!("{}${}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
