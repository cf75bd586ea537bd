//! Formatting utilities for quote display.
//!
//! Amounts render in German euro style: `.` groups thousands, `,` separates
//! cents, the symbol trails after a non-breaking space, and whole amounts drop
//! their fraction (`6.000 €`, `115,59 €`, `115,5 €`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Separator between amount and currency symbol (U+00A0).
pub const CURRENCY_SPACE: char = '\u{a0}';

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Format an amount as euros.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return format!("0{CURRENCY_SPACE}€");
    }

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out.push(CURRENCY_SPACE);
    out.push('€');
    out
}

/// Format a decimal rate as a percentage with 2 decimals (`0.069` → `6.90%`).
#[must_use]
pub fn format_percent(rate: Decimal) -> String {
    let pct = (rate * HUNDRED).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.2}%")
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
