//! Level-payment loan amortization in decimal arithmetic.
//!
//! `M = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate and `n`
//! the number of monthly payments. The compounding factor is built by
//! repeated multiplication, so no value ever passes through `f64`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::constants::{CURRENCY_DP, MONTHS_PER_YEAR, MONTHS_PER_YEAR_DEC};

/// Round an amount to cents, midpoint away from zero.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly payment for a fully amortizing loan, rounded to cents.
///
/// # Arguments
/// * `principal` - Amount financed
/// * `annual_rate` - Annual rate as a decimal fraction (0.069 = 6.9%)
/// * `term_years` - Loan term in years
///
/// A zero principal pays zero at any rate. Outside a validated policy the
/// result stays defined: a zero rate (or zero-length term) repays the
/// principal in equal parts, and a factor too large for `Decimal` uses its
/// limit `principal * r`.
#[must_use]
pub fn monthly_payment(principal: Decimal, annual_rate: Decimal, term_years: u32) -> Decimal {
    if principal.is_zero() {
        return Decimal::ZERO;
    }

    let periods = term_years.saturating_mul(MONTHS_PER_YEAR).max(1);
    let monthly_rate = annual_rate / MONTHS_PER_YEAR_DEC;

    let payment = if monthly_rate.is_zero() {
        straight_line(principal, periods)
    } else {
        match compound_factor(monthly_rate, periods) {
            Some(factor) if factor == Decimal::ONE => straight_line(principal, periods),
            Some(factor) => level_payment(principal, monthly_rate, factor)
                .unwrap_or_else(|| principal.saturating_mul(monthly_rate)),
            None => principal.saturating_mul(monthly_rate),
        }
    };

    round_currency(payment)
}

/// `(1 + rate)^periods`, or `None` if it leaves `Decimal` range.
fn compound_factor(rate: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(rate)?;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(base)?;
    }
    Some(factor)
}

fn level_payment(principal: Decimal, rate: Decimal, factor: Decimal) -> Option<Decimal> {
    principal
        .checked_mul(rate)?
        .checked_mul(factor)?
        .checked_div(factor - Decimal::ONE)
}

fn straight_line(principal: Decimal, periods: u32) -> Decimal {
    principal / Decimal::from(periods)
}
