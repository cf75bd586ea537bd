//! Decimal constants for the default pricing policy.

use rust_decimal::Decimal;

/// Installed price per kW of system size.
pub const PRICE_PER_KW: Decimal = Decimal::from_parts(1200, 0, 0, false, 0);

/// Minimum monthly consumption (kWh) for band A.
pub const BAND_A_MIN_CONSUMPTION_KWH: Decimal = Decimal::from_parts(400, 0, 0, false, 0);
/// Largest system (kW) still eligible for band A.
pub const BAND_A_MAX_SYSTEM_SIZE_KW: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
/// Minimum monthly consumption (kWh) for band B.
pub const BAND_B_MIN_CONSUMPTION_KWH: Decimal = Decimal::from_parts(250, 0, 0, false, 0);

/// Base APR for band A (6.9%).
pub const APR_BAND_A: Decimal = Decimal::from_parts(69, 0, 0, false, 3);
/// Base APR for band B (8.9%).
pub const APR_BAND_B: Decimal = Decimal::from_parts(89, 0, 0, false, 3);
/// Base APR for band C (11.9%).
pub const APR_BAND_C: Decimal = Decimal::from_parts(119, 0, 0, false, 3);

/// Offered loan terms in years, ascending.
pub const TERMS_YEARS: [u32; 3] = [5, 10, 15];

pub(crate) const MONTHS_PER_YEAR: u32 = 12;
pub(crate) const MONTHS_PER_YEAR_DEC: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
pub(crate) const CURRENCY_DP: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constants_match_literals() {
        assert_eq!(PRICE_PER_KW, dec!(1200));
        assert_eq!(APR_BAND_A, dec!(0.069));
        assert_eq!(APR_BAND_B, dec!(0.089));
        assert_eq!(APR_BAND_C, dec!(0.119));
        assert_eq!(BAND_A_MIN_CONSUMPTION_KWH, dec!(400));
        assert_eq!(BAND_A_MAX_SYSTEM_SIZE_KW, dec!(6));
        assert_eq!(BAND_B_MIN_CONSUMPTION_KWH, dec!(250));
    }
}
