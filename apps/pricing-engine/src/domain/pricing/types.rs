//! Core value types for quote pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::MONTHS_PER_YEAR;

/// Coarse creditworthiness classification.
///
/// Variants are ordered by decreasing creditworthiness, so `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    /// Best band: high consumption on a modest system.
    A,
    /// Middle band.
    B,
    /// Everything else.
    C,
}

impl RiskBand {
    /// All bands, best first.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Customer-facing label for the band.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Standard",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Input to a quote calculation.
///
/// Positivity of size and consumption is the caller's responsibility; the
/// engine computes whatever arithmetic falls out of the values it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// System size in kW.
    #[serde(with = "rust_decimal::serde::float")]
    pub system_size_kw: Decimal,
    /// Monthly consumption in kWh.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_consumption_kwh: Decimal,
    /// Down payment; zero when the customer pays nothing upfront.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub down_payment: Decimal,
}

impl QuoteRequest {
    /// Create a request without a down payment.
    #[must_use]
    pub const fn new(system_size_kw: Decimal, monthly_consumption_kwh: Decimal) -> Self {
        Self {
            system_size_kw,
            monthly_consumption_kwh,
            down_payment: Decimal::ZERO,
        }
    }

    /// Set the down payment.
    #[must_use]
    pub const fn with_down_payment(mut self, down_payment: Decimal) -> Self {
        self.down_payment = down_payment;
        self
    }
}

/// One financing proposal for a specific term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingOffer {
    /// Loan term in years.
    pub term_years: u32,
    /// Annual percentage rate as a decimal fraction (0.069 = 6.9%).
    #[serde(with = "rust_decimal::serde::float")]
    pub apr: Decimal,
    /// Financed principal.
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_used: Decimal,
    /// Level monthly payment, rounded to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_payment: Decimal,
}

impl FinancingOffer {
    /// Number of monthly payments over the term.
    #[must_use]
    pub const fn payment_count(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Sum of all monthly payments over the term.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.monthly_payment
            .saturating_mul(Decimal::from(self.payment_count()))
    }
}

/// Output of a quote calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Installed system price before down payment.
    #[serde(with = "rust_decimal::serde::float")]
    pub system_price: Decimal,
    /// Amount financed (system price minus down payment, unclamped).
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_amount: Decimal,
    /// Risk band of the request.
    pub risk_band: RiskBand,
    /// Offers ordered by ascending term.
    pub offers: Vec<FinancingOffer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn risk_band_ordering() {
        assert!(RiskBand::A < RiskBand::B);
        assert!(RiskBand::B < RiskBand::C);
    }

    #[test]
    fn risk_band_labels() {
        assert_eq!(RiskBand::A.label(), "Excellent");
        assert_eq!(RiskBand::B.label(), "Good");
        assert_eq!(RiskBand::C.label(), "Standard");
    }

    #[test]
    fn risk_band_serde() {
        let json = serde_json::to_string(&RiskBand::A).unwrap();
        assert_eq!(json, "\"A\"");

        let parsed: RiskBand = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(parsed, RiskBand::C);
    }

    #[test]
    fn request_down_payment_defaults_to_zero() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"systemSizeKw": 6, "monthlyConsumptionKwh": 300}"#).unwrap();
        assert_eq!(request.system_size_kw, dec!(6));
        assert_eq!(request.monthly_consumption_kwh, dec!(300));
        assert!(request.down_payment.is_zero());
    }

    #[test]
    fn request_builder() {
        let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(1000));
        assert_eq!(request.down_payment, dec!(1000));
    }

    #[test]
    fn offer_total_cost() {
        let offer = FinancingOffer {
            term_years: 10,
            apr: dec!(0.069),
            principal_used: dec!(10000),
            monthly_payment: dec!(115.59),
        };
        assert_eq!(offer.payment_count(), 120);
        assert_eq!(offer.total_cost(), dec!(13870.80));
    }

    #[test]
    fn offer_serializes_camel_case() {
        let offer = FinancingOffer {
            term_years: 5,
            apr: dec!(0.089),
            principal_used: dec!(7200),
            monthly_payment: dec!(149.12),
        };
        let json = serde_json::to_value(offer).unwrap();
        assert_eq!(json["termYears"], 5);
        assert_eq!(json["apr"].as_f64(), Some(0.089));
        assert_eq!(json["principalUsed"].as_f64(), Some(7200.0));
        assert_eq!(json["monthlyPayment"].as_f64(), Some(149.12));
    }

    #[test]
    fn offer_reads_back_exact_amounts() {
        let offer = FinancingOffer {
            term_years: 10,
            apr: dec!(0.069),
            principal_used: dec!(10000),
            monthly_payment: dec!(115.59),
        };
        let json = serde_json::to_string(&offer).unwrap();
        let parsed: FinancingOffer = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.apr, dec!(0.069));
        assert_eq!(parsed.monthly_payment, dec!(115.59));
    }
}
