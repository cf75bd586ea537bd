//! Pricing policy error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::RiskBand;

/// Errors from pricing policy construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Price per kW must be positive.
    #[error("Price per kW must be positive, got {0}")]
    NonPositivePricePerKw(Decimal),

    /// APR must lie strictly between 0 and 1.
    #[error("APR for band {band} must be between 0 and 1 (exclusive), got {apr}")]
    AprOutOfRange {
        /// Band the rate belongs to.
        band: RiskBand,
        /// Offending rate.
        apr: Decimal,
    },

    /// A consumption or size threshold is not positive.
    #[error("Threshold '{name}' must be positive, got {value}")]
    NonPositiveThreshold {
        /// Threshold name.
        name: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// Band B would require more consumption than band A.
    #[error(
        "Band B minimum consumption ({band_b}) must not exceed band A minimum consumption ({band_a})"
    )]
    InvertedConsumptionThresholds {
        /// Band A minimum consumption.
        band_a: Decimal,
        /// Band B minimum consumption.
        band_b: Decimal,
    },

    /// No offer terms configured.
    #[error("At least one offer term is required")]
    NoTerms,

    /// A term of zero years was configured.
    #[error("Offer terms must be at least one year")]
    ZeroTerm,

    /// Terms are not strictly ascending.
    #[error("Offer terms must be strictly ascending, got {0:?}")]
    TermsNotAscending(Vec<u32>),
}
