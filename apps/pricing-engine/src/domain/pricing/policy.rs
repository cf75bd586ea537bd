//! Pricing policy: the immutable rule set a [`PricingEngine`](super::PricingEngine) runs on.
//!
//! A policy bundles the price per kW, the risk band thresholds, the APR table
//! and the offered terms. Policies are validated once on construction, so an
//! engine never holds an APR outside (0, 1) or an empty term list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::{
    APR_BAND_A, APR_BAND_B, APR_BAND_C, BAND_A_MAX_SYSTEM_SIZE_KW, BAND_A_MIN_CONSUMPTION_KWH,
    BAND_B_MIN_CONSUMPTION_KWH, PRICE_PER_KW, TERMS_YEARS,
};
use super::error::PolicyError;
use super::types::RiskBand;

/// Consumption and size thresholds for risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Minimum monthly consumption (kWh, inclusive) for band A.
    pub band_a_min_consumption_kwh: Decimal,
    /// Maximum system size (kW, inclusive) for band A.
    pub band_a_max_system_size_kw: Decimal,
    /// Minimum monthly consumption (kWh, inclusive) for band B.
    pub band_b_min_consumption_kwh: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            band_a_min_consumption_kwh: BAND_A_MIN_CONSUMPTION_KWH,
            band_a_max_system_size_kw: BAND_A_MAX_SYSTEM_SIZE_KW,
            band_b_min_consumption_kwh: BAND_B_MIN_CONSUMPTION_KWH,
        }
    }
}

impl RiskThresholds {
    /// Classify a request. First match wins:
    ///
    /// 1. consumption >= band A minimum and size <= band A maximum: `A`
    /// 2. consumption >= band B minimum: `B` (includes high consumption on an
    ///    oversized system)
    /// 3. otherwise: `C`
    #[must_use]
    pub fn classify(&self, monthly_consumption_kwh: Decimal, system_size_kw: Decimal) -> RiskBand {
        if monthly_consumption_kwh >= self.band_a_min_consumption_kwh
            && system_size_kw <= self.band_a_max_system_size_kw
        {
            return RiskBand::A;
        }
        if monthly_consumption_kwh >= self.band_b_min_consumption_kwh {
            return RiskBand::B;
        }
        RiskBand::C
    }

    fn validate(&self) -> Result<(), PolicyError> {
        for (name, value) in [
            ("band_a_min_consumption_kwh", self.band_a_min_consumption_kwh),
            ("band_a_max_system_size_kw", self.band_a_max_system_size_kw),
            ("band_b_min_consumption_kwh", self.band_b_min_consumption_kwh),
        ] {
            if value <= Decimal::ZERO {
                return Err(PolicyError::NonPositiveThreshold { name, value });
            }
        }
        if self.band_b_min_consumption_kwh > self.band_a_min_consumption_kwh {
            return Err(PolicyError::InvertedConsumptionThresholds {
                band_a: self.band_a_min_consumption_kwh,
                band_b: self.band_b_min_consumption_kwh,
            });
        }
        Ok(())
    }
}

/// Base APR per risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AprTable {
    /// Band A rate.
    pub a: Decimal,
    /// Band B rate.
    pub b: Decimal,
    /// Band C rate.
    pub c: Decimal,
}

impl Default for AprTable {
    fn default() -> Self {
        Self {
            a: APR_BAND_A,
            b: APR_BAND_B,
            c: APR_BAND_C,
        }
    }
}

impl AprTable {
    /// Rate for a band.
    #[must_use]
    pub const fn rate_for(&self, band: RiskBand) -> Decimal {
        match band {
            RiskBand::A => self.a,
            RiskBand::B => self.b,
            RiskBand::C => self.c,
        }
    }

    fn validate(&self) -> Result<(), PolicyError> {
        for band in RiskBand::ALL {
            let apr = self.rate_for(band);
            if apr <= Decimal::ZERO || apr >= Decimal::ONE {
                return Err(PolicyError::AprOutOfRange { band, apr });
            }
        }
        Ok(())
    }
}

/// Validated pricing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPolicy {
    price_per_kw: Decimal,
    thresholds: RiskThresholds,
    apr_table: AprTable,
    terms_years: Vec<u32>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            price_per_kw: PRICE_PER_KW,
            thresholds: RiskThresholds::default(),
            apr_table: AprTable::default(),
            terms_years: TERMS_YEARS.to_vec(),
        }
    }
}

impl PricingPolicy {
    /// Build a policy, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `price_per_kw` is not positive
    /// - a threshold is not positive, or band B needs more consumption than band A
    /// - an APR lies outside (0, 1)
    /// - `terms_years` is empty, contains zero, or is not strictly ascending
    pub fn new(
        price_per_kw: Decimal,
        thresholds: RiskThresholds,
        apr_table: AprTable,
        terms_years: Vec<u32>,
    ) -> Result<Self, PolicyError> {
        if price_per_kw <= Decimal::ZERO {
            return Err(PolicyError::NonPositivePricePerKw(price_per_kw));
        }
        thresholds.validate()?;
        apr_table.validate()?;
        validate_terms(&terms_years)?;

        Ok(Self {
            price_per_kw,
            thresholds,
            apr_table,
            terms_years,
        })
    }

    /// Price per kW of system size.
    #[must_use]
    pub const fn price_per_kw(&self) -> Decimal {
        self.price_per_kw
    }

    /// Risk classification thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// APR table.
    #[must_use]
    pub const fn apr_table(&self) -> &AprTable {
        &self.apr_table
    }

    /// Offered terms in years, ascending.
    #[must_use]
    pub fn terms_years(&self) -> &[u32] {
        &self.terms_years
    }
}

fn validate_terms(terms_years: &[u32]) -> Result<(), PolicyError> {
    if terms_years.is_empty() {
        return Err(PolicyError::NoTerms);
    }
    if terms_years.contains(&0) {
        return Err(PolicyError::ZeroTerm);
    }
    if terms_years.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(PolicyError::TermsNotAscending(terms_years.to_vec()));
    }
    Ok(())
}
