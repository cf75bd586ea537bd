//! Quote pricing engine.

use std::sync::OnceLock;

use rust_decimal::Decimal;

use super::amortization::monthly_payment;
use super::policy::PricingPolicy;
use super::types::{FinancingOffer, QuoteRequest, QuoteResult, RiskBand};

/// Stateless pricing engine bound to one [`PricingPolicy`].
///
/// Every operation is a pure function of its arguments and the policy, so the
/// engine can be shared across threads or cloned freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Create an engine running on a custom policy.
    #[must_use]
    pub const fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// The policy this engine prices with.
    #[must_use]
    pub const fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// System price: size times the policy's price per kW, unrounded.
    #[must_use]
    pub fn system_price(&self, system_size_kw: Decimal) -> Decimal {
        system_size_kw.saturating_mul(self.policy.price_per_kw())
    }

    /// Risk band for a consumption/size pair.
    #[must_use]
    pub fn classify_risk_band(
        &self,
        monthly_consumption_kwh: Decimal,
        system_size_kw: Decimal,
    ) -> RiskBand {
        self.policy
            .thresholds()
            .classify(monthly_consumption_kwh, system_size_kw)
    }

    /// Base APR for a band.
    #[must_use]
    pub const fn base_apr(&self, band: RiskBand) -> Decimal {
        self.policy.apr_table().rate_for(band)
    }

    /// One offer per policy term, ascending, all at the band's APR.
    #[must_use]
    pub fn generate_offers(&self, principal: Decimal, band: RiskBand) -> Vec<FinancingOffer> {
        let apr = self.base_apr(band);
        self.policy
            .terms_years()
            .iter()
            .map(|&term_years| FinancingOffer {
                term_years,
                apr,
                principal_used: principal,
                monthly_payment: monthly_payment(principal, apr, term_years),
            })
            .collect()
    }

    /// Price a request end to end.
    ///
    /// The principal is not clamped: a down payment above the system price
    /// yields a negative principal and negative payments.
    #[must_use]
    pub fn calculate_quote(&self, request: &QuoteRequest) -> QuoteResult {
        let system_price = self.system_price(request.system_size_kw);
        let principal_amount = system_price.saturating_sub(request.down_payment);
        let risk_band =
            self.classify_risk_band(request.monthly_consumption_kwh, request.system_size_kw);
        let offers = self.generate_offers(principal_amount, risk_band);

        tracing::debug!(
            system_price = %system_price,
            principal_amount = %principal_amount,
            risk_band = %risk_band,
            offers = offers.len(),
            "Quote calculated"
        );

        QuoteResult {
            system_price,
            principal_amount,
            risk_band,
            offers,
        }
    }
}

fn default_engine() -> &'static PricingEngine {
    static DEFAULT_ENGINE: OnceLock<PricingEngine> = OnceLock::new();
    DEFAULT_ENGINE.get_or_init(PricingEngine::default)
}

/// System price under the default policy (1200 per kW).
#[must_use]
pub fn calculate_system_price(system_size_kw: Decimal) -> Decimal {
    default_engine().system_price(system_size_kw)
}

/// Risk band under the default thresholds.
#[must_use]
pub fn calculate_risk_band(monthly_consumption_kwh: Decimal, system_size_kw: Decimal) -> RiskBand {
    default_engine().classify_risk_band(monthly_consumption_kwh, system_size_kw)
}

/// Base APR under the default table.
#[must_use]
pub fn base_apr(band: RiskBand) -> Decimal {
    default_engine().base_apr(band)
}

/// Offers for the default terms (5, 10, 15 years).
#[must_use]
pub fn generate_offers(principal: Decimal, band: RiskBand) -> Vec<FinancingOffer> {
    default_engine().generate_offers(principal, band)
}

/// Full quote under the default policy.
#[must_use]
pub fn calculate_quote(request: &QuoteRequest) -> QuoteResult {
    default_engine().calculate_quote(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::policy::{AprTable, RiskThresholds};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(5), dec!(6000) ; "five kw")]
    #[test_case(dec!(10), dec!(12000) ; "ten kw")]
    #[test_case(dec!(3.5), dec!(4200) ; "fractional kw")]
    fn test_system_price(size: Decimal, expected: Decimal) {
        assert_eq!(calculate_system_price(size), expected);
    }

    #[test]
    fn test_risk_band_free_function() {
        assert_eq!(calculate_risk_band(dec!(400), dec!(6)), RiskBand::A);
        assert_eq!(calculate_risk_band(dec!(400), dec!(7)), RiskBand::B);
        assert_eq!(calculate_risk_band(dec!(249), dec!(5)), RiskBand::C);
    }

    #[test]
    fn test_base_apr() {
        assert_eq!(base_apr(RiskBand::A), dec!(0.069));
        assert_eq!(base_apr(RiskBand::B), dec!(0.089));
        assert_eq!(base_apr(RiskBand::C), dec!(0.119));
    }

    #[test]
    fn test_generate_offers_shape() {
        let offers = generate_offers(dec!(10000), RiskBand::A);

        assert_eq!(offers.len(), 3);
        let terms: Vec<u32> = offers.iter().map(|o| o.term_years).collect();
        assert_eq!(terms, vec![5, 10, 15]);
        for offer in &offers {
            assert_eq!(offer.apr, dec!(0.069));
            assert_eq!(offer.principal_used, dec!(10000));
        }
        assert!(offers[0].monthly_payment > offers[1].monthly_payment);
        assert!(offers[1].monthly_payment > offers[2].monthly_payment);
    }

    #[test]
    fn test_generate_offers_apr_per_band() {
        assert_eq!(generate_offers(dec!(10000), RiskBand::A)[0].apr, dec!(0.069));
        assert_eq!(generate_offers(dec!(10000), RiskBand::B)[0].apr, dec!(0.089));
        assert_eq!(generate_offers(dec!(10000), RiskBand::C)[0].apr, dec!(0.119));
    }

    #[test]
    fn test_zero_principal_offers_pay_nothing() {
        for band in RiskBand::ALL {
            for offer in generate_offers(Decimal::ZERO, band) {
                assert_eq!(offer.monthly_payment, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_quote_with_down_payment() {
        let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(1000));
        let result = calculate_quote(&request);

        assert_eq!(result.system_price, dec!(6000));
        assert_eq!(result.principal_amount, dec!(5000));
        assert_eq!(result.risk_band, RiskBand::A);
        assert_eq!(result.offers.len(), 3);
        assert_eq!(result.offers[0].apr, dec!(0.069));
        assert!(result.offers.iter().all(|o| o.principal_used == dec!(5000)));
    }

    #[test]
    fn test_quote_without_down_payment() {
        let result = calculate_quote(&QuoteRequest::new(dec!(6), dec!(300)));

        assert_eq!(result.system_price, dec!(7200));
        assert_eq!(result.principal_amount, dec!(7200));
        assert_eq!(result.risk_band, RiskBand::B);
    }

    #[test]
    fn test_quote_bands_drive_apr() {
        let a = calculate_quote(&QuoteRequest::new(dec!(5), dec!(450)));
        let b = calculate_quote(&QuoteRequest::new(dec!(8), dec!(300)));
        let c = calculate_quote(&QuoteRequest::new(dec!(4), dec!(200)));

        assert_eq!(a.risk_band, RiskBand::A);
        assert_eq!(b.risk_band, RiskBand::B);
        assert_eq!(c.risk_band, RiskBand::C);
        assert_eq!(a.offers[0].apr, dec!(0.069));
        assert_eq!(b.offers[0].apr, dec!(0.089));
        assert_eq!(c.offers[0].apr, dec!(0.119));
    }

    #[test]
    fn test_quote_payments_positive_and_decreasing() {
        let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(Decimal::ZERO);
        let result = calculate_quote(&request);

        assert!(result.offers.iter().all(|o| o.monthly_payment > Decimal::ZERO));
        assert!(result.offers[0].monthly_payment > result.offers[1].monthly_payment);
        assert!(result.offers[1].monthly_payment > result.offers[2].monthly_payment);
    }

    #[test]
    fn test_down_payment_equal_to_price() {
        let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(6000));
        let result = calculate_quote(&request);

        assert!(result.principal_amount.is_zero());
        assert!(result.offers.iter().all(|o| o.monthly_payment.is_zero()));
    }

    #[test]
    fn test_down_payment_above_price_is_not_clamped() {
        let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(7000));
        let result = calculate_quote(&request);

        assert_eq!(result.principal_amount, dec!(-1000));
        assert!(result.offers.iter().all(|o| o.principal_used == dec!(-1000)));
        assert!(result.offers.iter().all(|o| o.monthly_payment < Decimal::ZERO));
    }

    #[test]
    fn test_band_ignores_down_payment() {
        let without = calculate_quote(&QuoteRequest::new(dec!(5), dec!(400)));
        let with = calculate_quote(
            &QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(5999)),
        );
        assert_eq!(without.risk_band, with.risk_band);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy::new(
            dec!(1000),
            RiskThresholds::default(),
            AprTable {
                a: dec!(0.05),
                b: dec!(0.06),
                c: dec!(0.07),
            },
            vec![20],
        )
        .unwrap();
        let engine = PricingEngine::new(policy);
        let result = engine.calculate_quote(&QuoteRequest::new(dec!(4), dec!(100)));

        assert_eq!(result.system_price, dec!(4000));
        assert_eq!(result.risk_band, RiskBand::C);
        assert_eq!(result.offers.len(), 1);
        assert_eq!(result.offers[0].term_years, 20);
        assert_eq!(result.offers[0].apr, dec!(0.07));
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingEngine>();
    }

    proptest! {
        #[test]
        fn quote_is_idempotent(
            size_tenths in 1i64..500,
            consumption in 1i64..2_000,
            down_cents in 0i64..5_000_000,
        ) {
            let request = QuoteRequest::new(Decimal::new(size_tenths, 1), Decimal::from(consumption))
                .with_down_payment(Decimal::new(down_cents, 2));
            prop_assert_eq!(calculate_quote(&request), calculate_quote(&request));
        }

        #[test]
        fn principal_is_price_minus_down_payment(
            size_tenths in 1i64..500,
            down_cents in 0i64..10_000_000,
        ) {
            let request = QuoteRequest::new(Decimal::new(size_tenths, 1), dec!(300))
                .with_down_payment(Decimal::new(down_cents, 2));
            let result = calculate_quote(&request);
            prop_assert_eq!(result.principal_amount, result.system_price - request.down_payment);
        }
    }
}
