//! Solar quote pricing.
//!
//! Turns a quote request (system size, monthly consumption, optional down
//! payment) into a system price, a risk band and one financing offer per term:
//!
//! - System price: size (kW) times the price per kW
//! - Risk band: `A`, `B` or `C` from consumption and size thresholds
//! - APR: fixed rate per band
//! - Offers: level monthly payment per term, rounded to cents
//!
//! # Example
//!
//! ```rust
//! use pricing_engine::domain::pricing::{PricingEngine, QuoteRequest, RiskBand};
//! use rust_decimal_macros::dec;
//!
//! let engine = PricingEngine::default();
//! let request = QuoteRequest::new(dec!(5), dec!(400)).with_down_payment(dec!(1000));
//!
//! let quote = engine.calculate_quote(&request);
//! assert_eq!(quote.system_price, dec!(6000));
//! assert_eq!(quote.principal_amount, dec!(5000));
//! assert_eq!(quote.risk_band, RiskBand::A);
//! assert_eq!(quote.offers[0].apr, dec!(0.069));
//! ```

mod amortization;
pub mod constants;
mod engine;
mod error;
mod policy;
mod types;

pub use amortization::{monthly_payment, round_currency};
pub use engine::{
    PricingEngine, base_apr, calculate_quote, calculate_risk_band, calculate_system_price,
    generate_offers,
};
pub use error::PolicyError;
pub use policy::{AprTable, PricingPolicy, RiskThresholds};
pub use types::{FinancingOffer, QuoteRequest, QuoteResult, RiskBand};
