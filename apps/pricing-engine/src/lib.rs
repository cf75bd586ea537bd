// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Pricing Engine - Rust Core Library
//!
//! Deterministic pricing engine for solar installation quotes.
//!
//! # Architecture
//!
//! - **Domain**: Pricing rules with no infrastructure dependencies
//!   - `pricing`: System price, risk band, APR table, amortization, offers
//!
//! - **Application**: Boundary around the engine
//!   - `dto`: Quote request/response wire shapes
//!   - `validation`: Field-level input checks
//!   - `use_cases`: `CreateQuote`
//!
//! - **Report**: Euro/percent formatting and plain-text quote summaries
//!
//! - **Config / Telemetry**: YAML configuration and `tracing` setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Pricing rules.
pub mod domain;

/// Application layer - DTOs, validation and use cases.
pub mod application;

/// Presentation helpers for priced quotes.
pub mod report;

/// Configuration loading.
pub mod config;

/// Logging setup.
pub mod telemetry;

// Domain re-exports
pub use domain::pricing::{
    AprTable, FinancingOffer, PolicyError, PricingEngine, PricingPolicy, QuoteRequest, QuoteResult,
    RiskBand, RiskThresholds, calculate_quote,
};

// Application re-exports
pub use application::{
    CreateQuoteUseCase, CustomerDetails, QuoteInputDto, QuoteResponseDto, ValidationError,
};

// Infrastructure re-exports
pub use config::{Config, ConfigError, load_config};
