//! Domain Layer
//!
//! Business rules with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`pricing`]: System price, risk classification and financing offers

pub mod pricing;
