//! Create Quote Use Case

use std::sync::Arc;

use crate::application::dto::{QuoteInputDto, QuoteResponseDto};
use crate::application::validation::ValidationError;
use crate::domain::pricing::PricingEngine;

/// Use case for pricing a submitted quote request.
///
/// Validates the raw input, runs the engine and assembles the response.
/// Persisting the response is left to the caller.
#[derive(Debug, Clone)]
pub struct CreateQuoteUseCase {
    engine: Arc<PricingEngine>,
}

impl CreateQuoteUseCase {
    /// Create a new CreateQuoteUseCase.
    #[must_use]
    pub const fn new(engine: Arc<PricingEngine>) -> Self {
        Self { engine }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the input does not validate.
    pub fn execute(&self, input: &QuoteInputDto) -> Result<QuoteResponseDto, ValidationError> {
        // 1. Validate at the boundary
        let validated = input.validate().inspect_err(|e| {
            tracing::warn!(fields = ?e.details.keys().collect::<Vec<_>>(), "Quote input rejected");
        })?;
        let request = validated.request;

        // 2. Price
        let result = self.engine.calculate_quote(&request);

        tracing::info!(
            risk_band = %result.risk_band,
            system_price = %result.system_price,
            principal_amount = %result.principal_amount,
            "Quote created"
        );

        // 3. Assemble response
        Ok(QuoteResponseDto::from_result(
            validated.customer,
            request.monthly_consumption_kwh,
            request.system_size_kw,
            request.down_payment,
            result,
        ))
    }
}
