//! Application Layer
//!
//! Orchestrates the pricing domain for callers:
//!
//! - **DTOs**: Wire shapes for quote requests and responses
//! - **Validation**: Boundary checks the engine relies on
//! - **Use Cases**: Validate, price, respond

pub mod dto;
pub mod use_cases;
pub mod validation;

pub use dto::{CustomerDetails, QuoteInputDto, QuoteResponseDto};
pub use use_cases::CreateQuoteUseCase;
pub use validation::{ValidatedQuoteInput, ValidationError};
