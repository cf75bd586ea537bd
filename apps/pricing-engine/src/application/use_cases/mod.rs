//! Application use cases.

mod create_quote;

pub use create_quote::CreateQuoteUseCase;
