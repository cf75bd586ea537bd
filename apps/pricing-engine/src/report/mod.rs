//! Quote presentation helpers: currency and percent formatting, and a
//! plain-text summary of a priced quote.

pub mod format;
mod summary;

pub use format::{format_currency, format_percent};
pub use summary::{QuoteSummary, render_summary};
