//! Plain-text quote summary.

use std::fmt;

use rust_decimal::Decimal;

use super::format::{format_currency, format_percent};
use crate::application::dto::QuoteResponseDto;
use crate::domain::pricing::QuoteResult;

/// Printable summary of a priced quote: pricing breakdown, risk band and one
/// row per financing offer with its total cost.
#[derive(Debug, Clone, Copy)]
pub struct QuoteSummary<'a> {
    result: &'a QuoteResult,
    system_size_kw: Decimal,
    down_payment: Decimal,
}

impl<'a> QuoteSummary<'a> {
    /// Summarize an engine result.
    #[must_use]
    pub const fn new(result: &'a QuoteResult, system_size_kw: Decimal, down_payment: Decimal) -> Self {
        Self {
            result,
            system_size_kw,
            down_payment,
        }
    }
}

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Installation Summary")?;
        writeln!(f, "  System size:     {} kW", self.system_size_kw.normalize())?;
        writeln!(f, "  System price:    {}", format_currency(result.system_price))?;
        writeln!(f, "  Down payment:    {}", format_currency(self.down_payment))?;
        writeln!(f, "  Financed amount: {}", format_currency(result.principal_amount))?;
        writeln!(
            f,
            "Credit Risk Band:  {} - {}",
            result.risk_band,
            result.risk_band.label()
        )?;
        writeln!(f, "Financing Options")?;
        writeln!(
            f,
            "  {:<10}{:<9}{:<18}{}",
            "Term", "APR", "Monthly Payment", "Total Cost"
        )?;
        for offer in &result.offers {
            writeln!(
                f,
                "  {:<10}{:<9}{:<18}{}",
                format!("{} Years", offer.term_years),
                format_percent(offer.apr),
                format_currency(offer.monthly_payment),
                format_currency(offer.total_cost())
            )?;
        }
        Ok(())
    }
}

/// Render the summary for a quote response.
#[must_use]
pub fn render_summary(response: &QuoteResponseDto) -> String {
    let result = response.quote_result();
    QuoteSummary::new(&result, response.system_size_kw, response.down_payment).to_string()
}
