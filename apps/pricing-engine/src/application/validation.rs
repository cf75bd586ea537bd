//! Quote input validation.
//!
//! Checks a [`QuoteInputDto`] before it reaches the pricing engine, which
//! assumes positive size and consumption and a non-negative down payment.
//! All failing fields are reported together, each with its own messages.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

use super::dto::{CustomerDetails, QuoteInputDto};
use crate::domain::pricing::QuoteRequest;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Validation failed for {} field(s)", .details.len())]
pub struct ValidationError {
    /// Messages keyed by camelCase field name.
    pub details: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Messages for one field, if it failed.
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.details.get(field).map(Vec::as_slice)
    }

    /// Error body in the shape clients expect.
    #[must_use]
    pub fn to_response_body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": "Validation failed",
            "details": self.details,
        })
    }
}

/// Validated input, split into what the engine needs and what it doesn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuoteInput {
    /// Customer details.
    pub customer: CustomerDetails,
    /// Engine request.
    pub request: QuoteRequest,
}

#[derive(Default)]
struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }

    /// Read an optional JSON number, recording a type error against `field`.
    fn number(&mut self, field: &str, value: Option<&Value>) -> Option<Decimal> {
        match parse_number(value?) {
            Ok(v) => Some(v),
            Err(message) => {
                self.push(field, &message);
                None
            }
        }
    }

    fn positive(&mut self, field: &str, value: Option<&Value>, message: &str) -> Decimal {
        if value.is_none() {
            self.push(field, "Required");
            return Decimal::ZERO;
        }
        match self.number(field, value) {
            Some(v) if v > Decimal::ZERO => v,
            Some(_) => {
                self.push(field, message);
                Decimal::ZERO
            }
            None => Decimal::ZERO,
        }
    }
}

/// Strict JSON number: numeric strings are rejected like any other string.
fn parse_number(value: &Value) -> Result<Decimal, String> {
    match value {
        Value::Number(n) => {
            number_to_decimal(n).ok_or_else(|| "Number is out of range".to_string())
        }
        other => Err(format!(
            "Expected number, received {}",
            json_type_name(other)
        )),
    }
}

fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    // Shortest round-trip text, so 5.5 parses as exactly 5.5
    n.as_f64()?.to_string().parse().ok()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = EMAIL_REGEX.get_or_init(|| {
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    });
    re.is_match(email)
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl QuoteInputDto {
    /// Validate and convert into engine input.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its messages.
    pub fn validate(&self) -> Result<ValidatedQuoteInput, ValidationError> {
        let mut errors = FieldErrors::default();

        errors.min_len(
            "fullName",
            &self.full_name,
            2,
            "Full name must be at least 2 characters",
        );
        if !is_valid_email(self.email.trim()) {
            errors.push("email", "Please enter a valid email address");
        }
        errors.min_len("address1", &self.address1, 3, "Address is required");
        errors.min_len("city", &self.city, 2, "City is required");
        errors.min_len("zip", &self.zip, 3, "ZIP/Postal code is required");
        errors.min_len("country", &self.country, 2, "Country is required");

        let monthly_consumption_kwh = errors.positive(
            "monthlyConsumptionKwh",
            self.monthly_consumption_kwh.as_ref(),
            "Monthly consumption must be a positive number",
        );
        let system_size_kw = errors.positive(
            "systemSizeKw",
            self.system_size_kw.as_ref(),
            "System size must be a positive number",
        );
        let down_payment = errors
            .number("downPayment", self.down_payment.as_ref())
            .unwrap_or(Decimal::ZERO);
        if down_payment < Decimal::ZERO {
            errors.push("downPayment", "Down payment cannot be negative");
        }

        if !errors.0.is_empty() {
            return Err(ValidationError { details: errors.0 });
        }

        Ok(ValidatedQuoteInput {
            customer: CustomerDetails {
                full_name: self.full_name.trim().to_string(),
                email: self.email.trim().to_string(),
                address1: self.address1.trim().to_string(),
                address2: non_blank(self.address2.as_ref()),
                city: self.city.trim().to_string(),
                region: non_blank(self.region.as_ref()),
                zip: self.zip.trim().to_string(),
                country: self.country.trim().to_string(),
            },
            request: QuoteRequest::new(system_size_kw, monthly_consumption_kwh)
                .with_down_payment(down_payment),
        })
    }
}
