//! Quote DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::pricing::{FinancingOffer, QuoteResult, RiskBand};

/// Raw quote request as submitted by a client.
///
/// Every field is optional on the wire so that missing values surface as
/// field-level validation messages rather than deserialization failures.
/// Numeric fields keep the raw JSON value for the same reason: a string or
/// boolean where a number belongs is reported against that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInputDto {
    /// Customer full name.
    #[serde(default)]
    pub full_name: String,
    /// Customer email.
    #[serde(default)]
    pub email: String,
    /// Street address.
    #[serde(default)]
    pub address1: String,
    /// Address line 2.
    #[serde(default)]
    pub address2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Region or state.
    #[serde(default)]
    pub region: Option<String>,
    /// ZIP or postal code.
    #[serde(default)]
    pub zip: String,
    /// Country code.
    #[serde(default)]
    pub country: String,
    /// Monthly consumption in kWh (JSON number).
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_consumption_kwh: Option<Value>,
    /// System size in kW (JSON number).
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_size_kw: Option<Value>,
    /// Down payment (JSON number).
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub down_payment: Option<Value>,
}

/// `None` only when the key is absent; an explicit `null` stays `Some(Value::Null)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Customer and installation address attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Full name.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Street address.
    pub address1: String,
    /// Address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// Region or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ZIP or postal code.
    pub zip: String,
    /// Country code.
    pub country: String,
}

/// Quote as returned to clients: request echo plus pricing result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponseDto {
    /// Customer details.
    #[serde(flatten)]
    pub customer: CustomerDetails,
    /// Monthly consumption in kWh.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_consumption_kwh: Decimal,
    /// System size in kW.
    #[serde(with = "rust_decimal::serde::float")]
    pub system_size_kw: Decimal,
    /// Down payment (zero when none was given).
    #[serde(with = "rust_decimal::serde::float")]
    pub down_payment: Decimal,
    /// System price.
    #[serde(with = "rust_decimal::serde::float")]
    pub system_price: Decimal,
    /// Financed principal.
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_amount: Decimal,
    /// Risk band.
    pub risk_band: RiskBand,
    /// Offers by ascending term.
    pub offers: Vec<FinancingOffer>,
}

impl QuoteResponseDto {
    /// Assemble from the validated request parts and the engine result.
    #[must_use]
    pub fn from_result(
        customer: CustomerDetails,
        monthly_consumption_kwh: Decimal,
        system_size_kw: Decimal,
        down_payment: Decimal,
        result: QuoteResult,
    ) -> Self {
        Self {
            customer,
            monthly_consumption_kwh,
            system_size_kw,
            down_payment,
            system_price: result.system_price,
            principal_amount: result.principal_amount,
            risk_band: result.risk_band,
            offers: result.offers,
        }
    }

    /// The pricing part of the response.
    #[must_use]
    pub fn quote_result(&self) -> QuoteResult {
        QuoteResult {
            system_price: self.system_price,
            principal_amount: self.principal_amount,
            risk_band: self.risk_band,
            offers: self.offers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn input_parses_original_shape() {
        let json = r#"{
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "address1": "Unter den Linden 1",
            "city": "Berlin",
            "zip": "10117",
            "country": "DE",
            "monthlyConsumptionKwh": 400,
            "systemSizeKw": 5,
            "downPayment": 1000
        }"#;
        let dto: QuoteInputDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.full_name, "Ada Lovelace");
        assert_eq!(dto.address2, None);
        assert_eq!(dto.monthly_consumption_kwh, Some(json!(400)));
        assert_eq!(dto.system_size_kw, Some(json!(5)));
        assert_eq!(dto.down_payment, Some(json!(1000)));
    }

    #[test]
    fn input_tolerates_missing_fields() {
        let dto: QuoteInputDto = serde_json::from_str("{}").unwrap();
        assert!(dto.full_name.is_empty());
        assert!(dto.system_size_kw.is_none());
    }

    #[test]
    fn input_keeps_mistyped_numbers() {
        let json = r#"{"systemSizeKw": "abc", "monthlyConsumptionKwh": true, "downPayment": null}"#;
        let dto: QuoteInputDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.system_size_kw, Some(json!("abc")));
        assert_eq!(dto.monthly_consumption_kwh, Some(json!(true)));
        assert_eq!(dto.down_payment, Some(Value::Null));
    }

    #[test]
    fn response_flattens_customer() {
        let customer = CustomerDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address1: "Unter den Linden 1".to_string(),
            address2: None,
            city: "Berlin".to_string(),
            region: None,
            zip: "10117".to_string(),
            country: "DE".to_string(),
        };
        let result = QuoteResult {
            system_price: dec!(7200),
            principal_amount: dec!(7200),
            risk_band: RiskBand::B,
            offers: Vec::new(),
        };
        let response =
            QuoteResponseDto::from_result(customer, dec!(300), dec!(6), Decimal::ZERO, result.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["riskBand"], "B");
        assert_eq!(json["systemPrice"].as_f64(), Some(7200.0));
        assert!(json["downPayment"].is_number());
        assert!(json.get("address2").is_none());
        assert!(json.get("customer").is_none());
        assert_eq!(response.quote_result(), result);
    }
}
