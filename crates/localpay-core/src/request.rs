//! # Payment Request Types
//!
//! The payment request is a tagged union over the supported methods.
//! The wire shape is flat (every method's fields side by side); decoding
//! keeps only the fields belonging to the selected `method`.

use crate::error::{PaymentError, PaymentResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Supported local payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Upi,
    Bank,
    Card,
}

impl PaymentMethod {
    /// Returns the wire discriminant
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Card => "card",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(PaymentMethod::Upi),
            "bank" => Ok(PaymentMethod::Bank),
            "card" => Ok(PaymentMethod::Card),
            other => Err(other.to_string()),
        }
    }
}

/// Method-specific payment fields.
///
/// Absent wire fields are represented as empty strings; presence is
/// decided by the validator, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentDetails {
    Upi {
        upi_id: String,
    },
    Bank {
        account_number: String,
        ifsc_code: String,
        account_name: String,
    },
    Card {
        card_number: String,
        expiry_date: String,
        name_on_card: String,
    },
    /// Unrecognised discriminant (empty when `method` was absent)
    Unsupported { method: String },
}

impl PaymentDetails {
    /// The known method, if any
    pub fn method(&self) -> Option<PaymentMethod> {
        match self {
            PaymentDetails::Upi { .. } => Some(PaymentMethod::Upi),
            PaymentDetails::Bank { .. } => Some(PaymentMethod::Bank),
            PaymentDetails::Card { .. } => Some(PaymentMethod::Card),
            PaymentDetails::Unsupported { .. } => None,
        }
    }
}

/// A decoded payment request
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Amount to charge (passed through, never validated)
    pub amount: f64,
    /// Method-specific fields
    pub details: PaymentDetails,
}

impl PaymentRequest {
    pub fn new(amount: f64, details: PaymentDetails) -> Self {
        Self { amount, details }
    }

    /// Convenience: UPI request
    pub fn upi(amount: f64, upi_id: impl Into<String>) -> Self {
        Self::new(
            amount,
            PaymentDetails::Upi {
                upi_id: upi_id.into(),
            },
        )
    }

    /// Convenience: bank transfer request
    pub fn bank(
        amount: f64,
        account_number: impl Into<String>,
        ifsc_code: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self::new(
            amount,
            PaymentDetails::Bank {
                account_number: account_number.into(),
                ifsc_code: ifsc_code.into(),
                account_name: account_name.into(),
            },
        )
    }

    /// Convenience: card request
    pub fn card(
        amount: f64,
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        name_on_card: impl Into<String>,
    ) -> Self {
        Self::new(
            amount,
            PaymentDetails::Card {
                card_number: card_number.into(),
                expiry_date: expiry_date.into(),
                name_on_card: name_on_card.into(),
            },
        )
    }

    /// The wire discriminant this request was submitted with
    pub fn method_name(&self) -> &str {
        match &self.details {
            PaymentDetails::Unsupported { method } => method.as_str(),
            details => details.method().map(|m| m.as_str()).unwrap_or_default(),
        }
    }

    /// Decode a request from a JSON body.
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    /// A `null` body decodes as a request with no fields, and keys match
    /// the wire names case-insensitively. Fails only when that value is not
    /// an object (or `null`) of the expected shape; missing or irrelevant
    /// fields are left to the validator.
    pub fn from_json(bytes: &[u8]) -> PaymentResult<Self> {
        let value = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| Err(serde::de::Error::custom("empty request body")))?;

        let fields = match value {
            Value::Null => Map::new(),
            Value::Object(fields) => fields,
            _ => {
                return Err(PaymentError::MalformedRequest(serde::de::Error::custom(
                    "payment request must be a JSON object",
                )))
            }
        };

        let body: PaymentRequestBody =
            serde_json::from_value(Value::Object(canonical_keys(fields)))?;
        Ok(body.into())
    }
}

/// Wire names of every request field
const WIRE_FIELDS: [&str; 9] = [
    "method",
    "amount",
    "upiId",
    "accountNumber",
    "ifscCode",
    "accountName",
    "cardNumber",
    "expiryDate",
    "nameOnCard",
];

/// Rename keys to their wire spelling, ignoring case; unknown keys are dropped.
/// An exact-case key wins over a differently-cased duplicate.
fn canonical_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut exact = Vec::new();
    let mut canonical = Map::new();

    for (key, value) in fields {
        let Some(name) = WIRE_FIELDS.iter().find(|f| f.eq_ignore_ascii_case(&key)) else {
            continue;
        };
        if *name == key {
            exact.push((key, value));
        } else {
            canonical.insert(name.to_string(), value);
        }
    }

    canonical.extend(exact);
    canonical
}

/// Flat wire shape of a payment request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRequestBody {
    method: Option<String>,
    amount: Option<f64>,
    upi_id: Option<String>,
    account_number: Option<String>,
    ifsc_code: Option<String>,
    account_name: Option<String>,
    card_number: Option<String>,
    expiry_date: Option<String>,
    name_on_card: Option<String>,
}

impl From<PaymentRequestBody> for PaymentRequest {
    fn from(body: PaymentRequestBody) -> Self {
        let method = body.method.unwrap_or_default();
        let details = match method.parse::<PaymentMethod>() {
            Ok(PaymentMethod::Upi) => PaymentDetails::Upi {
                upi_id: body.upi_id.unwrap_or_default(),
            },
            Ok(PaymentMethod::Bank) => PaymentDetails::Bank {
                account_number: body.account_number.unwrap_or_default(),
                ifsc_code: body.ifsc_code.unwrap_or_default(),
                account_name: body.account_name.unwrap_or_default(),
            },
            Ok(PaymentMethod::Card) => PaymentDetails::Card {
                card_number: body.card_number.unwrap_or_default(),
                expiry_date: body.expiry_date.unwrap_or_default(),
                name_on_card: body.name_on_card.unwrap_or_default(),
            },
            Err(method) => PaymentDetails::Unsupported { method },
        };

        PaymentRequest {
            amount: body.amount.unwrap_or_default(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("upi".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!("bank".parse::<PaymentMethod>(), Ok(PaymentMethod::Bank));
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert!("UPI".parse::<PaymentMethod>().is_err());
        assert!("wire".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_decode_upi() {
        let request =
            PaymentRequest::from_json(br#"{"method":"upi","upiId":"alice@bank","amount":100}"#)
                .unwrap();

        assert_eq!(request.amount, 100.0);
        assert_eq!(request.method_name(), "upi");
        assert_eq!(
            request.details,
            PaymentDetails::Upi {
                upi_id: "alice@bank".to_string()
            }
        );
    }

    #[test]
    fn test_decode_drops_fields_of_other_methods() {
        let request = PaymentRequest::from_json(
            br#"{"method":"card","amount":50,"upiId":"alice@bank","cardNumber":"4111111111111111"}"#,
        )
        .unwrap();

        assert_eq!(
            request.details,
            PaymentDetails::Card {
                card_number: "4111111111111111".to_string(),
                expiry_date: String::new(),
                name_on_card: String::new(),
            }
        );
    }

    #[test]
    fn test_decode_unknown_method() {
        let request = PaymentRequest::from_json(br#"{"method":"wire","amount":10}"#).unwrap();
        assert_eq!(request.details.method(), None);
        assert_eq!(request.method_name(), "wire");
    }

    #[test]
    fn test_decode_missing_method_and_nulls() {
        let request =
            PaymentRequest::from_json(br#"{"amount":null,"upiId":null,"extra":true}"#).unwrap();
        assert_eq!(request.amount, 0.0);
        assert_eq!(
            request.details,
            PaymentDetails::Unsupported {
                method: String::new()
            }
        );
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let request =
            PaymentRequest::from_json(br#"{"method":"upi","upiId":"a","amount":1} trailing"#)
                .unwrap();
        assert_eq!(request, PaymentRequest::upi(1.0, "a"));
    }

    #[test]
    fn test_decode_null_body() {
        let request = PaymentRequest::from_json(b"null").unwrap();
        assert_eq!(request.amount, 0.0);
        assert_eq!(request.method_name(), "");
        assert_eq!(request.details.method(), None);
    }

    #[test]
    fn test_decode_keys_case_insensitively() {
        let request =
            PaymentRequest::from_json(br#"{"Method":"upi","UPIID":"a","AMOUNT":5}"#).unwrap();
        assert_eq!(request, PaymentRequest::upi(5.0, "a"));

        // Values are still case-sensitive
        let request = PaymentRequest::from_json(br#"{"method":"UPI","upiId":"a"}"#).unwrap();
        assert_eq!(request.method_name(), "UPI");
    }

    #[test]
    fn test_exact_key_wins_over_other_case() {
        let request =
            PaymentRequest::from_json(br#"{"method":"upi","upiId":"exact","UpiId":"folded"}"#)
                .unwrap();
        assert_eq!(request, PaymentRequest::upi(0.0, "exact"));
    }

    #[test]
    fn test_decode_malformed() {
        let bodies: [&[u8]; 6] = [
            b"not json",
            b"",
            b"[]",
            b"\"upi\"",
            br#"{"method":"upi","amount":"100"}"#,
            br#"{"method":7}"#,
        ];

        for body in bodies {
            let err = PaymentRequest::from_json(body).unwrap_err();
            assert!(matches!(err, PaymentError::MalformedRequest(_)), "{:?}", body);
        }
    }
}
