//! # Payment Error Types
//!
//! Typed error handling for the localpay simulator.
//! Every failure is reported to the caller as a well-formed failure response;
//! these types carry the exact wire message in their `Display` output.

use thiserror::Error;

/// Method-specific field check failure.
///
/// Only the first failing condition for the chosen method is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("UPI ID is required")]
    MissingUpiId,

    #[error("All bank details are required")]
    IncompleteBankDetails,

    #[error("All card details are required")]
    IncompleteCardDetails,

    /// Discriminant outside `upi`, `bank`, `card` (carries the raw value)
    #[error("Invalid payment method")]
    UnsupportedMethod(String),
}

/// Core error type for payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Wire payload could not be decoded into a payment request
    #[error("Invalid request format")]
    MalformedRequest(#[source] serde_json::Error),

    /// Request decoded cleanly but failed method-specific checks
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::MalformedRequest(_) => 400,
            PaymentError::Validation(_) => 400,
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::MalformedRequest(err)
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingUpiId.to_string(), "UPI ID is required");
        assert_eq!(
            ValidationError::IncompleteBankDetails.to_string(),
            "All bank details are required"
        );
        assert_eq!(
            ValidationError::IncompleteCardDetails.to_string(),
            "All card details are required"
        );
        assert_eq!(
            ValidationError::UnsupportedMethod("wire".into()).to_string(),
            "Invalid payment method"
        );
    }

    #[test]
    fn test_malformed_request_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PaymentError::from(json_err);
        assert_eq!(err.to_string(), "Invalid request format");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = PaymentError::from(ValidationError::IncompleteCardDetails);
        assert_eq!(err.to_string(), "All card details are required");
        assert_eq!(err.status_code(), 400);
    }
}
