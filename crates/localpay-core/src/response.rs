//! # Payment Response
//!
//! Outcome of a single payment submission. Exactly one variant is populated;
//! the wire form carries `success` plus either `orderId` and `message`, or `error`.

use crate::error::PaymentError;
use crate::order_id::OrderId;
use crate::request::PaymentMethod;
use serde::{Serialize, Serializer};

/// Result of processing a payment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentResponse {
    /// Payment accepted and an order id issued
    Success { order_id: OrderId, message: String },
    /// Payment rejected
    Failure { error: String },
}

impl PaymentResponse {
    /// Success response with the standard confirmation message
    pub fn success(order_id: OrderId, method: PaymentMethod) -> Self {
        PaymentResponse::Success {
            order_id,
            message: format!("Payment successful via {}", method),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        PaymentResponse::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResponse::Success { .. })
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            PaymentResponse::Success { order_id, .. } => Some(order_id),
            PaymentResponse::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            PaymentResponse::Success { message, .. } => Some(message),
            PaymentResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PaymentResponse::Success { .. } => None,
            PaymentResponse::Failure { error } => Some(error),
        }
    }
}

impl From<PaymentError> for PaymentResponse {
    fn from(err: PaymentError) -> Self {
        PaymentResponse::failure(err.to_string())
    }
}

/// Flat wire shape of a payment response
#[derive(Serialize)]
struct PaymentResponseBody<'a> {
    success: bool,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    order_id: Option<&'a OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for PaymentResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PaymentResponseBody {
            success: self.is_success(),
            order_id: self.order_id(),
            message: self.message(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::order_id::OrderIdGenerator;
    use serde_json::json;

    #[test]
    fn test_success_wire_shape() {
        let order_id = OrderIdGenerator::new().generate();
        let response = PaymentResponse::success(order_id.clone(), PaymentMethod::Upi);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "orderId": order_id.as_str(),
                "message": "Payment successful via upi"
            })
        );
    }

    #[test]
    fn test_failure_wire_shape() {
        let response = PaymentResponse::failure("All card details are required");

        assert!(!response.is_success());
        assert!(response.order_id().is_none());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "error": "All card details are required"
            })
        );
    }

    #[test]
    fn test_failure_from_payment_error() {
        let response = PaymentResponse::from(PaymentError::from(ValidationError::MissingUpiId));
        assert_eq!(response, PaymentResponse::failure("UPI ID is required"));
    }
}
