//! # Request Validation
//!
//! Presence checks on the fields of the selected payment method.
//! No format checks (IFSC, Luhn, expiry parsing) are performed.

use crate::error::ValidationError;
use crate::request::{PaymentDetails, PaymentMethod, PaymentRequest};

/// Validate a payment request.
///
/// Returns the validated method, or the first failing condition for it.
pub fn validate(request: &PaymentRequest) -> Result<PaymentMethod, ValidationError> {
    match &request.details {
        PaymentDetails::Upi { upi_id } => {
            if upi_id.is_empty() {
                return Err(ValidationError::MissingUpiId);
            }
            Ok(PaymentMethod::Upi)
        }
        PaymentDetails::Bank {
            account_number,
            ifsc_code,
            account_name,
        } => {
            if any_empty(&[account_number, ifsc_code, account_name]) {
                return Err(ValidationError::IncompleteBankDetails);
            }
            Ok(PaymentMethod::Bank)
        }
        PaymentDetails::Card {
            card_number,
            expiry_date,
            name_on_card,
        } => {
            if any_empty(&[card_number, expiry_date, name_on_card]) {
                return Err(ValidationError::IncompleteCardDetails);
            }
            Ok(PaymentMethod::Card)
        }
        PaymentDetails::Unsupported { method } => {
            Err(ValidationError::UnsupportedMethod(method.clone()))
        }
    }
}

fn any_empty(fields: &[&String]) -> bool {
    fields.iter().any(|f| f.is_empty())
}
