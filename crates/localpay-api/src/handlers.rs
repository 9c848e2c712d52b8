//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//! The payment body is taken as raw bytes so a decode failure maps to the
//! API's own failure response rather than axum's extractor rejection.

use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use localpay_core::{PaymentError, PaymentRequest, PaymentResponse};
use tracing::{info, instrument, warn};

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<PaymentResponse>) {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(PaymentResponse::from(err)))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Server is running")
}

/// Process a local (simulated) payment
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn process_local_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<PaymentResponse>) {
    let request = match PaymentRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected payment body: {:?}", e);
            return payment_error_to_response(e);
        }
    };

    info!(
        "Processing payment: method={}, amount={}, gateway={}",
        request.method_name(),
        request.amount,
        state.gateway.gateway_name()
    );

    let response = state.gateway.process(request).await;

    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}
