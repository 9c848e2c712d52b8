//! # Local Payment Processor
//!
//! Simulated settlement: wait out a fixed processing delay, validate the
//! method-specific fields, and issue a random order id on success.
//! Nothing is persisted and no external processor is contacted.

use crate::error::PaymentError;
use crate::gateway::PaymentGateway;
use crate::order_id::OrderIdGenerator;
use crate::request::PaymentRequest;
use crate::response::PaymentResponse;
use crate::validator::validate;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Latency imposed on every submission, valid or not
pub const SIMULATED_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// In-process payment simulator
#[derive(Debug, Clone)]
pub struct LocalPaymentProcessor {
    delay: Duration,
    order_ids: OrderIdGenerator,
}

impl LocalPaymentProcessor {
    /// Create a processor with the standard simulated delay
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_PROCESSING_DELAY,
            order_ids: OrderIdGenerator::new(),
        }
    }

    /// Builder: override the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for LocalPaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for LocalPaymentProcessor {
    #[instrument(skip(self, request), fields(method = %request.method_name(), amount = request.amount))]
    async fn process(&self, request: PaymentRequest) -> PaymentResponse {
        // Only suspends this task; other requests keep running
        tokio::time::sleep(self.delay).await;

        let method = match validate(&request) {
            Ok(method) => method,
            Err(err) => {
                let err = PaymentError::from(err);
                warn!("Payment rejected ({}): {}", err.status_code(), err);
                return err.into();
            }
        };

        let order_id = self.order_ids.generate();
        debug!("Issued order id {}", order_id);
        info!("Payment successful via {}", method);

        PaymentResponse::success(order_id, method)
    }

    fn gateway_name(&self) -> &'static str {
        "local"
    }
}
