//! # Payment Gateway Trait
//!
//! The seam between the HTTP layer and whatever settles payments.
//! The only implementation here is the local simulator
//! ([`LocalPaymentProcessor`](crate::processor::LocalPaymentProcessor)),
//! but handlers only ever see a [`BoxedPaymentGateway`].
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           PaymentGateway (trait)            │
//! │  ├── process()                              │
//! │  └── gateway_name()                         │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!              ┌────────┴────────┐
//!              │ LocalPayment    │
//!              │   Processor     │
//!              └─────────────────┘
//! ```

use crate::request::PaymentRequest;
use crate::response::PaymentResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Settles a single payment request.
///
/// Implementations must be stateless across calls or otherwise safe to
/// invoke from many concurrent tasks.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Process a decoded request into a success or failure response.
    ///
    /// Never fails at the transport level; every rejection is a
    /// [`PaymentResponse::Failure`].
    async fn process(&self, request: PaymentRequest) -> PaymentResponse;

    /// Gateway name (for logging)
    fn gateway_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
