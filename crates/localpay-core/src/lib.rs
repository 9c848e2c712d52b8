//! # localpay-core
//!
//! Core types and logic for the localpay payment simulator.
//!
//! This crate provides:
//! - `PaymentRequest` / `PaymentDetails`, a tagged union over UPI, bank and card payments
//! - `validate` for method-specific presence checks
//! - `OrderIdGenerator` for random 16-character order ids
//! - `PaymentGateway` trait and the `LocalPaymentProcessor` simulator
//! - `PaymentResponse` and typed errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use localpay_core::{LocalPaymentProcessor, PaymentGateway, PaymentRequest};
//!
//! let processor = LocalPaymentProcessor::new();
//! let request = PaymentRequest::from_json(br#"{"method":"upi","upiId":"alice@bank","amount":100}"#)?;
//!
//! // Waits out the simulated delay, then validates and issues an order id
//! let response = processor.process(request).await;
//! assert!(response.is_success());
//! ```

pub mod error;
pub mod gateway;
pub mod order_id;
pub mod processor;
pub mod request;
pub mod response;
pub mod validator;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult, ValidationError};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order_id::{OrderId, OrderIdGenerator, ORDER_ID_ALPHABET, ORDER_ID_LENGTH};
pub use processor::{LocalPaymentProcessor, SIMULATED_PROCESSING_DELAY};
pub use request::{PaymentDetails, PaymentMethod, PaymentRequest};
pub use response::PaymentResponse;
pub use validator::validate;
