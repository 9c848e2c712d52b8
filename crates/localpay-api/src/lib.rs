//! # localpay-api
//!
//! HTTP API layer for the localpay payment simulator.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The simulated payment endpoint and a liveness check
//! - CORS for local frontend development
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/local-payment` | Process a UPI, bank or card payment |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
