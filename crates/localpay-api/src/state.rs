//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment gateway and configuration.

use anyhow::Context;
use localpay_core::{BoxedPaymentGateway, LocalPaymentProcessor, SIMULATED_PROCESSING_DELAY};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Development origins allowed to call the API cross-origin
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Origins permitted by CORS
    pub allowed_origins: Vec<String>,
    /// Simulated processing latency per payment
    pub processing_delay: Duration,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or unparseable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
            processing_delay: lookup("PROCESSING_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.processing_delay),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            processing_delay: SIMULATED_PROCESSING_DELAY,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway handling `/api/local-payment`
    pub gateway: BoxedPaymentGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state backed by the local simulator
    pub fn new(config: AppConfig) -> Self {
        let processor = LocalPaymentProcessor::new().with_delay(config.processing_delay);
        Self::with_gateway(config, Arc::new(processor))
    }

    /// Create state with a specific gateway
    pub fn with_gateway(config: AppConfig, gateway: BoxedPaymentGateway) -> Self {
        Self { gateway, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert_eq!(config.processing_delay, Duration::from_millis(1500));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3001"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("PROCESSING_DELAY_MS", "0"),
            ("LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.processing_delay, Duration::ZERO);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("PROCESSING_DELAY_MS", "-1"),
            ("LOG_FORMAT", "yaml"),
        ]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.processing_delay, SIMULATED_PROCESSING_DELAY);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };

        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_state_uses_configured_delay() {
        let config = AppConfig {
            processing_delay: Duration::from_millis(5),
            ..AppConfig::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.gateway.gateway_name(), "local");
        assert_eq!(state.config.processing_delay, Duration::from_millis(5));
    }
}
