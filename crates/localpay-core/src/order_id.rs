//! # Order IDs
//!
//! Random, non-persisted order identifiers issued on successful payments.
//! Ids are not guaranteed unique; nothing checks for collisions.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of characters in a generated order id
pub const ORDER_ID_LENGTH: usize = 16;

/// Characters an order id is drawn from (`a-z0-9`)
pub const ORDER_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Opaque order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates order ids from a source of randomness.
///
/// `generate` draws from the calling thread's RNG, so concurrent requests
/// never share a generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderIdGenerator;

impl OrderIdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate an id using the thread-local RNG
    pub fn generate(&self) -> OrderId {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate an id from an explicit randomness source
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderId {
        let id = (0..ORDER_ID_LENGTH)
            .map(|_| ORDER_ID_ALPHABET[rng.gen_range(0..ORDER_ID_ALPHABET.len())] as char)
            .collect();
        OrderId(id)
    }
}
