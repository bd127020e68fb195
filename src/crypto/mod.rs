//! Cryptographic primitives for pwguard.
//!
//! This module provides:
//! - The entropy source abstraction over the OS CSPRNG (`entropy`)
//! - PBKDF2-HMAC-SHA256 key derivation and salt generation (`kdf`)

pub mod entropy;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, generate_salt, ...};
pub use entropy::{EntropySource, OsEntropy};
pub use kdf::{
    derive_key, generate_salt, generate_salt_with, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN,
};
