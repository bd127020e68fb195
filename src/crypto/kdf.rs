//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed. Its cost (tens of milliseconds per call)
//! is what slows down offline guessing, so callers that need a responsive
//! UI should run derivation on a worker thread instead of lowering it.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use super::entropy::{EntropySource, OsEntropy};
use crate::errors::Result;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (one SHA-256 output).
pub const KEY_LEN: usize = 32;

/// Number of HMAC-SHA256 applications per derivation.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt will always produce the same key.
pub fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Generate a random 16-byte salt from the OS CSPRNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    generate_salt_with(&mut OsEntropy)
}

/// Generate a random 16-byte salt from the given entropy source.
pub fn generate_salt_with<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    entropy.fill(&mut salt)?;
    Ok(salt)
}
