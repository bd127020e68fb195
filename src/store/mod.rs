//! Credential store — persistence for salt/hash pairs.
//!
//! This module provides:
//! - The `CredentialStore` trait the hasher talks to
//! - `CredentialRecord` (persisted row, hex text) and `Credential` (decoded)
//! - A SQLite implementation (`sqlite`) and an in-memory one (`memory`)
//!
//! Hash and salt cross the storage boundary as lowercase hex text.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::crypto::{KEY_LEN, SALT_LEN};
use crate::errors::{PwGuardError, Result};

/// Persistence capability injected into the hasher.
pub trait CredentialStore {
    /// Persist one `(hash, salt)` pair and return its id.
    fn insert_credential(&mut self, hash: &[u8], salt: &[u8]) -> Result<i64>;

    /// Return every stored record in insertion order.
    fn list_credentials(&self) -> Result<Vec<CredentialRecord>>;
}

/// A row as it sits in the `passwords` table.
///
/// A column holding anything other than text (NULL, BLOB, number) is
/// read as `None` and rejected by `decode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: i64,
    /// Hex-encoded derived key (64 characters).
    pub hash: Option<String>,
    /// Hex-encoded salt (32 characters).
    pub salt: Option<String>,
}

/// A record whose hash and salt decoded to the expected lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: i64,
    pub hash: [u8; KEY_LEN],
    pub salt: [u8; SALT_LEN],
}

impl CredentialRecord {
    /// Decode the hex columns, checking lengths.
    pub fn decode(&self) -> Result<Credential> {
        Ok(Credential {
            id: self.id,
            hash: decode_field(self.id, "hash", self.hash.as_deref())?,
            salt: decode_field(self.id, "salt", self.salt.as_deref())?,
        })
    }
}

fn decode_field<const N: usize>(id: i64, column: &str, text: Option<&str>) -> Result<[u8; N]> {
    let text = text.ok_or_else(|| PwGuardError::MalformedRecord {
        id,
        reason: format!("{column}: missing or not text"),
    })?;
    let mut out = [0u8; N];
    hex::decode_to_slice(text, &mut out).map_err(|e| PwGuardError::MalformedRecord {
        id,
        reason: format!("{column}: {e}"),
    })?;
    Ok(out)
}

/// Lowercase hex, as written to the `hash` and `salt` columns.
pub(crate) fn encode_field(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
