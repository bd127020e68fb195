//! In-memory credential store, for tests and embedding.

use super::{encode_field, CredentialRecord, CredentialStore};
use crate::errors::{PwGuardError, Result};

/// A `Vec`-backed store that keeps the same hex boundary as SQLite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<CredentialRecord>,
    next_id: i64,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row verbatim, bypassing hex encoding.
    pub fn insert_raw(&mut self, hash: &str, salt: &str) -> i64 {
        self.next_id += 1;
        self.records.push(CredentialRecord {
            id: self.next_id,
            hash: Some(hash.to_string()),
            salt: Some(salt.to_string()),
        });
        self.next_id
    }

    /// Make every subsequent call fail with `StorageUnavailable`.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(PwGuardError::StorageUnavailable(
                "in-memory store marked unavailable".into(),
            ));
        }
        Ok(())
    }
}

impl CredentialStore for MemoryStore {
    fn insert_credential(&mut self, hash: &[u8], salt: &[u8]) -> Result<i64> {
        self.check_available()?;
        Ok(self.insert_raw(&encode_field(hash), &encode_field(salt)))
    }

    fn list_credentials(&self) -> Result<Vec<CredentialRecord>> {
        self.check_available()?;
        Ok(self.records.clone())
    }
}
