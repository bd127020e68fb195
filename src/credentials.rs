//! Password storage and verification.
//!
//! Nothing here holds state between calls: the store and the entropy
//! source are passed in, and each call performs at most one insert or
//! one bulk read against the store.
//!
//! Verification scans every stored credential because records carry no
//! account identifier. A multi-user deployment must key lookups by
//! account instead.

use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::{derive_key, generate_salt_with, EntropySource, OsEntropy};
use crate::errors::Result;
use crate::store::CredentialStore;

/// Hash `password` under a fresh OS-random salt and persist it.
///
/// Returns the id the store assigned to the new record.
pub fn store_password<S>(store: &mut S, password: &[u8]) -> Result<i64>
where
    S: CredentialStore + ?Sized,
{
    store_password_with(store, &mut OsEntropy, password)
}

/// Like `store_password`, drawing the salt from `entropy`.
///
/// If no salt can be generated, the store is never touched.
pub fn store_password_with<S, E>(store: &mut S, entropy: &mut E, password: &[u8]) -> Result<i64>
where
    S: CredentialStore + ?Sized,
    E: EntropySource + ?Sized,
{
    let salt = generate_salt_with(entropy)?;
    let hash = Zeroizing::new(derive_key(password, &salt));
    let id = store.insert_credential(&hash[..], &salt)?;
    debug!(id, "stored credential");
    Ok(id)
}

/// Check `candidate` against every stored credential.
///
/// Malformed records are reported and skipped.
pub fn verify_password<S>(store: &S, candidate: &[u8]) -> Result<bool>
where
    S: CredentialStore + ?Sized,
{
    for record in store.list_credentials()? {
        let credential = match record.decode() {
            Ok(c) => c,
            Err(e) => {
                warn!(id = record.id, error = %e, "skipping malformed credential record");
                continue;
            }
        };

        let derived = Zeroizing::new(derive_key(candidate, &credential.salt));
        if keys_match(&derived[..], &credential.hash) {
            debug!(id = credential.id, "password matched");
            return Ok(true);
        }
    }

    Ok(false)
}

/// Compare two keys in time independent of where they differ.
pub fn keys_match(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
