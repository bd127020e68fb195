use thiserror::Error;

/// All errors that can occur in pwguard.
#[derive(Debug, Error)]
pub enum PwGuardError {
    // --- Collaborator errors ---
    #[error("Credential store unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Secure randomness unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Malformed credential record {id}: {reason}")]
    MalformedRecord { id: i64, reason: String },

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl From<rusqlite::Error> for PwGuardError {
    fn from(e: rusqlite::Error) -> Self {
        PwGuardError::StorageUnavailable(e.to_string())
    }
}

/// Convenience type alias for pwguard results.
pub type Result<T> = std::result::Result<T, PwGuardError>;
