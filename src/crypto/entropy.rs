//! Sources of cryptographically secure random bytes.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{PwGuardError, Result};

/// Something that can fill a buffer with secure random bytes.
///
/// Implementations must fail rather than fall back to a weaker generator.
pub trait EntropySource {
    /// Fill `dest` completely, or return `EntropyUnavailable`.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| PwGuardError::EntropyUnavailable(format!("OS random source: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_whole_buffer() {
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        // 512 zero bits from a CSPRNG would be astronomically unlikely.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn os_entropy_accepts_empty_buffer() {
        let mut buf: [u8; 0] = [];
        assert!(OsEntropy.fill(&mut buf).is_ok());
    }
}
