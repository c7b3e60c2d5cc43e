//! Secure byte sources

use rand::{TryRngCore, rngs::OsRng};

use crate::error::{DocIdError, Result};

/// Supplies cryptographically secure random bytes.
///
/// Implementations must be safe to call from many threads at once and must
/// report failure as an error rather than leaving the buffer zeroed.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Operating system random number generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| DocIdError::EntropyUnavailable(e.to_string()))
    }
}
