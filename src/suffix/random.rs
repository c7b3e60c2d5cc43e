//! Unbiased alphanumeric strings via rejection sampling

use tracing::warn;

use super::entropy::{EntropySource, OsEntropy};
use crate::error::{DocIdError, Result};

/// Characters used for suffix generation
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Bytes at or above this value are rejected.
///
/// 248 is the largest multiple of 62 not exceeding 256, so `byte % 62` over
/// `0..248` hits every index exactly four times.
pub const REJECTION_THRESHOLD: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generate a random suffix of `length` characters from the OS random source.
///
/// # Example
/// ```
/// use docid::suffix::random_suffix;
///
/// let suffix = random_suffix(10).unwrap();
/// assert_eq!(suffix.len(), 10);
/// assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_suffix(length: usize) -> Result<String> {
    random_suffix_from(&OsEntropy, length)
}

/// Generate a random suffix of `length` characters from `source`.
///
/// Every character is drawn independently with probability exactly 1/62.
/// Bytes are read in blocks twice the size of what is still missing; a block
/// is consumed front to back and whatever remains after the suffix is complete
/// is dropped, never reused.
///
/// # Errors
/// * `InvalidArgument` if `length` is zero
/// * `EntropyUnavailable` if `source` fails; no partial suffix is returned
pub fn random_suffix_from<S>(source: &S, length: usize) -> Result<String>
where
    S: EntropySource + ?Sized,
{
    if length == 0 {
        return Err(DocIdError::InvalidArgument(
            "suffix length must be positive".to_string(),
        ));
    }

    let mut out = String::with_capacity(length);
    let mut accepted = 0;
    let mut block = Vec::new();

    while accepted < length {
        let remaining = length - accepted;
        block.resize(remaining.saturating_mul(2), 0);

        source.fill(&mut block).inspect_err(|err| {
            warn!(%err, length, accepted, "entropy source failed");
        })?;

        for &byte in block.iter().filter(|&&b| b < REJECTION_THRESHOLD).take(remaining) {
            out.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
            accepted += 1;
        }
    }

    Ok(out)
}
