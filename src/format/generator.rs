//! Document ID assembly

use tracing::debug;

use super::{IdFormat, normalize_prefix};
use crate::error::Result;
use crate::sources::{Clock, SystemClock, UuidSource, UuidV4};
use crate::suffix::{EntropySource, OsEntropy, random_suffix_from};
use crate::{CRYPTO_SUFFIX_LENGTH, SEPARATOR, SHORT_SUFFIX_LENGTH};

/// Builds document IDs from its suffix sources.
///
/// Holds no mutable state; one generator can serve any number of threads.
pub struct DocIdGenerator {
    entropy: Box<dyn EntropySource>,
    clock: Box<dyn Clock>,
    uuids: Box<dyn UuidSource>,
}

impl DocIdGenerator {
    /// Generator backed by the OS RNG, the system clock and v4 UUIDs
    pub fn new() -> Self {
        Self::with_sources(OsEntropy, SystemClock, UuidV4)
    }

    /// Generator with caller-supplied sources
    pub fn with_sources(
        entropy: impl EntropySource + 'static,
        clock: impl Clock + 'static,
        uuids: impl UuidSource + 'static,
    ) -> Self {
        Self {
            entropy: Box::new(entropy),
            clock: Box::new(clock),
            uuids: Box::new(uuids),
        }
    }

    /// Generate an ID for a raw format selector.
    ///
    /// Unknown selectors fall back to the short format.
    pub fn generate(&self, prefix: &str, format: &str) -> Result<String> {
        self.generate_with(prefix, IdFormat::from_selector(format))
    }

    /// Generate an ID of the given format
    pub fn generate_with(&self, prefix: &str, format: IdFormat) -> Result<String> {
        let prefix = normalize_prefix(prefix);

        let suffix = match format {
            IdFormat::Uuid => self.uuids.new_uuid(),
            IdFormat::Timestamp => self.clock.now_nanos().to_string(),
            IdFormat::Short => random_suffix_from(self.entropy.as_ref(), SHORT_SUFFIX_LENGTH)?,
            IdFormat::Crypto => random_suffix_from(self.entropy.as_ref(), CRYPTO_SUFFIX_LENGTH)?,
        };

        debug!(prefix = %prefix, format = %format, "generated document id");
        Ok(format!("{prefix}{SEPARATOR}{suffix}"))
    }
}

impl Default for DocIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a document ID with the live sources.
///
/// # Example
/// ```
/// let id = docid::doc_id("Invoice Data", "short").unwrap();
/// assert!(id.starts_with("invoice_data:"));
/// assert_eq!(id.len(), "invoice_data:".len() + 10);
/// ```
///
/// # Errors
/// Fails only if the OS random source is unavailable.
pub fn doc_id(prefix: &str, format: &str) -> Result<String> {
    DocIdGenerator::new().generate(prefix, format)
}

/// Generate a document ID, panicking if the OS random source is unavailable.
///
/// # Panics
/// On entropy failure. A truncated or zeroed suffix is never returned.
pub fn doc_id_or_panic(prefix: &str, format: &str) -> String {
    match doc_id(prefix, format) {
        Ok(id) => id,
        Err(err) => panic!("document id generation failed: {err}"),
    }
}
