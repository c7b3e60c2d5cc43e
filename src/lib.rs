//! # docid
//!
//! Namespaced document IDs for key-value and document stores.
//!
//! An ID has the form `<prefix>:<suffix>`. The prefix names the record type
//! and is normalized (lowercased, spaces to underscores, empty becomes `doc`).
//! The suffix depends on the format selector:
//!
//! - `uuid` - a random v4 UUID
//! - `timestamp` - nanoseconds since the Unix epoch
//! - `short` - 10 random alphanumeric characters
//! - `crypto` - 16 random alphanumeric characters
//! - anything else - same as `short`
//!
//! Random suffixes come from the OS random source through rejection sampling,
//! so every character is exactly uniform over `[a-zA-Z0-9]`.
//!
//! ## Example
//!
//! ```
//! use docid::{doc_id, DocId};
//!
//! let id = doc_id("Invoice Data", "crypto").unwrap();
//! let parsed = DocId::parse(&id).unwrap();
//! assert_eq!(parsed.prefix(), "invoice_data");
//! assert_eq!(parsed.suffix().len(), 16);
//! ```

pub mod error;
pub mod format;
pub mod sources;
pub mod suffix;

// Re-export main types
pub use error::{DocIdError, Result};
pub use format::{DocId, DocIdGenerator, IdFormat, doc_id, doc_id_or_panic, normalize_prefix};
pub use sources::{Clock, SystemClock, UuidSource, UuidV4};
pub use suffix::{EntropySource, OsEntropy, random_suffix};

/// Prefix used when the caller passes an empty one
pub const DEFAULT_PREFIX: &str = "doc";

/// Separator between prefix and suffix
pub const SEPARATOR: char = ':';

/// Suffix length for the `short` format and unknown selectors
pub const SHORT_SUFFIX_LENGTH: usize = 10;

/// Suffix length for the `crypto` format
pub const CRYPTO_SUFFIX_LENGTH: usize = 16;
