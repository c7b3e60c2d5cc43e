//! Document ID formatting
//!
//! Normalizes the record-type prefix and dispatches on the format selector to
//! pick a suffix source. The result is always `<prefix>:<suffix>`.

mod doc_id;
mod generator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CRYPTO_SUFFIX_LENGTH, DEFAULT_PREFIX, SHORT_SUFFIX_LENGTH};

pub use doc_id::DocId;
pub use generator::{DocIdGenerator, doc_id, doc_id_or_panic};

/// Suffix strategy for a document ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdFormat {
    /// Hyphenated random UUID
    Uuid,
    /// Decimal nanosecond timestamp
    Timestamp,
    /// 10 random alphanumeric characters
    #[default]
    Short,
    /// 16 random alphanumeric characters
    Crypto,
}

impl IdFormat {
    /// Map a selector string to a format.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognized, including
    /// the empty string, selects `Short`.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "uuid" => IdFormat::Uuid,
            "timestamp" => IdFormat::Timestamp,
            "crypto" => IdFormat::Crypto,
            _ => IdFormat::Short,
        }
    }

    /// Canonical selector string
    pub fn as_str(&self) -> &'static str {
        match self {
            IdFormat::Uuid => "uuid",
            IdFormat::Timestamp => "timestamp",
            IdFormat::Short => "short",
            IdFormat::Crypto => "crypto",
        }
    }

    /// Length of the random suffix, or `None` for formats with external sources
    pub fn suffix_len(&self) -> Option<usize> {
        match self {
            IdFormat::Short => Some(SHORT_SUFFIX_LENGTH),
            IdFormat::Crypto => Some(CRYPTO_SUFFIX_LENGTH),
            IdFormat::Uuid | IdFormat::Timestamp => None,
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(IdFormat::from_selector(s))
    }
}

impl From<String> for IdFormat {
    fn from(s: String) -> Self {
        IdFormat::from_selector(&s)
    }
}

impl From<IdFormat> for String {
    fn from(format: IdFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Normalize a record-type prefix.
///
/// Empty input becomes `doc`, then the prefix is lowercased and every space
/// is replaced with an underscore. Nothing else is touched, so a colon in the
/// prefix passes through.
///
/// Lowercasing maps one char at a time with the simple Unicode mapping, with
/// no context rules: a final `Σ` becomes `σ`, and `İ` becomes a plain `i`.
///
/// # Example
/// ```
/// use docid::format::normalize_prefix;
///
/// assert_eq!(normalize_prefix("Invoice Data"), "invoice_data");
/// assert_eq!(normalize_prefix(""), "doc");
/// ```
pub fn normalize_prefix(prefix: &str) -> String {
    let prefix = if prefix.is_empty() { DEFAULT_PREFIX } else { prefix };

    let mut out = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        match c {
            ' ' => out.push('_'),
            // Full mapping would give "i\u{307}"
            '\u{130}' => out.push('i'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}
