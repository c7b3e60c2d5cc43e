//! Parsed document IDs

use std::fmt;

use crate::SEPARATOR;

/// A document ID split into its prefix and suffix.
///
/// Generated suffixes never contain the separator, so splitting on the last
/// colon recovers the prefix even when it contains a colon itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocId {
    prefix: String,
    suffix: String,
}

impl DocId {
    /// Split `id` on its last separator.
    ///
    /// Returns `None` if there is no separator or the suffix is empty.
    pub fn parse(id: &str) -> Option<Self> {
        let (prefix, suffix) = id.rsplit_once(SEPARATOR)?;
        if suffix.is_empty() {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, SEPARATOR, self.suffix)
    }
}
