//! UUID source used by the `uuid` format

use uuid::Uuid;

/// Generates standards-compliant unique identifiers as text.
pub trait UuidSource: Send + Sync {
    fn new_uuid(&self) -> String;
}

/// Random (version 4) UUIDs in the hyphenated 36-character form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl UuidSource for UuidV4 {
    fn new_uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
