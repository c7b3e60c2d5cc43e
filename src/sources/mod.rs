//! Non-random suffix sources: wall clock and UUIDs

mod clock;
mod unique;

pub use clock::{Clock, SystemClock};
pub use unique::{UuidSource, UuidV4};
