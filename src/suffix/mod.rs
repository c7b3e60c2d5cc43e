//! Random suffix generation
//!
//! Produces uniformly distributed alphanumeric strings from a cryptographically
//! secure byte source using rejection sampling.

mod entropy;
mod random;

pub use entropy::{EntropySource, OsEntropy};
pub use random::{ALPHABET, REJECTION_THRESHOLD, random_suffix, random_suffix_from};

#[cfg(test)]
mod tests;
