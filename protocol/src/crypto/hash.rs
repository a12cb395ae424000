//! # Hashing Utilities
//!
//! - **SHA-256** derives deterministic key seeds from party names.
//! - **BLAKE3** (in `derive_key` mode) produces transaction ids, with a
//!   context string per use so ids of different kinds never collide.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; HASH_OUTPUT_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// BLAKE3 keyed by a context string.
///
/// `domain_separated_hash("a", x)` and `domain_separated_hash("b", x)` never
/// agree, and neither equals the plain BLAKE3 digest of `x`.
pub fn domain_separated_hash(context: &str, data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = blake3::Hasher::new_derive_key(context);
    hasher.update(data);
    *hasher.finalize().as_bytes()
}
