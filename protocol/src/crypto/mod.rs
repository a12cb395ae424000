//! # Cryptographic Primitives
//!
//! Thin wrappers over audited implementations: Ed25519 keys for party
//! identities, SHA-256 and BLAKE3 for hashing. Signature verification is
//! not done here; contracts only ever see already-verified signer keys.

pub mod hash;
pub mod keys;

pub use hash::{domain_separated_hash, sha256};
pub use keys::{KeyError, LedgerKeypair, PublicKeyId};
