//! # Key Management
//!
//! Ed25519 keypairs and the public key identifiers that stand for parties on
//! the ledger.
//!
//! Validation never touches signatures. By the time a transaction reaches a
//! contract, upstream code has already checked every signature and reduced
//! the result to a set of [`PublicKeyId`]s. This module only has to make
//! those identifiers cheap to compare, order and hash.
//!
//! Key bytes of signing keys are never logged or serialized.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{SIGNING_KEY_LENGTH, VERIFYING_KEY_LENGTH};

/// Errors that can occur when decoding public keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid public key encoding: {0}")]
    InvalidHex(String),
}

/// An Ed25519 keypair owned by a single party.
///
/// Intentionally not `Serialize`. Signing material stays in the process that
/// created it.
pub struct LedgerKeypair {
    signing_key: SigningKey,
}

/// The public half of a party's keypair, as it appears in signer sets.
///
/// Ordering and hashing follow the raw bytes, so any two validators build
/// identical sets from identical keys. Deserialized keys go through
/// [`PublicKeyId::try_from_slice`], so off-curve bytes never get in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPublicKey")]
pub struct PublicKeyId {
    bytes: [u8; VERIFYING_KEY_LENGTH],
}

/// Unchecked wire form of [`PublicKeyId`].
#[derive(Deserialize)]
struct RawPublicKey {
    bytes: [u8; VERIFYING_KEY_LENGTH],
}

impl TryFrom<RawPublicKey> for PublicKeyId {
    type Error = KeyError;

    fn try_from(raw: RawPublicKey) -> Result<Self, Self::Error> {
        Self::try_from_slice(&raw.bytes)
    }
}

impl LedgerKeypair {
    /// Generate a fresh keypair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Construct a keypair deterministically from a 32-byte seed.
    ///
    /// A weak seed gives a weak key. Outside of tests the seed must come
    /// from a CSPRNG or a proper KDF.
    pub fn from_seed(seed: &[u8; SIGNING_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// The public key identifier for this keypair.
    pub fn public_key(&self) -> PublicKeyId {
        PublicKeyId {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }
}

impl Clone for LedgerKeypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for LedgerKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerKeypair(pub={})", self.public_key())
    }
}

// ---------------------------------------------------------------------------
// PublicKeyId
// ---------------------------------------------------------------------------

impl PublicKeyId {
    /// Wrap raw bytes without curve validation.
    ///
    /// Use [`try_from_slice`](Self::try_from_slice) for bytes that arrive
    /// from outside the process. Serde already does.
    pub fn from_bytes(bytes: [u8; VERIFYING_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse a public key from a byte slice, checking both the length and
    /// that the bytes decode to an Ed25519 point.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; VERIFYING_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Self::try_from_slice(&bytes)
    }

    /// Lower-case hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for PublicKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyId({})", &self.to_hex()[..16])
    }
}
