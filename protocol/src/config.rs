//! # Protocol Configuration & Constants
//!
//! Every fixed parameter of the token ledger lives here. Validators on
//! different machines must agree on all of them, so none of these values
//! are read from files or the environment at runtime.

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// Identifier of the fungible token contract. Every [`TokenRecord`] is
/// governed by this contract, and only commands of this contract count
/// when a transaction is checked against it.
///
/// [`TokenRecord`]: crate::state::TokenRecord
pub const TOKEN_CONTRACT_ID: &str = "com.ledger.contracts.TokenContract";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 signing key (seed) length in bytes.
pub const SIGNING_KEY_LENGTH: usize = 32;

/// Public (verifying) key length in bytes.
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Digest length in bytes for both SHA-256 and BLAKE3.
pub const HASH_OUTPUT_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Party Names
// ---------------------------------------------------------------------------

/// Upper bound on the organisation attribute of a party name.
pub const MAX_ORGANISATION_LENGTH: usize = 128;

/// Upper bound on the locality attribute of a party name.
pub const MAX_LOCALITY_LENGTH: usize = 64;

/// Country codes are ISO 3166-1 alpha-2.
pub const COUNTRY_CODE_LENGTH: usize = 2;
