//! Commands and signer sets.
//!
//! A command states what a transaction intends to do and which keys must
//! sign for it. The token contract recognises exactly three intents; any
//! command issued by another contract is [`TokenCommand::Unknown`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::crypto::keys::PublicKeyId;

// ---------------------------------------------------------------------------
// TokenCommand
// ---------------------------------------------------------------------------

/// Intent declared by a command.
///
/// Closed on purpose: code that matches on it must handle every case, so a
/// new command shape cannot silently skip validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCommand {
    /// Create new token records.
    Issue,
    /// Move value between holders.
    Transfer,
    /// Retire value permanently.
    Redeem,
    /// A command of some other contract, identified by its type name.
    Unknown(String),
}

impl TokenCommand {
    /// Whether this command belongs to the token contract.
    pub fn is_token_command(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TokenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => write!(f, "Issue"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Redeem => write!(f, "Redeem"),
            Self::Unknown(name) => write!(f, "Unknown({})", name),
        }
    }
}

// ---------------------------------------------------------------------------
// SignerSet
// ---------------------------------------------------------------------------

/// Keys that signed a command, already verified upstream.
///
/// Backed by a `BTreeSet` so iteration order and serialized form depend only
/// on the keys, never on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignerSet(BTreeSet<PublicKeyId>);

impl SignerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &PublicKeyId) -> bool {
        self.0.contains(key)
    }

    /// True if every key yielded by `keys` is in the set. An empty
    /// iterator is trivially covered.
    pub fn contains_all<I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = PublicKeyId>,
    {
        keys.into_iter().all(|key| self.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PublicKeyId> for SignerSet {
    fn from_iter<I: IntoIterator<Item = PublicKeyId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A command as attached to a transaction: the intent plus its signers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    pub value: TokenCommand,
    pub signers: SignerSet,
}

impl Command {
    pub fn new(value: TokenCommand, signers: impl IntoIterator<Item = PublicKeyId>) -> Self {
        Self {
            value,
            signers: signers.into_iter().collect(),
        }
    }
}
