//! # Ledger States
//!
//! What a transaction can consume or create. Token records belong to the
//! token contract; everything else is carried opaquely as a
//! [`LedgerState::Foreign`] state so that a contract can tell "not mine"
//! apart from "mine" without knowing other contracts' types.

pub mod token;

pub use token::TokenRecord;

use serde::{Deserialize, Serialize};

use crate::config::TOKEN_CONTRACT_ID;

/// A state referenced by a transaction, tagged by governing contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerState {
    /// A fungible token record governed by [`TOKEN_CONTRACT_ID`].
    Token(TokenRecord),
    /// A state governed by some other contract. `data` is that contract's
    /// own encoding and is never interpreted here.
    Foreign { contract_id: String, data: Vec<u8> },
}

impl LedgerState {
    pub fn foreign(contract_id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Foreign {
            contract_id: contract_id.into(),
            data: data.into(),
        }
    }

    /// The token record, if this is one.
    pub fn as_token(&self) -> Option<&TokenRecord> {
        match self {
            Self::Token(record) => Some(record),
            Self::Foreign { .. } => None,
        }
    }

    /// Id of the contract that governs this state.
    pub fn contract_id(&self) -> &str {
        match self {
            Self::Token(_) => TOKEN_CONTRACT_ID,
            Self::Foreign { contract_id, .. } => contract_id,
        }
    }
}

impl From<TokenRecord> for LedgerState {
    fn from(record: TokenRecord) -> Self {
        Self::Token(record)
    }
}
