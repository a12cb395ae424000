//! The transaction view handed to contract verification.
//!
//! A view is the fully resolved form of a transaction: the states its inputs
//! point at (not the references), the outputs it proposes, and every
//! attached command with its verified signers. Assembling it is the caller's
//! job; contracts only read it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::command::Command;
use crate::config::HASH_OUTPUT_LENGTH;
use crate::crypto::hash::domain_separated_hash;
use crate::state::LedgerState;

/// BLAKE3 context for transaction ids.
const TX_ID_CONTEXT: &str = "ledger-protocol 2026 transaction id v1";

/// Errors raised while encoding a view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to encode transaction view: {0}")]
    Encoding(#[from] bincode::Error),
}

/// 32-byte transaction id, rendered as hex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId([u8; HASH_OUTPUT_LENGTH]);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", &hex::encode(self.0)[..16])
    }
}

/// Inputs, outputs and commands of one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    /// Resolved states being consumed, in transaction order.
    pub inputs: Vec<LedgerState>,
    /// States being created, in transaction order.
    pub outputs: Vec<LedgerState>,
    /// Every command attached to the transaction, of any contract.
    pub commands: Vec<Command>,
}

impl TransactionView {
    pub fn new(inputs: Vec<LedgerState>, outputs: Vec<LedgerState>, commands: Vec<Command>) -> Self {
        Self {
            inputs,
            outputs,
            commands,
        }
    }

    /// Commands belonging to the token contract, in attachment order.
    pub fn token_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|c| c.value.is_token_command())
    }

    /// The one token command, or `None` if there are zero or several.
    pub fn single_token_command(&self) -> Option<&Command> {
        let mut commands = self.token_commands();
        match (commands.next(), commands.next()) {
            (Some(command), None) => Some(command),
            _ => None,
        }
    }

    /// Canonical bincode encoding of the whole view.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ViewError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deterministic id over the canonical encoding. Identical views give
    /// identical ids on every machine.
    pub fn id(&self) -> Result<TransactionId, ViewError> {
        let bytes = self.canonical_bytes()?;
        Ok(TransactionId(domain_separated_hash(TX_ID_CONTEXT, &bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::TestIdentity;
    use crate::state::TokenRecord;
    use crate::transaction::TokenCommand;

    fn sample_view() -> TransactionView {
        let alice = TestIdentity::new("Alice", "London", "GB");
        let bob = TestIdentity::new("Bob", "New York", "US");
        let record = TokenRecord::new(alice.party().clone(), bob.party().clone(), 10);
        TransactionView::new(
            vec![record.into()],
            vec![],
            vec![Command::new(
                TokenCommand::Redeem,
                [alice.public_key(), bob.public_key()],
            )],
        )
    }

    #[test]
    fn id_is_deterministic() {
        let a = sample_view().id().unwrap();
        let b = sample_view().id().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string().len(), 64);
    }

    #[test]
    fn id_changes_with_content() {
        let base = sample_view();
        let mut changed = base.clone();
        changed.commands[0].value = TokenCommand::Transfer;
        assert_ne!(base.id().unwrap(), changed.id().unwrap());
    }

    #[test]
    fn single_token_command_ignores_foreign_commands() {
        let mut view = sample_view();
        view.commands
            .push(Command::new(TokenCommand::Unknown("Dummy".into()), []));
        assert_eq!(
            view.single_token_command().map(|c| &c.value),
            Some(&TokenCommand::Redeem)
        );
        assert_eq!(view.token_commands().count(), 1);
    }

    #[test]
    fn single_token_command_rejects_duplicates_and_absence() {
        let mut view = sample_view();
        view.commands.push(Command::new(TokenCommand::Redeem, []));
        assert!(view.single_token_command().is_none());

        view.commands.clear();
        assert!(view.single_token_command().is_none());
    }
}
