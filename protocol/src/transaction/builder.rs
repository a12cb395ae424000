//! Transaction view construction via the builder pattern.
//!
//! Mirrors how tests and flows describe a transaction: add inputs, add
//! outputs, attach commands with their signers, then `.build()`.

use super::command::{Command, TokenCommand};
use super::view::TransactionView;
use crate::crypto::keys::PublicKeyId;
use crate::state::LedgerState;

/// Fluent builder for [`TransactionView`].
///
/// # Example
///
/// ```
/// use ledger_protocol::crypto::LedgerKeypair;
/// use ledger_protocol::identity::{Party, PartyName};
/// use ledger_protocol::state::TokenRecord;
/// use ledger_protocol::transaction::{TokenCommand, TransactionBuilder};
///
/// let key = LedgerKeypair::generate().public_key();
/// let alice = Party::new(PartyName::new("Alice", "London", "GB").unwrap(), key);
///
/// let tx = TransactionBuilder::new()
///     .input(TokenRecord::new(alice.clone(), alice, 10))
///     .command([key], TokenCommand::Redeem)
///     .build();
/// assert_eq!(tx.inputs.len(), 1);
/// assert!(tx.outputs.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    inputs: Vec<LedgerState>,
    outputs: Vec<LedgerState>,
    commands: Vec<Command>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved input state.
    pub fn input(mut self, state: impl Into<LedgerState>) -> Self {
        self.inputs.push(state.into());
        self
    }

    /// Add a proposed output state.
    pub fn output(mut self, state: impl Into<LedgerState>) -> Self {
        self.outputs.push(state.into());
        self
    }

    /// Attach a command signed by `signers`.
    pub fn command(
        mut self,
        signers: impl IntoIterator<Item = PublicKeyId>,
        value: TokenCommand,
    ) -> Self {
        self.commands.push(Command::new(value, signers));
        self
    }

    pub fn build(self) -> TransactionView {
        TransactionView::new(self.inputs, self.outputs, self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::TestIdentity;
    use crate::state::TokenRecord;

    #[test]
    fn builder_preserves_order() {
        let alice = TestIdentity::new("Alice", "London", "GB");
        let bob = TestIdentity::new("Bob", "New York", "US");
        let first = TokenRecord::new(alice.party().clone(), bob.party().clone(), 10);
        let second = TokenRecord::new(alice.party().clone(), bob.party().clone(), 20);

        let tx = TransactionBuilder::new()
            .input(first.clone())
            .input(second.clone())
            .output(LedgerState::foreign("com.example.DummyContract", vec![]))
            .command([alice.public_key()], TokenCommand::Redeem)
            .build();

        assert_eq!(tx.inputs[0].as_token(), Some(&first));
        assert_eq!(tx.inputs[1].as_token(), Some(&second));
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.commands.len(), 1);
        assert!(tx.commands[0].signers.contains(&alice.public_key()));
    }

    #[test]
    fn empty_builder_yields_empty_view() {
        assert_eq!(TransactionBuilder::new().build(), TransactionView::default());
    }
}
