//! # Identity Module
//!
//! Who can hold and issue tokens. A participant is a [`Party`]: an X.500
//! style [`PartyName`] bound to the Ed25519 key that signs for it.
//!
//! Identity resolution (finding the party behind a key, or the current key
//! of a party) belongs to the network layer. Everything here assumes the
//! binding is already known.

pub mod party;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_identity;

pub use party::{Party, PartyError, PartyName};
#[cfg(any(test, feature = "test-utils"))]
pub use test_identity::TestIdentity;
