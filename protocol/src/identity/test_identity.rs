//! Deterministic identities for tests.
//!
//! A [`TestIdentity`] derives its keypair from the SHA-256 of its rendered
//! name, so `TestIdentity::new("Alice", "London", "GB")` has the same key in
//! every test and every process. Never use this outside tests: anyone who
//! knows the name knows the key.

use crate::crypto::hash::sha256;
use crate::crypto::keys::{LedgerKeypair, PublicKeyId};
use crate::identity::party::{Party, PartyError, PartyName};

#[derive(Debug, Clone)]
pub struct TestIdentity {
    keypair: LedgerKeypair,
    party: Party,
}

impl TestIdentity {
    /// Build an identity from its name attributes.
    ///
    /// # Panics
    ///
    /// Panics if the attributes do not form a valid [`PartyName`]; use
    /// [`try_new`](Self::try_new) for fallible construction.
    pub fn new(organisation: &str, locality: &str, country: &str) -> Self {
        match Self::try_new(organisation, locality, country) {
            Ok(identity) => identity,
            Err(e) => panic!("invalid test identity name: {e}"),
        }
    }

    pub fn try_new(organisation: &str, locality: &str, country: &str) -> Result<Self, PartyError> {
        let name = PartyName::new(organisation, locality, country)?;
        Ok(Self::from_name(name))
    }

    pub fn from_name(name: PartyName) -> Self {
        let keypair = LedgerKeypair::from_seed(&sha256(name.to_string().as_bytes()));
        let party = Party::new(name, keypair.public_key());
        Self { keypair, party }
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn public_key(&self) -> PublicKeyId {
        self.keypair.public_key()
    }

    pub fn keypair(&self) -> &LedgerKeypair {
        &self.keypair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_key() {
        let a = TestIdentity::new("Alice", "London", "GB");
        let b = TestIdentity::new("Alice", "London", "GB");
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a.party(), b.party());
    }

    #[test]
    fn different_names_different_keys() {
        let alice = TestIdentity::new("Alice", "London", "GB");
        let bob = TestIdentity::new("Bob", "New York", "US");
        assert_ne!(alice.public_key(), bob.public_key());
    }

    #[test]
    fn party_key_matches_keypair() {
        let carly = TestIdentity::new("Carly", "New York", "US");
        assert_eq!(carly.party().owning_key(), carly.keypair().public_key());
    }

    #[test]
    fn try_new_surfaces_name_errors() {
        assert!(TestIdentity::try_new("Alice", "London", "gbr").is_err());
    }
}
