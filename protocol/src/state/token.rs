//! The fungible token record.

use serde::{Deserialize, Serialize};

use crate::identity::Party;

/// One discrete holding of fungible value.
///
/// Records are immutable. Spending a record means referencing it as a
/// transaction input; the record is then either retired (redeemed) or
/// replaced by new output records (transferred).
///
/// The constructor accepts any `quantity`, including zero and negative
/// values. Valid issuance and transfer never produce such records, but a
/// contract consuming records must not assume that, so the model keeps them
/// representable and leaves the checking to the contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRecord {
    issuer: Party,
    holder: Party,
    quantity: i64,
}

impl TokenRecord {
    pub fn new(issuer: Party, holder: Party, quantity: i64) -> Self {
        Self {
            issuer,
            holder,
            quantity,
        }
    }

    /// The party that created this value.
    pub fn issuer(&self) -> &Party {
        &self.issuer
    }

    /// The party currently entitled to this value.
    pub fn holder(&self) -> &Party {
        &self.holder
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::TestIdentity;

    fn alice() -> Party {
        TestIdentity::new("Alice", "London", "GB").party().clone()
    }

    fn bob() -> Party {
        TestIdentity::new("Bob", "New York", "US").party().clone()
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            TokenRecord::new(alice(), bob(), 10),
            TokenRecord::new(alice(), bob(), 10)
        );
        assert_ne!(
            TokenRecord::new(alice(), bob(), 10),
            TokenRecord::new(alice(), bob(), 11)
        );
        assert_ne!(
            TokenRecord::new(alice(), bob(), 10),
            TokenRecord::new(bob(), alice(), 10)
        );
    }

    #[test]
    fn non_positive_quantities_are_representable() {
        assert_eq!(TokenRecord::new(alice(), bob(), 0).quantity(), 0);
        assert_eq!(TokenRecord::new(alice(), bob(), -1).quantity(), -1);
    }

    #[test]
    fn serde_json_roundtrip() {
        let record = TokenRecord::new(alice(), bob(), 10);
        let json = serde_json::to_string(&record).unwrap();
        let back: TokenRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
