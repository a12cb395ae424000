//! # Parties
//!
//! A [`Party`] is a well-known ledger participant: a distinguished name plus
//! the public key that signs on its behalf. Contracts compare parties by
//! their owning key when deciding whether a party has signed.
//!
//! Names follow the X.500 subset used on the network:
//!
//! ```text
//! O=Alice, L=London, C=GB
//! ```
//!
//! Mapping a key back to a party (and vice versa) is the job of the
//! network's identity service. By the time a [`Party`] reaches this crate
//! its owning key is already resolved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{COUNTRY_CODE_LENGTH, MAX_LOCALITY_LENGTH, MAX_ORGANISATION_LENGTH};
use crate::crypto::keys::PublicKeyId;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while building or parsing a [`PartyName`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartyError {
    /// A required attribute is empty or absent.
    #[error("missing name attribute: {0}")]
    MissingAttribute(&'static str),

    /// An attribute exceeds its length limit.
    #[error("attribute {attribute} is {length} characters long (max {max})")]
    AttributeTooLong {
        attribute: &'static str,
        length: usize,
        max: usize,
    },

    /// The country is not a two-letter upper-case code.
    #[error("invalid country code: {0:?}")]
    InvalidCountry(String),

    /// The string form could not be parsed.
    #[error("malformed party name: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// PartyName
// ---------------------------------------------------------------------------

/// X.500-style distinguished name of a party.
///
/// Deserialization runs the same checks as [`PartyName::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPartyName")]
pub struct PartyName {
    organisation: String,
    locality: String,
    country: String,
}

/// Unchecked wire form of [`PartyName`].
#[derive(Deserialize)]
struct RawPartyName {
    organisation: String,
    locality: String,
    country: String,
}

impl TryFrom<RawPartyName> for PartyName {
    type Error = PartyError;

    fn try_from(raw: RawPartyName) -> Result<Self, Self::Error> {
        Self::new(&raw.organisation, &raw.locality, &raw.country)
    }
}

impl PartyName {
    /// Build a validated name.
    ///
    /// # Errors
    ///
    /// - [`PartyError::MissingAttribute`] if organisation or locality is blank.
    /// - [`PartyError::AttributeTooLong`] if either exceeds its limit.
    /// - [`PartyError::InvalidCountry`] unless the country is two ASCII
    ///   upper-case letters.
    pub fn new(organisation: &str, locality: &str, country: &str) -> Result<Self, PartyError> {
        let organisation = check_attribute("O", organisation, MAX_ORGANISATION_LENGTH)?;
        let locality = check_attribute("L", locality, MAX_LOCALITY_LENGTH)?;

        let country = country.trim();
        if country.len() != COUNTRY_CODE_LENGTH
            || !country.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(PartyError::InvalidCountry(country.to_string()));
        }

        Ok(Self {
            organisation,
            locality,
            country: country.to_string(),
        })
    }

    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

fn check_attribute(
    attribute: &'static str,
    value: &str,
    max: usize,
) -> Result<String, PartyError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PartyError::MissingAttribute(attribute));
    }
    let length = value.chars().count();
    if length > max {
        return Err(PartyError::AttributeTooLong {
            attribute,
            length,
            max,
        });
    }
    Ok(value.to_string())
}

impl fmt::Display for PartyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "O={}, L={}, C={}",
            self.organisation, self.locality, self.country
        )
    }
}

impl FromStr for PartyName {
    type Err = PartyError;

    /// Parses `O=.., L=.., C=..` with the attributes in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut organisation = None;
        let mut locality = None;
        let mut country = None;

        for part in s.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| PartyError::Malformed(part.trim().to_string()))?;
            let slot = match key.trim() {
                "O" => &mut organisation,
                "L" => &mut locality,
                "C" => &mut country,
                other => return Err(PartyError::Malformed(format!("unknown attribute {other}"))),
            };
            if slot.replace(value.trim()).is_some() {
                return Err(PartyError::Malformed(format!(
                    "duplicate attribute {}",
                    key.trim()
                )));
            }
        }

        Self::new(
            organisation.ok_or(PartyError::MissingAttribute("O"))?,
            locality.ok_or(PartyError::MissingAttribute("L"))?,
            country.ok_or(PartyError::MissingAttribute("C"))?,
        )
    }
}

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

/// A ledger participant with a resolved signing key.
///
/// Two parties are equal only if both name and key match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Party {
    name: PartyName,
    owning_key: PublicKeyId,
}

impl Party {
    pub fn new(name: PartyName, owning_key: PublicKeyId) -> Self {
        Self { name, owning_key }
    }

    pub fn name(&self) -> &PartyName {
        &self.name
    }

    /// The key whose presence in a signer set counts as this party's
    /// signature.
    pub fn owning_key(&self) -> PublicKeyId {
        self.owning_key
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::LedgerKeypair;

    #[test]
    fn display_and_parse_roundtrip() {
        let name = PartyName::new("Alice", "London", "GB").unwrap();
        assert_eq!(name.to_string(), "O=Alice, L=London, C=GB");
        assert_eq!(name.to_string().parse::<PartyName>().unwrap(), name);
    }

    #[test]
    fn parse_accepts_any_attribute_order() {
        let name: PartyName = "C=US, O=Bob, L=New York".parse().unwrap();
        assert_eq!(name.organisation(), "Bob");
        assert_eq!(name.locality(), "New York");
        assert_eq!(name.country(), "US");
    }

    #[test]
    fn rejects_lower_case_country() {
        assert_eq!(
            PartyName::new("Alice", "London", "gb"),
            Err(PartyError::InvalidCountry("gb".into()))
        );
    }

    #[test]
    fn rejects_blank_organisation() {
        assert_eq!(
            PartyName::new("  ", "London", "GB"),
            Err(PartyError::MissingAttribute("O"))
        );
    }

    #[test]
    fn rejects_overlong_locality() {
        let long = "x".repeat(MAX_LOCALITY_LENGTH + 1);
        assert!(matches!(
            PartyName::new("Alice", &long, "GB"),
            Err(PartyError::AttributeTooLong { attribute: "L", .. })
        ));
    }

    #[test]
    fn parse_rejects_missing_and_duplicate_attributes() {
        assert_eq!(
            "O=Alice, L=London".parse::<PartyName>(),
            Err(PartyError::MissingAttribute("C"))
        );
        assert!(matches!(
            "O=Alice, O=Bob, L=London, C=GB".parse::<PartyName>(),
            Err(PartyError::Malformed(_))
        ));
        assert!(matches!(
            "O=Alice, L=London, CN=x, C=GB".parse::<PartyName>(),
            Err(PartyError::Malformed(_))
        ));
    }

    #[test]
    fn deserialize_rejects_invalid_name() {
        let blank = r#"{"organisation":"","locality":"","country":"gb"}"#;
        let err = serde_json::from_str::<PartyName>(blank).unwrap_err();
        assert!(err.to_string().contains("missing name attribute: O"));

        let lower_country = r#"{"organisation":"Alice","locality":"London","country":"gb"}"#;
        assert!(serde_json::from_str::<PartyName>(lower_country).is_err());

        let name = PartyName::new("Alice", "London", "GB").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(serde_json::from_str::<PartyName>(&json).unwrap(), name);
    }

    #[test]
    fn deserialized_party_keeps_validation() {
        let party = Party::new(
            PartyName::new("Alice", "London", "GB").unwrap(),
            LedgerKeypair::generate().public_key(),
        );
        let mut value = serde_json::to_value(&party).unwrap();
        assert_eq!(serde_json::from_value::<Party>(value.clone()).unwrap(), party);

        value["name"]["country"] = serde_json::json!("GBR");
        assert!(serde_json::from_value::<Party>(value).is_err());
    }

    #[test]
    fn party_equality_covers_key() {
        let name = PartyName::new("Alice", "London", "GB").unwrap();
        let a = Party::new(name.clone(), LedgerKeypair::generate().public_key());
        let b = Party::new(name, LedgerKeypair::generate().public_key());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_string(), "O=Alice, L=London, C=GB");
    }
}
