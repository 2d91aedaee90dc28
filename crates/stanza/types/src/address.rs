//! Address tokens as they appear in scenario scripts.
//!
//! Scenario scripts refer to contracts and accounts by `0x`-prefixed tokens.
//! Tokens minted by a backend are real hex-encoded addresses, while tokens
//! written by hand in a script may be symbolic (`0xComptroller`). Both share
//! this type; only the prefix and character set are validated, not the length.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An error that occurs while parsing an address token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    #[error("address token is empty")]
    Empty,
    #[error("address token `{0}` is missing the 0x prefix")]
    MissingPrefix(String),
    #[error("address token `{0}` contains an invalid character")]
    InvalidCharacter(String),
}

/// A `0x`-prefixed address token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(SmolStr);

impl Address {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressParseError::Empty);
        }

        let body = s.strip_prefix("0x").ok_or_else(|| AddressParseError::MissingPrefix(s.to_string()))?;

        if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AddressParseError::InvalidCharacter(s.to_string()));
        }

        Ok(Self(SmolStr::new(s)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_parse_hex_address() {
        let address: Address = "0x5c2dd1b43082ff5a8d006e93c56c222839843b89".parse().unwrap();
        assert_eq!(address.as_str(), "0x5c2dd1b43082ff5a8d006e93c56c222839843b89");
    }

    #[test]
    fn test_parse_symbolic_address() {
        let address: Address = "0xComptroller".parse().unwrap();
        assert_eq!(address.as_str(), "0xComptroller");
    }

    #[test]
    fn test_rejects_missing_prefix() {
        assert_matches!("Comptroller".parse::<Address>(), Err(AddressParseError::MissingPrefix(_)));
    }

    #[test]
    fn test_rejects_empty_body() {
        assert_matches!("0x".parse::<Address>(), Err(AddressParseError::InvalidCharacter(_)));
        assert_matches!("".parse::<Address>(), Err(AddressParseError::Empty));
    }

    #[test]
    fn test_rejects_invalid_character() {
        assert_matches!("0xfoo bar".parse::<Address>(), Err(AddressParseError::InvalidCharacter(_)));
    }

    #[test]
    fn test_serde_transparent() {
        let address: Address = "0xCETH".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0xCETH\"");
    }
}
