//! Primitive value types shared by the ledger core and its host.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of an account known to the execution environment.
///
/// Rendered as a fixed-length `0x`-prefixed lowercase hex string in text
/// contexts, including the JSON export surface.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct AccountAddress(pub [u8; 20]);

impl AccountAddress {
    /// The empty/null sentinel address. Never a valid operation target.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Whether this is the empty/null sentinel address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Failure to parse an [`AccountAddress`] from its hex text form.
#[derive(Debug, thiserror::Error)]
pub enum AccountAddressParseError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Account address must be exactly 20 bytes")]
    WrongLength,
}

impl FromStr for AccountAddress {
    type Err = AccountAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AccountAddressParseError::WrongLength)?;
        Ok(Self(bytes))
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Amount of ledger credits. Credits are always a whole number of units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct CreditAmount(pub u64);

impl CreditAmount {
    /// Maximum representable credit amount. Used as the unlimited-allowance
    /// sentinel, which is never decremented by payments.
    pub const MAX: Self = Self(u64::MAX);

    /// The reserve currency amount redeemable for this credit amount (1:1).
    pub fn as_reserve(self) -> ReserveAmount {
        ReserveAmount(self.0)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CreditAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Amount of the reserve currency backing the credits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct ReserveAmount(pub u64);

impl ReserveAmount {
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ReserveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Reserve-to-supply ratio in fixed-point representation where
/// [`CollateralRatio::HUNDRED_PERCENT`] denotes 100%.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct CollateralRatio(pub u128);

impl CollateralRatio {
    /// The fixed-point scale: `1e18` represents 100%.
    pub const HUNDRED_PERCENT: Self = Self(1_000_000_000_000_000_000);
}

impl fmt::Display for CollateralRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Test that the address text form round-trips and is fixed-length
    /// lowercase hex.
    #[test]
    fn test_address_hex_round_trip() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xAB;
        bytes[19] = 0x01;
        let address = AccountAddress(bytes);
        let text = address.to_string();
        assert_eq!(text.len(), 42);
        assert!(text.starts_with("0xab"));
        assert_eq!(text, text.to_lowercase());
        assert_eq!(text.parse::<AccountAddress>().unwrap(), address);
    }

    /// Parsing accepts the un-prefixed form as well.
    #[test]
    fn test_address_parse_without_prefix() {
        let address: AccountAddress = "0101010101010101010101010101010101010101"
            .parse()
            .unwrap();
        assert_eq!(address, AccountAddress([1u8; 20]));
    }

    #[test]
    fn test_address_parse_wrong_length() {
        assert!(matches!(
            "0x0101".parse::<AccountAddress>(),
            Err(AccountAddressParseError::WrongLength)
        ));
    }

    #[test]
    fn test_address_serde_text_form() {
        let address = AccountAddress([0x11u8; 20]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "11".repeat(20)));
        let back: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
