//! Native-chain account addresses and the network they belong to.

use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

/// Fixed length in bytes of a well-formed native account address.
pub const ADDR_LEN: usize = 20;

/// Native network, which determines the bech32 prefix of account addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Human-readable bech32 prefix.
    pub fn hrp(&self) -> &'static str {
        match self {
            Self::Mainnet => "bnb",
            Self::Testnet => "tbnb",
        }
    }

    /// Looks up the network owning a bech32 prefix.
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "bnb" => Some(Self::Mainnet),
            "tbnb" => Some(Self::Testnet),
            _ => None,
        }
    }
}

/// An account address on the native chain.
///
/// The raw bytes are kept as given; a wrong length is only reported by the
/// message checks (see [`ADDR_LEN`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress {
    network: Network,
    bytes: Vec<u8>,
}

impl AccAddress {
    pub fn new(network: Network, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            network,
            bytes: bytes.into(),
        }
    }

    /// Parses a bech32 address, inferring the network from its prefix.
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        if s.is_empty() {
            return Err(AddressError::EmptyAddress);
        }
        let (hrp, data, _variant) = bech32::decode(s)?;
        let network = Network::from_hrp(&hrp).ok_or(AddressError::UnknownPrefix(hrp))?;
        let bytes = Vec::<u8>::from_base32(&data)?;
        Ok(Self { network, bytes })
    }

    /// Parses raw hex bytes (optional `0x` prefix) for the given network.
    pub fn from_hex(network: Network, s: &str) -> Result<Self, AddressError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Err(AddressError::EmptyAddress);
        }
        Ok(Self::new(network, hex::decode(digits)?))
    }

    /// Bech32 text form with the network prefix.
    pub fn to_bech32(&self) -> Result<String, AddressError> {
        Ok(bech32::encode(
            self.network.hrp(),
            self.bytes.to_base32(),
            Variant::Bech32,
        )?)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.to_bech32().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl FromStr for AccAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl Serialize for AccAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = self.to_bech32().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for AccAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_bech32(&s).map_err(de::Error::custom)
    }
}
