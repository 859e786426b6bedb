//! Fixed-width foreign-chain addresses.
//!
//! A [`ForeignAddress`] is always exactly 20 bytes. Hex decoding through
//! [`ForeignAddress::from_hex`] is lenient: malformed input produces the zero
//! address instead of an error, matching how the foreign chain constructs
//! addresses. Only the JSON decoder is strict.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Length in bytes of a foreign-chain address.
pub const FOREIGN_ADDR_LEN: usize = 20;

/// A 20-byte address on the foreign smart-contract chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForeignAddress([u8; FOREIGN_ADDR_LEN]);

impl ForeignAddress {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; FOREIGN_ADDR_LEN]);

    /// Decodes `text` as hex (with or without a `0x` prefix).
    ///
    /// Never fails: undecodable input yields [`ForeignAddress::ZERO`].
    pub fn from_hex(text: &str) -> Self {
        let bytes = decode_hex(text).unwrap_or_default();
        Self::from_slice(&bytes)
    }

    /// Builds an address from an arbitrary byte slice, see [`Self::set_bytes`].
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut addr = Self::ZERO;
        addr.set_bytes(bytes);
        addr
    }

    /// Copies `bytes` into the address, right-aligned.
    ///
    /// Longer input keeps its trailing 20 bytes; shorter input leaves the
    /// leading bytes untouched.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        let bytes = if bytes.len() > FOREIGN_ADDR_LEN {
            &bytes[bytes.len() - FOREIGN_ADDR_LEN..]
        } else {
            bytes
        };
        self.0[FOREIGN_ADDR_LEN - bytes.len()..].copy_from_slice(bytes);
    }

    /// `true` iff all 20 bytes are zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Lowercase `0x`-prefixed hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn as_bytes(&self) -> &[u8; FOREIGN_ADDR_LEN] {
        &self.0
    }
}

// Strips an optional `0x`/`0X` prefix; odd-length input gets a leading `0`.
fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.len() % 2 == 1 {
        return hex::decode(format!("0{digits}"));
    }
    hex::decode(digits)
}

impl From<[u8; FOREIGN_ADDR_LEN]> for ForeignAddress {
    fn from(bytes: [u8; FOREIGN_ADDR_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ForeignAddress> for [u8; FOREIGN_ADDR_LEN] {
    fn from(addr: ForeignAddress) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for ForeignAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ForeignAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ForeignAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_hex(s))
    }
}

impl Serialize for ForeignAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ForeignAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = decode_hex(&s).map_err(de::Error::custom)?;
        Ok(Self::from_slice(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    #[test]
    fn hex_roundtrip() {
        let addr = ForeignAddress::from_hex(ADDR);
        assert_eq!(addr.to_hex(), ADDR);
        assert_eq!(ForeignAddress::from_hex(&addr.to_hex()), addr);

        // prefix is optional, case is normalized
        let upper = ForeignAddress::from_hex("D8DA6BF26964AF9D7EED9E03E53415D37AA96045");
        assert_eq!(upper, addr);
        assert_eq!(upper.to_string(), ADDR);
    }

    #[test]
    fn malformed_hex_is_zero() {
        for bad in ["0xzz", "0x12g", "not an address", "0x"] {
            let addr = ForeignAddress::from_hex(bad);
            assert!(addr.is_empty(), "{bad} should decode to zero");
        }
        assert_eq!(ForeignAddress::from_hex(""), ForeignAddress::ZERO);
    }

    #[test]
    fn odd_length_gets_leading_nibble() {
        let addr = ForeignAddress::from_hex("0x123");
        assert_eq!(&addr.as_bytes()[18..], &[0x01, 0x23]);
        assert_eq!(ForeignAddress::from_hex("123"), addr);
        assert_eq!(ForeignAddress::from_hex("0x0123"), addr);

        let decoded: ForeignAddress = serde_json::from_str("\"0xabc\"").unwrap();
        assert_eq!(decoded.to_hex(), "0x0000000000000000000000000000000000000abc");
    }

    #[test]
    fn short_input_is_left_padded() {
        let addr = ForeignAddress::from_hex("0xdeadbeef");
        let mut expected = [0u8; 20];
        expected[16..].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(addr.as_bytes(), &expected);
        assert_eq!(addr.to_hex(), "0x00000000000000000000000000000000deadbeef");
    }

    #[test]
    fn long_input_keeps_trailing_bytes() {
        let long: Vec<u8> = (0u8..32).collect();
        let addr = ForeignAddress::from_slice(&long);
        assert_eq!(&addr.as_bytes()[..], &long[12..]);

        let hex_long = format!("0x{}", hex::encode(&long));
        assert_eq!(ForeignAddress::from_hex(&hex_long), addr);
    }

    #[test]
    fn emptiness() {
        assert!(ForeignAddress::ZERO.is_empty());
        assert!(ForeignAddress::default().is_empty());

        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        assert!(!ForeignAddress::from(bytes).is_empty());
        bytes[19] = 0;
        bytes[0] = 0x80;
        assert!(!ForeignAddress::from(bytes).is_empty());
    }

    #[test]
    fn json_is_hex_string() {
        let addr = ForeignAddress::from_hex(ADDR);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ADDR}\""));

        let decoded: ForeignAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, addr);

        // JSON decoding does not swallow bad hex
        assert!(serde_json::from_str::<ForeignAddress>("\"0xnothex\"").is_err());
        assert!(serde_json::from_str::<ForeignAddress>("42").is_err());
    }
}
