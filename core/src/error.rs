use thiserror::Error;

/// Bridge-related errors.
#[derive(Debug, Error, PartialEq)]
pub enum BridgeError {
    #[error("validation error: {0}")]
    Validation(ValidationError),

    #[error("address error: {0}")]
    Address(AddressError),

    /// Serialization of a value failed. For sign bytes this is never
    /// returned; see [`crate::Msg::sign_bytes`].
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("unknown claim type: {0}")]
    UnknownClaimType(String),
}

/// A field of a message or claim failed its basic checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("address length should be {expected} (got {actual})")]
    AddressLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} should not be empty")]
    Empty { field: &'static str },

    #[error("{field} should be larger than 0 (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} should be no less than 0 (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("length of {field} ({actual}) does not match {expected_from} ({expected})")]
    LengthMismatch {
        field: &'static str,
        actual: usize,
        expected_from: &'static str,
        expected: usize,
    },

    #[error("{field} has an invalid value: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field, as it appears in the JSON encoding.
    pub fn field(&self) -> &'static str {
        match self {
            Self::AddressLength { field, .. }
            | Self::Empty { field }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::LengthMismatch { field, .. }
            | Self::Invalid { field, .. } => field,
        }
    }
}

/// Errors that might occur while parsing a native account address.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressError {
    #[error("invalid bech32: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("unknown bech32 prefix: {0}")]
    UnknownPrefix(String),

    #[error("cannot parse address from empty string")]
    EmptyAddress,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl From<ValidationError> for BridgeError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AddressError> for BridgeError {
    fn from(value: AddressError) -> Self {
        Self::Address(value)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value.to_string())
    }
}
