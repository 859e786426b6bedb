//! Cross-chain bridge messages between the native chain and a foreign
//! smart-contract chain: addresses, claims, validation and canonical sign
//! bytes.

/// Native-chain account addresses
pub mod account;
/// Fixed 20-byte foreign-chain addresses
pub mod address;
/// Canonical JSON encoding for sign bytes
pub mod canonical;
/// Attested foreign-chain events
pub mod claim;
pub mod coin;
pub mod error;
/// JSON file I/O
pub mod interface;
/// Signable bridge messages
pub mod msg;
pub mod validation;

#[cfg(test)]
pub(crate) mod utils;

pub use account::{AccAddress, Network, ADDR_LEN};
pub use address::{ForeignAddress, FOREIGN_ADDR_LEN};
pub use claim::{
    BindStatus, Claim, ClaimType, RefundReason, SkipSequenceClaim, TransferInClaim,
    TransferOutRefundClaim, UpdateBindClaim,
};
pub use coin::Coin;
pub use error::{AddressError, BridgeError, ValidationError};
pub use msg::{
    BindMsg, BridgeMsg, Msg, TransferOutMsg, BIND_MSG_TYPE, ROUTE_BRIDGE, TRANSFER_OUT_MSG_TYPE,
};

pub type Result<T> = std::result::Result<T, BridgeError>;
