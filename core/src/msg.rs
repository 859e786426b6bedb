//! Signable bridge messages and their shared capabilities.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::account::AccAddress;
use crate::address::ForeignAddress;
use crate::coin::Coin;
use crate::error::ValidationError;
use crate::{canonical, validation, BridgeError, Result};

/// Routing tag of the module handling bridge messages.
pub const ROUTE_BRIDGE: &str = "bridge";

pub const BIND_MSG_TYPE: &str = "crossBind";
pub const TRANSFER_OUT_MSG_TYPE: &str = "crossTransferOut";

/// Capabilities shared by every message a user can sign.
///
/// `Display` renders the log description; its layout is stable so log
/// tooling can parse it.
pub trait Msg: Serialize + std::fmt::Display {
    /// Name of the module that handles this message.
    fn route(&self) -> &'static str;

    /// Discriminator used for dispatch and JSON self-description.
    fn msg_type(&self) -> &'static str;

    /// Accounts that must sign the message.
    fn signers(&self) -> Vec<AccAddress>;

    /// Accounts touched by the message.
    fn involved_addresses(&self) -> Vec<AccAddress> {
        self.signers()
    }

    /// Stateless field checks. Must pass before [`Msg::sign_bytes`] is used.
    fn validate_basic(&self) -> std::result::Result<(), ValidationError>;

    /// Canonical bytes a signature is computed over.
    ///
    /// # Panics
    ///
    /// If the message cannot be encoded. Every field is encodable, so this
    /// indicates a broken invariant rather than bad input.
    fn sign_bytes(&self) -> Vec<u8> {
        match canonical::to_vec(self) {
            Ok(bytes) => {
                trace!(msg_type = self.msg_type(), len = bytes.len(), "rendered sign bytes");
                bytes
            }
            Err(e) => panic!("encoding defect in {} sign bytes: {e}", self.msg_type()),
        }
    }
}

/// Request to bind a native token to a foreign contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BindMsg {
    pub from: AccAddress,
    pub symbol: String,
    pub amount: i64,
    pub contract_address: ForeignAddress,
    pub contract_decimals: i8,
    pub expire_time: i64,
}

impl BindMsg {
    pub fn new(
        from: AccAddress,
        symbol: impl Into<String>,
        amount: i64,
        contract_address: ForeignAddress,
        contract_decimals: i8,
        expire_time: i64,
    ) -> Self {
        Self {
            from,
            symbol: symbol.into(),
            amount,
            contract_address,
            contract_decimals,
            expire_time,
        }
    }
}

impl Msg for BindMsg {
    fn route(&self) -> &'static str {
        ROUTE_BRIDGE
    }

    fn msg_type(&self) -> &'static str {
        BIND_MSG_TYPE
    }

    fn signers(&self) -> Vec<AccAddress> {
        vec![self.from.clone()]
    }

    fn validate_basic(&self) -> std::result::Result<(), ValidationError> {
        validation::account_len("from", &self.from)?;
        validation::not_empty("symbol", &self.symbol)?;
        validation::positive("amount", self.amount)?;
        validation::foreign_not_empty("contract_address", &self.contract_address)?;
        validation::non_negative("contract_decimals", self.contract_decimals.into())?;
        validation::positive("expire_time", self.expire_time)
    }
}

impl std::fmt::Display for BindMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bind{{{}#{}#{}${}#{}#{}}}",
            self.from,
            self.symbol,
            self.amount,
            self.contract_address,
            self.contract_decimals,
            self.expire_time
        )
    }
}

/// Request to move value from the native chain to the foreign chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferOutMsg {
    pub from: AccAddress,
    pub to: ForeignAddress,
    pub amount: Coin,
    pub expire_time: i64,
}

impl TransferOutMsg {
    pub fn new(from: AccAddress, to: ForeignAddress, amount: Coin, expire_time: i64) -> Self {
        Self {
            from,
            to,
            amount,
            expire_time,
        }
    }
}

impl Msg for TransferOutMsg {
    fn route(&self) -> &'static str {
        ROUTE_BRIDGE
    }

    fn msg_type(&self) -> &'static str {
        TRANSFER_OUT_MSG_TYPE
    }

    fn signers(&self) -> Vec<AccAddress> {
        vec![self.from.clone()]
    }

    fn validate_basic(&self) -> std::result::Result<(), ValidationError> {
        validation::account_len("from", &self.from)?;
        validation::foreign_not_empty("to", &self.to)?;
        validation::coin_positive("amount", &self.amount)?;
        validation::positive("expire_time", self.expire_time)
    }
}

impl std::fmt::Display for TransferOutMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TransferOut{{{}#{}#{}#{}}}",
            self.from, self.to, self.amount, self.expire_time
        )
    }
}

/// Any bridge message, tagged by its message type.
///
/// The envelope (`{"type":..,"value":..}`) is used for storage only; sign
/// bytes are always those of the inner message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum BridgeMsg {
    #[serde(rename = "crossBind")]
    Bind(BindMsg),
    #[serde(rename = "crossTransferOut")]
    TransferOut(TransferOutMsg),
}

impl BridgeMsg {
    pub fn route(&self) -> &'static str {
        match self {
            Self::Bind(m) => m.route(),
            Self::TransferOut(m) => m.route(),
        }
    }

    pub fn msg_type(&self) -> &'static str {
        match self {
            Self::Bind(m) => m.msg_type(),
            Self::TransferOut(m) => m.msg_type(),
        }
    }

    pub fn signers(&self) -> Vec<AccAddress> {
        match self {
            Self::Bind(m) => m.signers(),
            Self::TransferOut(m) => m.signers(),
        }
    }

    pub fn involved_addresses(&self) -> Vec<AccAddress> {
        match self {
            Self::Bind(m) => m.involved_addresses(),
            Self::TransferOut(m) => m.involved_addresses(),
        }
    }

    pub fn validate_basic(&self) -> Result<()> {
        let res = match self {
            Self::Bind(m) => m.validate_basic(),
            Self::TransferOut(m) => m.validate_basic(),
        };
        res.map_err(BridgeError::from)
    }

    /// See [`Msg::sign_bytes`].
    pub fn sign_bytes(&self) -> Vec<u8> {
        match self {
            Self::Bind(m) => m.sign_bytes(),
            Self::TransferOut(m) => m.sign_bytes(),
        }
    }

    /// Validates, then renders sign bytes.
    pub fn checked_sign_bytes(&self) -> Result<Vec<u8>> {
        self.validate_basic()?;
        Ok(self.sign_bytes())
    }
}

impl std::fmt::Display for BridgeMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind(m) => std::fmt::Display::fmt(m, f),
            Self::TransferOut(m) => std::fmt::Display::fmt(m, f),
        }
    }
}

impl From<BindMsg> for BridgeMsg {
    fn from(m: BindMsg) -> Self {
        Self::Bind(m)
    }
}

impl From<TransferOutMsg> for BridgeMsg {
    fn from(m: TransferOutMsg) -> Self {
        Self::TransferOut(m)
    }
}
