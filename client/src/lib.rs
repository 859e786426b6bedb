//! Helpers behind `bridgemsg-cli`: validate stored messages and claims and
//! render what an external signer needs.

use bridgemsg_core::{AccAddress, BridgeMsg, Claim, ClaimType, ForeignAddress, Network};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use error::{ClientError, Result};

pub mod error;

/// Everything an external signer needs for one message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignRequest {
    pub msg_type: String,
    pub route: String,
    /// Log description of the message.
    pub description: String,
    pub signers: Vec<AccAddress>,
    /// Canonical bytes to sign, hex encoded in JSON.
    #[serde(with = "hex::serde")]
    pub sign_bytes: Vec<u8>,
}

/// Validates `msg` and renders its sign bytes.
///
/// # Errors
///
/// Returns a [`ClientError::Bridge`] if the message fails its basic checks.
pub fn prepare_sign_request(msg: &BridgeMsg) -> Result<SignRequest> {
    let sign_bytes = msg.checked_sign_bytes()?;
    info!(msg_type = msg.msg_type(), "{}", msg);

    Ok(SignRequest {
        msg_type: msg.msg_type().to_string(),
        route: msg.route().to_string(),
        description: msg.to_string(),
        signers: msg.signers(),
        sign_bytes,
    })
}

/// A validated claim with its canonical payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSummary {
    pub claim_type: ClaimType,
    pub payload: String,
}

pub fn inspect_claim(claim: &Claim) -> Result<ClaimSummary> {
    claim.validate()?;
    let payload = claim.payload()?;
    info!(claim_type = %claim.claim_type(), len = payload.len(), "claim validated");

    Ok(ClaimSummary {
        claim_type: claim.claim_type(),
        payload,
    })
}

/// Leniently decodes a foreign address, warning when nothing usable was given.
pub fn normalize_foreign_address(text: &str) -> ForeignAddress {
    let addr = ForeignAddress::from_hex(text);
    if addr.is_empty() {
        warn!(input = text, "foreign address decodes to the zero address");
    }
    addr
}

/// Builds a native account address from raw hex bytes.
pub fn encode_account(network: Network, hex_bytes: &str) -> Result<AccAddress> {
    let addr = AccAddress::from_hex(network, hex_bytes)?;
    // Surface encoding problems here rather than in Display.
    addr.to_bech32()?;
    Ok(addr)
}
