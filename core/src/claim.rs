//! Claims: attested facts about foreign-chain activity, relayed inbound for
//! the native chain to act on.

use serde::{Deserialize, Serialize};

use crate::account::AccAddress;
use crate::address::ForeignAddress;
use crate::coin::Coin;
use crate::error::ValidationError;
use crate::{canonical, validation, BridgeError, Result};

/// Why an outbound transfer was refunded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u16", into = "u16")]
pub enum RefundReason {
    UnboundToken = 1,
    Timeout = 2,
    InsufficientBalance = 3,
    Unknown = 4,
}

impl From<RefundReason> for u16 {
    fn from(reason: RefundReason) -> Self {
        reason as u16
    }
}

impl TryFrom<u16> for RefundReason {
    type Error = ValidationError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::UnboundToken),
            2 => Ok(Self::Timeout),
            3 => Ok(Self::InsufficientBalance),
            4 => Ok(Self::Unknown),
            _ => Err(ValidationError::Invalid {
                field: "refund_reason",
                reason: "unknown refund reason",
            }),
        }
    }
}

/// Outcome of a bind request, as reported by the foreign chain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "i8", into = "i8")]
pub enum BindStatus {
    Success = 0,
    Rejected = 1,
    Timeout = 2,
    InvalidParameter = 3,
}

impl From<BindStatus> for i8 {
    fn from(status: BindStatus) -> Self {
        status as i8
    }
}

impl TryFrom<i8> for BindStatus {
    type Error = ValidationError;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Rejected),
            2 => Ok(Self::Timeout),
            3 => Ok(Self::InvalidParameter),
            _ => Err(ValidationError::Invalid {
                field: "status",
                reason: "unknown bind status",
            }),
        }
    }
}

/// Discriminator of the claim variants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i8", into = "i8")]
pub enum ClaimType {
    SkipSequence = 1,
    UpdateBind = 2,
    TransferOutRefund = 3,
    TransferIn = 4,
}

impl ClaimType {
    pub const ALL: [ClaimType; 4] = [
        Self::SkipSequence,
        Self::UpdateBind,
        Self::TransferOutRefund,
        Self::TransferIn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SkipSequence => "SkipSequence",
            Self::UpdateBind => "UpdateBind",
            Self::TransferOutRefund => "TransferOutRefund",
            Self::TransferIn => "TransferIn",
        }
    }
}

impl From<ClaimType> for i8 {
    fn from(ty: ClaimType) -> Self {
        ty as i8
    }
}

impl TryFrom<i8> for ClaimType {
    type Error = ValidationError;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|ty| *ty as i8 == value)
            .ok_or(ValidationError::Invalid {
                field: "claim_type",
                reason: "unknown claim type",
            })
    }
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ClaimType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| BridgeError::UnknownClaimType(s.to_string()))
    }
}

/// A batch of inbound transfers locked on the foreign chain.
///
/// `refund_addresses`, `receiver_addresses` and `amounts` are positional:
/// index `i` of each describes one transfer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferInClaim {
    pub contract_address: ForeignAddress,
    pub refund_addresses: Vec<ForeignAddress>,
    pub receiver_addresses: Vec<AccAddress>,
    pub amounts: Vec<i64>,
    pub symbol: String,
    pub relay_fee: Coin,
    pub expire_time: i64,
}

impl TransferInClaim {
    /// Iterates `(refund, receiver, amount)` per transfer.
    pub fn transfers(&self) -> impl Iterator<Item = (&ForeignAddress, &AccAddress, i64)> + '_ {
        self.refund_addresses
            .iter()
            .zip(self.receiver_addresses.iter())
            .zip(self.amounts.iter())
            .map(|((refund, receiver), amount)| (refund, receiver, *amount))
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validation::foreign_not_empty("contract_address", &self.contract_address)?;
        validation::not_empty("symbol", &self.symbol)?;
        if self.refund_addresses.is_empty() {
            return validation::reject(ValidationError::Empty {
                field: "refund_addresses",
            });
        }
        let n = self.refund_addresses.len();
        validation::same_len(
            "receiver_addresses",
            self.receiver_addresses.len(),
            "refund_addresses",
            n,
        )?;
        validation::same_len("amounts", self.amounts.len(), "refund_addresses", n)?;

        for (refund, receiver, amount) in self.transfers() {
            validation::foreign_not_empty("refund_addresses", refund)?;
            validation::account_len("receiver_addresses", receiver)?;
            validation::positive("amounts", amount)?;
        }

        validation::non_negative("relay_fee", self.relay_fee.amount)?;
        validation::positive("expire_time", self.expire_time)
    }
}

/// Refund of an outbound transfer that could not be completed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferOutRefundClaim {
    pub refund_address: AccAddress,
    pub amount: Coin,
    pub refund_reason: RefundReason,
}

impl TransferOutRefundClaim {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validation::account_len("refund_address", &self.refund_address)?;
        validation::coin_positive("amount", &self.amount)
    }
}

/// Outcome of a bind request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateBindClaim {
    pub status: BindStatus,
    pub symbol: String,
    pub contract_address: ForeignAddress,
}

impl UpdateBindClaim {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validation::not_empty("symbol", &self.symbol)?;
        validation::foreign_not_empty("contract_address", &self.contract_address)
    }
}

/// Marks `sequence` of the `claim_type` channel as consumed without running it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkipSequenceClaim {
    pub claim_type: ClaimType,
    pub sequence: i64,
}

impl SkipSequenceClaim {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.claim_type == ClaimType::SkipSequence {
            return validation::reject(ValidationError::Invalid {
                field: "claim_type",
                reason: "cannot skip a skip-sequence claim",
            });
        }
        validation::non_negative("sequence", self.sequence)
    }
}

/// Closed set of claims, tagged by claim type name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "claim_type", content = "claim")]
pub enum Claim {
    SkipSequence(SkipSequenceClaim),
    UpdateBind(UpdateBindClaim),
    TransferOutRefund(TransferOutRefundClaim),
    TransferIn(TransferInClaim),
}

impl Claim {
    pub fn claim_type(&self) -> ClaimType {
        match self {
            Self::SkipSequence(_) => ClaimType::SkipSequence,
            Self::UpdateBind(_) => ClaimType::UpdateBind,
            Self::TransferOutRefund(_) => ClaimType::TransferOutRefund,
            Self::TransferIn(_) => ClaimType::TransferIn,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let res = match self {
            Self::SkipSequence(c) => c.validate(),
            Self::UpdateBind(c) => c.validate(),
            Self::TransferOutRefund(c) => c.validate(),
            Self::TransferIn(c) => c.validate(),
        };
        res.map_err(BridgeError::from)
    }

    /// Canonical JSON of the inner claim, as carried by the oracle.
    pub fn payload(&self) -> Result<String> {
        match self {
            Self::SkipSequence(c) => canonical::to_string(c),
            Self::UpdateBind(c) => canonical::to_string(c),
            Self::TransferOutRefund(c) => canonical::to_string(c),
            Self::TransferIn(c) => canonical::to_string(c),
        }
    }
}

impl From<TransferInClaim> for Claim {
    fn from(c: TransferInClaim) -> Self {
        Self::TransferIn(c)
    }
}

impl From<TransferOutRefundClaim> for Claim {
    fn from(c: TransferOutRefundClaim) -> Self {
        Self::TransferOutRefund(c)
    }
}

impl From<UpdateBindClaim> for Claim {
    fn from(c: UpdateBindClaim) -> Self {
        Self::UpdateBind(c)
    }
}

impl From<SkipSequenceClaim> for Claim {
    fn from(c: SkipSequenceClaim) -> Self {
        Self::SkipSequence(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Network;
    use crate::utils::assert_err;

    fn receiver(b: u8) -> AccAddress {
        AccAddress::new(Network::Mainnet, [b; 20])
    }

    fn transfer_in() -> TransferInClaim {
        TransferInClaim {
            contract_address: ForeignAddress::from_hex("0xdeadbeef"),
            refund_addresses: vec![
                ForeignAddress::from_hex("0x01"),
                ForeignAddress::from_hex("0x02"),
            ],
            receiver_addresses: vec![receiver(7), receiver(7)],
            amounts: vec![100, 200],
            symbol: "BNB".into(),
            relay_fee: Coin::new("BNB", 1),
            expire_time: 1_700_000_000,
        }
    }

    #[test]
    fn enum_codes() {
        assert_eq!(u16::from(RefundReason::InsufficientBalance), 3);
        assert_eq!(RefundReason::try_from(4u16).unwrap(), RefundReason::Unknown);
        assert!(RefundReason::try_from(0u16).is_err());

        assert_eq!(i8::from(BindStatus::InvalidParameter), 3);
        assert!(BindStatus::try_from(-1i8).is_err());

        for ty in ClaimType::ALL {
            assert_eq!(ClaimType::try_from(i8::from(ty)).unwrap(), ty);
            assert_eq!(ty.name().parse::<ClaimType>().unwrap(), ty);
        }
        assert!("Bogus".parse::<ClaimType>().is_err());
    }

    #[test]
    fn numeric_enums_share_error_type() {
        assert_eq!(
            ClaimType::try_from(9i8).unwrap_err(),
            ValidationError::Invalid {
                field: "claim_type",
                reason: "unknown claim type",
            }
        );
        assert_eq!(RefundReason::try_from(5u16).unwrap_err().field(), "refund_reason");
        assert_eq!(BindStatus::try_from(4i8).unwrap_err().field(), "status");

        assert!(serde_json::from_str::<SkipSequenceClaim>(r#"{"claim_type":9,"sequence":1}"#).is_err());
    }

    #[test]
    fn enums_encode_as_numbers() {
        let refund = TransferOutRefundClaim {
            refund_address: receiver(7),
            amount: Coin::new("BNB", 10),
            refund_reason: RefundReason::Timeout,
        };
        assert_eq!(
            canonical::to_string(&refund).unwrap(),
            r#"{"refund_address":"bnb1qurswpc8qurswpc8qurswpc8qurswpc83hckp0","amount":{"denom":"BNB","amount":10},"refund_reason":2}"#
        );

        let skip = SkipSequenceClaim {
            claim_type: ClaimType::TransferIn,
            sequence: 9,
        };
        assert_eq!(
            canonical::to_string(&skip).unwrap(),
            r#"{"claim_type":4,"sequence":9}"#
        );

        assert!(serde_json::from_str::<UpdateBindClaim>(
            r#"{"status":7,"symbol":"BNB","contract_address":"0x01"}"#
        )
        .is_err());
    }

    #[test]
    fn transfer_in_validation() {
        let claim = transfer_in();
        assert!(claim.validate().is_ok());
        assert_eq!(claim.transfers().count(), 2);

        let mut bad = claim.clone();
        bad.amounts.pop();
        assert_eq!(bad.validate().unwrap_err().field(), "amounts");

        let mut bad = claim.clone();
        bad.receiver_addresses.push(receiver(1));
        assert_eq!(bad.validate().unwrap_err().field(), "receiver_addresses");

        let mut bad = claim.clone();
        bad.refund_addresses[1] = ForeignAddress::ZERO;
        assert_eq!(bad.validate().unwrap_err().field(), "refund_addresses");

        let mut bad = claim.clone();
        bad.amounts[0] = 0;
        assert_eq!(bad.validate().unwrap_err().field(), "amounts");

        let mut bad = claim.clone();
        bad.relay_fee.amount = -1;
        assert_eq!(bad.validate().unwrap_err().field(), "relay_fee");

        let mut bad = claim;
        bad.refund_addresses.clear();
        bad.receiver_addresses.clear();
        bad.amounts.clear();
        assert_eq!(
            bad.validate().unwrap_err(),
            ValidationError::Empty {
                field: "refund_addresses"
            }
        );
    }

    #[test]
    fn other_claim_validation() {
        let update = UpdateBindClaim {
            status: BindStatus::Success,
            symbol: "BNB".into(),
            contract_address: ForeignAddress::ZERO,
        };
        assert_eq!(update.validate().unwrap_err().field(), "contract_address");

        let skip = SkipSequenceClaim {
            claim_type: ClaimType::SkipSequence,
            sequence: 1,
        };
        assert_eq!(skip.validate().unwrap_err().field(), "claim_type");

        let skip = Claim::from(SkipSequenceClaim {
            claim_type: ClaimType::UpdateBind,
            sequence: -1,
        });
        assert_err(
            skip.validate(),
            BridgeError::Validation(ValidationError::Negative {
                field: "sequence",
                value: -1,
            }),
        );

        let refund = TransferOutRefundClaim {
            refund_address: receiver(7),
            amount: Coin::new("BNB", 0),
            refund_reason: RefundReason::UnboundToken,
        };
        assert_eq!(refund.validate().unwrap_err().field(), "amount");
    }

    #[test]
    fn claim_envelope() {
        let claim: Claim = transfer_in().into();
        assert_eq!(claim.claim_type(), ClaimType::TransferIn);
        assert!(claim.validate().is_ok());

        let json = serde_json::to_string(&claim).unwrap();
        assert!(json.starts_with(r#"{"claim_type":"TransferIn","claim":{"contract_address":"#));
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claim);

        let payload = claim.payload().unwrap();
        assert!(payload.starts_with(
            r#"{"contract_address":"0x00000000000000000000000000000000deadbeef","refund_addresses":["#
        ));
        assert!(payload.ends_with(
            r#""amounts":[100,200],"symbol":"BNB","relay_fee":{"denom":"BNB","amount":1},"expire_time":1700000000}"#
        ));
    }
}
