use bridgemsg_core::BridgeError;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
    #[error("Invalid account address: {0}")]
    Account(#[from] bridgemsg_core::AddressError),
}
