//! JSON file I/O for messages, claims and related documents.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads a JSON-encoded file from the given `path` and deserializes into type `T`.
///
/// # Errors
///
/// Returns an `anyhow::Error` if the file cannot be opened, read, or parsed.
///
/// # Examples
///
/// ```no_run
/// use bridgemsg_core::interface::load_bridge_data;
/// use bridgemsg_core::BridgeMsg;
///
/// let msg: BridgeMsg = load_bridge_data("./bridge_msg.json").unwrap();
/// println!("{msg}");
/// ```
pub fn load_bridge_data<P, T>(path: P) -> anyhow::Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("loading bridge data: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parsing JSON from {:?}", path))
}

/// Writes `data` (serializable) as pretty-printed JSON to the given `path`.
///
/// Not for sign bytes: use [`crate::canonical`] for anything that is signed.
///
/// # Errors
///
/// Returns an `anyhow::Error` if the file cannot be created or data cannot be serialized.
pub fn save_bridge_data<P, T>(path: P, data: &T) -> anyhow::Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating file {:?}", path))?;
    serde_json::to_writer_pretty(file, data)
        .with_context(|| format!("serializing to JSON to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccAddress, BindMsg, BridgeMsg, ForeignAddress, Network};

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("bridgemsg-{}.json", std::process::id()));
        let msg: BridgeMsg = BindMsg::new(
            AccAddress::new(Network::Testnet, [3u8; 20]),
            "BNB",
            1,
            ForeignAddress::from_hex("0xabcdef"),
            18,
            1,
        )
        .into();

        save_bridge_data(&path, &msg).unwrap();
        let loaded: BridgeMsg = load_bridge_data(&path).unwrap();
        assert_eq!(loaded, msg);
        std::fs::remove_file(&path).unwrap();

        assert!(load_bridge_data::<_, BridgeMsg>(&path).is_err());
    }
}
