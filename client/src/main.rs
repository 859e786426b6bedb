use std::path::PathBuf;

use bridgemsg_client::{
    encode_account, inspect_claim, normalize_foreign_address, prepare_sign_request,
};
use bridgemsg_core::interface::{load_bridge_data, save_bridge_data};
use bridgemsg_core::{BridgeMsg, Claim, Network};
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use tracing_subscriber::EnvFilter;

const DEFAULT_MSG_PATH: &str = "./bridge_msg.json";
const DEFAULT_CLAIM_PATH: &str = "./bridge_claim.json";

fn main() -> anyhow::Result<()> {
    // In order to view logs, run with e.g. `RUST_LOG=info`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SignBytes { msg, out } => {
            let msg: BridgeMsg = load_bridge_data(&msg)?;
            let request = prepare_sign_request(&msg)?;

            println!("{}", request.description);
            println!("{}", hex::encode(&request.sign_bytes));

            if let Some(out) = out {
                save_bridge_data(&out, &request)?;
                tracing::info!("Sign request written to {:?}", out);
            }
        }
        Commands::Claim { claim } => {
            let claim: Claim = load_bridge_data(&claim)?;
            let summary = inspect_claim(&claim)?;

            println!(
                "{} ({})",
                summary.claim_type,
                i8::from(summary.claim_type)
            );
            println!("{}", summary.payload);
        }
        Commands::Address { hex } => {
            println!("{}", normalize_foreign_address(&hex));
        }
        Commands::Account { hex, network } => {
            let addr = encode_account(network.into(), &hex)?;
            println!("{}", addr);
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "bridgemsg-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a stored message and print its sign bytes (hex).
    SignBytes {
        #[arg(short, long,
            value_parser,
            default_value = DEFAULT_MSG_PATH,
            value_hint = ValueHint::FilePath)]
        msg: PathBuf,

        /// Also write a sign request document here.
        #[arg(short, long, value_parser, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
    /// Validate a stored claim and print its canonical payload.
    Claim {
        #[arg(short, long,
            value_parser,
            default_value = DEFAULT_CLAIM_PATH,
            value_hint = ValueHint::FilePath)]
        claim: PathBuf,
    },
    /// Normalize a foreign-chain address.
    Address { hex: String },
    /// Render raw account bytes as a bech32 address.
    Account {
        hex: String,

        #[arg(short, long, value_enum, default_value_t = NetworkArg::Mainnet)]
        network: NetworkArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NetworkArg {
    Mainnet,
    Testnet,
}

impl From<NetworkArg> for Network {
    fn from(value: NetworkArg) -> Self {
        match value {
            NetworkArg::Mainnet => Network::Mainnet,
            NetworkArg::Testnet => Network::Testnet,
        }
    }
}
