//! Subcommands of the `swift` tool.

use alloy_primitives::B256;
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swift_config::ConfigError;
use swift_order::{
	parse_nonce, EvmOrderParamsBuilder, GaslessOrderAssembler, OrderEncoder, OrderError,
};
use swift_types::{AddressCodec, ChainIdRegistry, ChainInfo, Erc20Permit, GaslessBundle, Quote};
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
	#[error("Failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("Invalid JSON in {path}: {source}")]
	Json {
		path: PathBuf,
		source: serde_json::Error,
	},
	#[error("Failed to serialize output: {0}")]
	Output(#[from] serde_json::Error),
	#[error(transparent)]
	Order(#[from] OrderError),
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Quote and address arguments shared by the order commands.
#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
	/// Path to the quote JSON file
	#[arg(long)]
	pub quote: PathBuf,

	/// Swapper address on the source chain
	#[arg(long)]
	pub swapper: String,

	/// Recipient address on the destination chain
	#[arg(long)]
	pub destination: String,

	/// Referrer address on the destination chain
	#[arg(long)]
	pub referrer: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
	/// Compute the order hash of a quote for a given nonce
	Hash {
		#[command(flatten)]
		order: OrderArgs,

		/// 32-byte order nonce as hex
		#[arg(long)]
		random: String,
	},
	/// Build the parameters of an on-chain order submission
	Params {
		#[command(flatten)]
		order: OrderArgs,

		/// Network id of the chain the signer is connected to
		#[arg(long)]
		signer_chain_id: u64,
	},
	/// Assemble a gasless order and its typed-data payload
	Gasless {
		#[command(flatten)]
		order: OrderArgs,

		/// Network id of the chain the signer is connected to
		#[arg(long)]
		signer_chain_id: String,

		/// Path to an ERC-2612 permit JSON file
		#[arg(long)]
		permit: Option<PathBuf>,
	},
	/// List the chains of the active registry
	Chains,
}

/// A gasless bundle together with the digest the swapper signs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GaslessOutput {
	#[serde(flatten)]
	bundle: GaslessBundle,
	signing_hash: B256,
}

/// A registry entry with the native token placeholder quotes use on it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainEntry<'a> {
	#[serde(flatten)]
	chain: &'a ChainInfo,
	native_token: String,
}

impl<'a> From<&'a ChainInfo> for ChainEntry<'a> {
	fn from(chain: &'a ChainInfo) -> Self {
		let sentinel = AddressCodec::native_token_sentinel(chain);
		Self {
			chain,
			native_token: AddressCodec::decode(&sentinel, chain),
		}
	}
}

/// Runs `command` against the given chain registry and returns its JSON
/// output.
pub async fn execute(command: Command, chains: Arc<ChainIdRegistry>) -> Result<Value, CliError> {
	let encoder = OrderEncoder::new(chains);

	match command {
		Command::Hash { order, random } => {
			let quote: Quote = read_json(&order.quote).await?;
			let random = parse_nonce(&random)?;
			let order_hash = encoder.build_order_hash(
				&quote,
				&order.swapper,
				&order.destination,
				order.referrer.as_deref(),
				&random,
			)?;
			Ok(serde_json::json!({ "orderHash": order_hash }))
		},
		Command::Params {
			order,
			signer_chain_id,
		} => {
			let quote: Quote = read_json(&order.quote).await?;
			let params = EvmOrderParamsBuilder::with_os_nonces(encoder).build(
				&quote,
				&order.swapper,
				&order.destination,
				order.referrer.as_deref(),
				signer_chain_id,
			)?;
			Ok(serde_json::to_value(params)?)
		},
		Command::Gasless {
			order,
			signer_chain_id,
			permit,
		} => {
			let quote: Quote = read_json(&order.quote).await?;
			let permit: Option<Erc20Permit> = match permit {
				Some(path) => Some(read_json(&path).await?),
				None => None,
			};
			let assembler =
				GaslessOrderAssembler::new(EvmOrderParamsBuilder::with_os_nonces(encoder));
			let bundle = assembler.assemble(
				&quote,
				&order.swapper,
				&order.destination,
				order.referrer.as_deref(),
				&signer_chain_id,
				permit,
			)?;
			let signing_hash = bundle.order_typed_data.signing_hash();
			Ok(serde_json::to_value(GaslessOutput {
				bundle,
				signing_hash,
			})?)
		},
		Command::Chains => {
			let chains: Vec<ChainEntry> = encoder.chains().iter().map(ChainEntry::from).collect();
			Ok(serde_json::to_value(chains)?)
		},
	}
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
	let contents = tokio::fs::read_to_string(path)
		.await
		.map_err(|source| CliError::Io {
			path: path.to_path_buf(),
			source,
		})?;
	serde_json::from_str(&contents).map_err(|source| CliError::Json {
		path: path.to_path_buf(),
		source,
	})
}
