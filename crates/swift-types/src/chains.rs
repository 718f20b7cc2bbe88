//! Chain identifier registry for Swift orders.
//!
//! Swift orders refer to chains by their wire chain id, a protocol-internal
//! identifier that is distinct from the chain's own network id. This module
//! maps chain names and chain-native numeric ids onto that space and records
//! the address family and gas token precision of each supported chain.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Protocol-internal chain identifier written into encoded orders.
pub type WireChainId = u16;

/// Errors returned by chain lookups and registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
	#[error("Unsupported chain name: {0}")]
	UnsupportedName(String),
	#[error("Unsupported chain id: {0}")]
	UnsupportedNumericId(u64),
	#[error("Unsupported wire chain id: {0}")]
	UnsupportedWireId(WireChainId),
	#[error("Duplicate chain entry for {field}: {value}")]
	Duplicate { field: &'static str, value: String },
}

/// Address family of a chain.
///
/// Selects how native addresses on that chain are parsed into the canonical
/// 32-byte form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	/// Base58-encoded 32-byte public keys.
	Solana,
	/// 20-byte hex addresses.
	Evm,
}

impl fmt::Display for ChainFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChainFamily::Solana => write!(f, "solana"),
			ChainFamily::Evm => write!(f, "evm"),
		}
	}
}

/// A single supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
	/// Lowercase chain name as used in quotes (e.g. "polygon").
	pub name: String,
	/// Wire chain id used inside encoded orders.
	pub wire_id: WireChainId,
	/// Chain-native numeric id (the EVM chain id for EVM chains).
	pub numeric_id: u64,
	/// Address family used to canonicalize addresses on this chain.
	pub family: ChainFamily,
	/// Decimals of the chain's native gas token.
	pub gas_decimals: u8,
}

impl ChainInfo {
	pub fn new(
		name: impl Into<String>,
		wire_id: WireChainId,
		numeric_id: u64,
		family: ChainFamily,
		gas_decimals: u8,
	) -> Self {
		Self {
			name: name.into(),
			wire_id,
			numeric_id,
			family,
			gas_decimals,
		}
	}
}

// name, wire id, numeric id, family, gas decimals
const SUPPORTED_CHAINS: [(&str, WireChainId, u64, ChainFamily, u8); 8] = [
	("solana", 1, 0, ChainFamily::Solana, 9),
	("ethereum", 2, 1, ChainFamily::Evm, 18),
	("bsc", 4, 56, ChainFamily::Evm, 18),
	("polygon", 5, 137, ChainFamily::Evm, 18),
	("avalanche", 6, 43114, ChainFamily::Evm, 18),
	("arbitrum", 23, 42161, ChainFamily::Evm, 18),
	("optimism", 24, 10, ChainFamily::Evm, 18),
	("base", 30, 8453, ChainFamily::Evm, 18),
];

/// Global registry built from the built-in chain table.
pub static DEFAULT_CHAIN_REGISTRY: Lazy<ChainIdRegistry> = Lazy::new(ChainIdRegistry::default);

/// Bidirectional lookup between chain names, numeric ids and wire ids.
///
/// All three views are maintained together on insertion, and duplicates in
/// any view are rejected, so every lookup direction stays a bijection over
/// the registered set.
#[derive(Debug, Clone)]
pub struct ChainIdRegistry {
	chains: Vec<ChainInfo>,
	by_name: HashMap<String, usize>,
	by_numeric_id: HashMap<u64, usize>,
	by_wire_id: HashMap<WireChainId, usize>,
}

impl Default for ChainIdRegistry {
	fn default() -> Self {
		Self::from_chains(Self::default_chains())
			.unwrap_or_else(|e| panic!("Built-in chain table is inconsistent: {}", e))
	}
}

impl ChainIdRegistry {
	/// Creates an empty registry.
	pub fn empty() -> Self {
		Self {
			chains: Vec::new(),
			by_name: HashMap::new(),
			by_numeric_id: HashMap::new(),
			by_wire_id: HashMap::new(),
		}
	}

	/// Returns the built-in chain table.
	pub fn default_chains() -> Vec<ChainInfo> {
		SUPPORTED_CHAINS
			.iter()
			.map(|&(name, wire_id, numeric_id, family, gas_decimals)| {
				ChainInfo::new(name, wire_id, numeric_id, family, gas_decimals)
			})
			.collect()
	}

	/// Builds a registry from a list of chains.
	///
	/// # Errors
	///
	/// Returns `ChainError::Duplicate` if two entries share a name, numeric id
	/// or wire id.
	pub fn from_chains(chains: impl IntoIterator<Item = ChainInfo>) -> Result<Self, ChainError> {
		let mut registry = Self::empty();
		for chain in chains {
			registry.insert(chain)?;
		}
		Ok(registry)
	}

	/// Registers a chain. Names are stored lowercase.
	pub fn insert(&mut self, mut chain: ChainInfo) -> Result<(), ChainError> {
		chain.name = normalize_name(&chain.name);

		if self.by_name.contains_key(&chain.name) {
			return Err(ChainError::Duplicate {
				field: "name",
				value: chain.name,
			});
		}
		if self.by_numeric_id.contains_key(&chain.numeric_id) {
			return Err(ChainError::Duplicate {
				field: "numeric_id",
				value: chain.numeric_id.to_string(),
			});
		}
		if self.by_wire_id.contains_key(&chain.wire_id) {
			return Err(ChainError::Duplicate {
				field: "wire_id",
				value: chain.wire_id.to_string(),
			});
		}

		let index = self.chains.len();
		self.by_name.insert(chain.name.clone(), index);
		self.by_numeric_id.insert(chain.numeric_id, index);
		self.by_wire_id.insert(chain.wire_id, index);
		self.chains.push(chain);
		Ok(())
	}

	/// Looks up a chain by name (case-insensitive).
	pub fn chain_by_name(&self, name: &str) -> Result<&ChainInfo, ChainError> {
		self.by_name
			.get(&normalize_name(name))
			.map(|&i| &self.chains[i])
			.ok_or_else(|| ChainError::UnsupportedName(name.to_string()))
	}

	/// Looks up a chain by its chain-native numeric id.
	pub fn chain_by_numeric_id(&self, numeric_id: u64) -> Result<&ChainInfo, ChainError> {
		self.by_numeric_id
			.get(&numeric_id)
			.map(|&i| &self.chains[i])
			.ok_or(ChainError::UnsupportedNumericId(numeric_id))
	}

	/// Looks up a chain by its wire id.
	pub fn chain_by_wire_id(&self, wire_id: WireChainId) -> Result<&ChainInfo, ChainError> {
		self.by_wire_id
			.get(&wire_id)
			.map(|&i| &self.chains[i])
			.ok_or(ChainError::UnsupportedWireId(wire_id))
	}

	pub fn id_by_name(&self, name: &str) -> Result<WireChainId, ChainError> {
		self.chain_by_name(name).map(|c| c.wire_id)
	}

	pub fn id_by_numeric_id(&self, numeric_id: u64) -> Result<WireChainId, ChainError> {
		self.chain_by_numeric_id(numeric_id).map(|c| c.wire_id)
	}

	pub fn name_by_id(&self, wire_id: WireChainId) -> Result<&str, ChainError> {
		self.chain_by_wire_id(wire_id).map(|c| c.name.as_str())
	}

	/// Iterates over registered chains in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &ChainInfo> {
		self.chains.iter()
	}

	pub fn len(&self) -> usize {
		self.chains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
