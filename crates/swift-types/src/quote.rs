//! Quote and permit input types.
//!
//! A quote is produced by the external quoting service and consumed
//! read-only by the order derivation code. The record is closed: unknown
//! fields are rejected instead of being passed through.

use crate::chains::WireChainId;
use crate::utils::serde_helpers::{u256_string, u64_string};
use alloy_primitives::{B256, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Route type of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteType {
	/// Auction-based fast settlement.
	#[serde(rename = "SWIFT")]
	Swift,
	#[serde(rename = "MCTP")]
	Mctp,
	#[serde(rename = "WH")]
	Wormhole,
}

impl fmt::Display for QuoteType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			QuoteType::Swift => write!(f, "SWIFT"),
			QuoteType::Mctp => write!(f, "MCTP"),
			QuoteType::Wormhole => write!(f, "WH"),
		}
	}
}

/// Token leg of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuoteToken {
	/// Token contract (hex for EVM chains, base58 mint on Solana). The EVM
	/// zero address denotes the chain's native asset.
	pub contract: String,
	/// Native decimal precision of the token.
	pub decimals: u8,
	/// Wire chain id the token lives on.
	pub w_chain_id: WireChainId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
}

/// A fully resolved Swift quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Quote {
	#[serde(rename = "type")]
	pub quote_type: QuoteType,
	pub from_chain: String,
	pub to_chain: String,
	pub from_token: QuoteToken,
	pub to_token: QuoteToken,
	/// Input amount after any source-chain swap, in whole tokens.
	pub effective_amount_in: Decimal,
	/// Minimum output amount, in whole destination tokens.
	pub min_amount_out: Decimal,
	/// Native gas to deliver on the destination chain, in whole gas tokens.
	pub gas_drop: Decimal,
	#[serde(with = "u64_string")]
	pub cancel_relayer_fee64: u64,
	#[serde(with = "u64_string")]
	pub refund_relayer_fee64: u64,
	#[serde(with = "u64_string")]
	pub submit_relayer_fee64: u64,
	/// Order deadline; zero means the quote carries no deadline.
	#[serde(with = "u64_string", default)]
	pub deadline64: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub referrer_bps: Option<u16>,
	#[serde(default)]
	pub protocol_bps: u16,
	pub swift_auction_mode: u8,
	/// Token actually deposited into the Swift contract.
	pub swift_input_contract: String,
	pub swift_input_decimals: u8,
	/// Swift settlement contract on the source chain.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub swift_mayan_contract: Option<String>,
	/// Whether the quote may be submitted through a gasless permit flow.
	#[serde(default)]
	pub gasless: bool,
}

impl Quote {
	pub fn is_swift(&self) -> bool {
		self.quote_type == QuoteType::Swift
	}

	pub fn has_deadline(&self) -> bool {
		self.deadline64 != 0
	}
}

/// ERC-2612 permit supplied by the caller for gasless orders.
///
/// The permit is opaque to order derivation and is returned unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Permit {
	#[serde(with = "u256_string")]
	pub value: U256,
	#[serde(with = "u64_string")]
	pub deadline: u64,
	pub v: u8,
	pub r: B256,
	pub s: B256,
}
