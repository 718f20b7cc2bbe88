//! Derived Swift order records.
//!
//! These are the outputs of order derivation: the order as the settlement
//! contract sees it, the parameter set for an EVM submission, and the bundle
//! returned for a gasless submission.

use crate::chains::WireChainId;
use crate::quote::Erc20Permit;
use crate::typed_data::TypedData;
use crate::utils::serde_helpers::u64_string;
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Keccak-256 digest of an encoded order; the on-chain order id.
pub type OrderHash = B256;

/// A Swift order with every address in canonical 32-byte form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftOrder {
	pub trader: B256,
	pub token_out: B256,
	#[serde(with = "u64_string")]
	pub min_amount_out: u64,
	#[serde(with = "u64_string")]
	pub gas_drop: u64,
	#[serde(with = "u64_string")]
	pub cancel_fee: u64,
	#[serde(with = "u64_string")]
	pub refund_fee: u64,
	#[serde(with = "u64_string")]
	pub deadline: u64,
	pub dest_addr: B256,
	pub dest_chain_id: WireChainId,
	/// All-zero when the order has no referrer.
	pub referrer_addr: B256,
	pub referrer_bps: u8,
	pub protocol_bps: u8,
	pub auction_mode: u8,
	/// Per-submission nonce that makes the order hash unique.
	pub random: B256,
}

/// Everything needed to submit a Swift order from an EVM chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmSwiftParams {
	/// Swift settlement contract on the source chain.
	pub contract_address: String,
	/// Token deposited into the contract, as given by the quote.
	pub token_in: String,
	#[serde(with = "u64_string")]
	pub amount_in: u64,
	pub order: SwiftOrder,
}

/// Order parameters of a gasless submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaslessOrderParams {
	#[serde(flatten)]
	pub order: SwiftOrder,
	pub source_chain_id: WireChainId,
	pub token_in: String,
	#[serde(with = "u64_string")]
	pub amount_in: u64,
	#[serde(with = "u64_string")]
	pub submission_fee: u64,
}

/// Result of assembling a gasless Swift order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaslessBundle {
	/// Caller-supplied permit, passed through unmodified.
	pub permit_params: Option<Erc20Permit>,
	pub order_hash: OrderHash,
	pub order_params: GaslessOrderParams,
	pub order_typed_data: TypedData,
}
