//! Swift order encoding and hashing.
//!
//! The encoder resolves a quote's chains, canonicalizes every address and
//! converts every amount into the integer form the settlement contract
//! expects, then serializes the result into the fixed order buffer and
//! hashes it. The order hash is the on-chain identity of the order, so any
//! divergence from the contract's own encoding makes the order unfillable.

use crate::layout::{OrderField, OrderWriter, ORDER_DATA_SIZE};
use crate::OrderError;
use alloy_primitives::{keccak256, B256};
use std::sync::Arc;
use swift_types::{
	truncate_id, AddressCodec, AmountCodec, ChainIdRegistry, OrderHash, Quote, SwiftOrder,
	WireChainId, DEFAULT_CHAIN_REGISTRY,
};

/// A derived order together with the source-side fields that are hashed
/// alongside it but are not part of the [`SwiftOrder`] record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCommitment {
	pub source_chain_id: WireChainId,
	/// Canonical form of the token deposited into the contract.
	pub token_in: B256,
	pub order: SwiftOrder,
}

impl OrderCommitment {
	/// Serializes the commitment into the order wire layout.
	pub fn encode(&self) -> Result<[u8; ORDER_DATA_SIZE], OrderError> {
		let order = &self.order;
		let mut writer = OrderWriter::new();
		writer.put_b256(OrderField::Trader, &order.trader)?;
		writer.put_u16(OrderField::SourceChainId, self.source_chain_id)?;
		writer.put_b256(OrderField::TokenIn, &self.token_in)?;
		writer.put_b256(OrderField::DestAddr, &order.dest_addr)?;
		writer.put_u16(OrderField::DestChainId, order.dest_chain_id)?;
		writer.put_b256(OrderField::TokenOut, &order.token_out)?;
		writer.put_u64(OrderField::MinAmountOut, order.min_amount_out)?;
		writer.put_u64(OrderField::GasDrop, order.gas_drop)?;
		writer.put_u64(OrderField::CancelFee, order.cancel_fee)?;
		writer.put_u64(OrderField::RefundFee, order.refund_fee)?;
		writer.put_u64(OrderField::Deadline, order.deadline)?;
		writer.put_b256(OrderField::ReferrerAddr, &order.referrer_addr)?;
		writer.put_u8(OrderField::ReferrerBps, order.referrer_bps)?;
		writer.put_u8(OrderField::ProtocolBps, order.protocol_bps)?;
		writer.put_u8(OrderField::AuctionMode, order.auction_mode)?;
		writer.put_b256(OrderField::Random, &order.random)?;
		writer.finish()
	}

	/// Keccak-256 of the encoded order.
	pub fn hash(&self) -> Result<OrderHash, OrderError> {
		Ok(keccak256(self.encode()?))
	}
}

/// Derives, encodes and hashes Swift orders against a chain registry.
#[derive(Debug, Clone)]
pub struct OrderEncoder {
	chains: Arc<ChainIdRegistry>,
}

impl Default for OrderEncoder {
	fn default() -> Self {
		Self::new(Arc::new(ChainIdRegistry::clone(&DEFAULT_CHAIN_REGISTRY)))
	}
}

impl OrderEncoder {
	pub fn new(chains: Arc<ChainIdRegistry>) -> Self {
		Self { chains }
	}

	pub fn chains(&self) -> &ChainIdRegistry {
		&self.chains
	}

	/// Derives the order a quote commits to.
	///
	/// `swapper` is an address on the source chain; `destination` and
	/// `referrer` are addresses on the destination chain. A missing or empty
	/// referrer yields the all-zero referrer address.
	pub fn derive_order(
		&self,
		quote: &Quote,
		swapper: &str,
		destination: &str,
		referrer: Option<&str>,
		random: B256,
	) -> Result<OrderCommitment, OrderError> {
		let source_chain = self.chains.chain_by_name(&quote.from_chain)?;
		let dest_chain = self.chains.chain_by_name(&quote.to_chain)?;

		tracing::debug!(
			source_chain = source_chain.wire_id,
			dest_chain = dest_chain.wire_id,
			"Resolved Swift order chains"
		);

		let referrer_addr = match referrer.map(str::trim).filter(|r| !r.is_empty()) {
			Some(referrer) => AddressCodec::encode(referrer, dest_chain)?,
			None => B256::ZERO,
		};
		let referrer_bps = fee_rate("referrerBps", quote.referrer_bps.unwrap_or(0))?;
		let protocol_bps = fee_rate("protocolBps", quote.protocol_bps)?;

		let order = SwiftOrder {
			trader: AddressCodec::encode(swapper, source_chain)?,
			token_out: AddressCodec::encode_token(&quote.to_token.contract, dest_chain)?,
			min_amount_out: AmountCodec::to_fixed_point(
				quote.min_amount_out,
				quote.to_token.decimals,
			)?,
			gas_drop: AmountCodec::to_fixed_point(quote.gas_drop, dest_chain.gas_decimals)?,
			cancel_fee: quote.cancel_relayer_fee64,
			refund_fee: quote.refund_relayer_fee64,
			deadline: quote.deadline64,
			dest_addr: AddressCodec::encode(destination, dest_chain)?,
			dest_chain_id: dest_chain.wire_id,
			referrer_addr,
			referrer_bps,
			protocol_bps,
			auction_mode: quote.swift_auction_mode,
			random,
		};

		Ok(OrderCommitment {
			source_chain_id: source_chain.wire_id,
			token_in: AddressCodec::encode_token(&quote.swift_input_contract, source_chain)?,
			order,
		})
	}

	/// Encodes the order a quote commits to into its 239-byte wire form.
	pub fn encode_order(
		&self,
		quote: &Quote,
		swapper: &str,
		destination: &str,
		referrer: Option<&str>,
		random: &B256,
	) -> Result<[u8; ORDER_DATA_SIZE], OrderError> {
		self.derive_order(quote, swapper, destination, referrer, *random)?
			.encode()
	}

	/// Computes the on-chain order hash for a quote and nonce.
	pub fn build_order_hash(
		&self,
		quote: &Quote,
		swapper: &str,
		destination: &str,
		referrer: Option<&str>,
		random: &B256,
	) -> Result<OrderHash, OrderError> {
		let hash = self
			.derive_order(quote, swapper, destination, referrer, *random)?
			.hash()?;
		tracing::debug!(
			order_hash = %truncate_id(&hash.to_string()),
			"Computed Swift order hash"
		);
		Ok(hash)
	}
}

fn fee_rate(field: &'static str, value: u16) -> Result<u8, OrderError> {
	u8::try_from(value).map_err(|_| OrderError::FeeRateOutOfRange { field, value })
}
