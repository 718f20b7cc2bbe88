//! EVM submission parameters for Swift orders.

use crate::encoder::OrderEncoder;
use crate::nonce::{NonceSource, OsNonceSource};
use crate::OrderError;
use std::sync::Arc;
use swift_types::{AmountCodec, EvmSwiftParams, Quote};

/// Builds the parameters of an on-chain Swift order submission.
///
/// Each call draws a fresh nonce, so two builds of the same quote produce
/// two distinct orders.
#[derive(Clone)]
pub struct EvmOrderParamsBuilder {
	encoder: OrderEncoder,
	nonces: Arc<dyn NonceSource>,
}

impl EvmOrderParamsBuilder {
	pub fn new(encoder: OrderEncoder, nonces: Arc<dyn NonceSource>) -> Self {
		Self { encoder, nonces }
	}

	/// Builder drawing nonces from the operating system's secure RNG.
	pub fn with_os_nonces(encoder: OrderEncoder) -> Self {
		Self::new(encoder, Arc::new(OsNonceSource))
	}

	pub fn encoder(&self) -> &OrderEncoder {
		&self.encoder
	}

	/// Validates `quote` against the signer's chain and derives the order
	/// parameters.
	///
	/// `signer_chain_id` is the network id of the chain the signer is
	/// connected to.
	pub fn build(
		&self,
		quote: &Quote,
		swapper: &str,
		destination: &str,
		referrer: Option<&str>,
		signer_chain_id: u64,
	) -> Result<EvmSwiftParams, OrderError> {
		let chains = self.encoder.chains();
		let source_chain = chains.id_by_name(&quote.from_chain)?;
		let signer_chain = chains.id_by_numeric_id(signer_chain_id)?;
		if source_chain != signer_chain {
			tracing::warn!(
				source_chain,
				signer_chain,
				"Signer is not connected to the quote source chain"
			);
			return Err(OrderError::ChainMismatch {
				signer_chain_id,
				source_chain,
				signer_chain,
			});
		}

		let contract_address = quote
			.swift_mayan_contract
			.as_deref()
			.map(str::trim)
			.filter(|contract| !contract.is_empty())
			.ok_or(OrderError::MissingContract)?;

		let dest_chain = chains.id_by_name(&quote.to_chain)?;
		if quote.to_token.w_chain_id != dest_chain {
			tracing::warn!(
				dest_chain,
				token_chain = quote.to_token.w_chain_id,
				"Destination token is not on the destination chain"
			);
			return Err(OrderError::DestinationChainMismatch {
				expected: dest_chain,
				actual: quote.to_token.w_chain_id,
			});
		}

		if !quote.has_deadline() {
			return Err(OrderError::MissingDeadline);
		}

		let amount_in =
			AmountCodec::to_native_units(quote.effective_amount_in, quote.from_token.decimals)?;
		let random = self.nonces.next_nonce();
		let commitment = self
			.encoder
			.derive_order(quote, swapper, destination, referrer, random)?;

		Ok(EvmSwiftParams {
			contract_address: contract_address.to_string(),
			token_in: quote.swift_input_contract.clone(),
			amount_in,
			order: commitment.order,
		})
	}
}
