//! Gasless Swift order assembly.
//!
//! A gasless order is submitted by a relayer on the swapper's behalf. The
//! swapper authorizes it off-chain by signing a `CreateOrder` typed-data
//! message and, optionally, an ERC-2612 permit for the input token. This
//! module checks that a quote is eligible for that flow and assembles
//! everything the signer and the relayer need.

use crate::params::EvmOrderParamsBuilder;
use crate::OrderError;
use alloy_primitives::{Address, U256};
use swift_types::{
	truncate_id, AddressCodec, AmountCodec, ChainFamily, Erc20Permit, GaslessBundle,
	GaslessOrderParams, Quote, QuoteType, TypedData,
};

/// Assembles gasless Swift orders on top of an [`EvmOrderParamsBuilder`].
#[derive(Clone)]
pub struct GaslessOrderAssembler {
	params: EvmOrderParamsBuilder,
}

impl GaslessOrderAssembler {
	pub fn new(params: EvmOrderParamsBuilder) -> Self {
		Self { params }
	}

	/// Checks gasless eligibility and assembles the order bundle.
	///
	/// `signer_chain_id` is the signer's network id as received from the
	/// caller. The permit, if any, is returned as given.
	pub fn assemble(
		&self,
		quote: &Quote,
		swapper: &str,
		destination: &str,
		referrer: Option<&str>,
		signer_chain_id: &str,
		permit: Option<Erc20Permit>,
	) -> Result<GaslessBundle, OrderError> {
		if quote.quote_type != QuoteType::Swift {
			return Err(OrderError::WrongQuoteType(quote.quote_type));
		}
		if !quote.gasless {
			return Err(OrderError::GaslessUnsupported);
		}
		let signer_chain_id = parse_signer_chain_id(signer_chain_id)?;
		if !quote.has_deadline() {
			return Err(OrderError::MissingDeadline);
		}
		if !quote
			.from_token
			.contract
			.trim()
			.eq_ignore_ascii_case(quote.swift_input_contract.trim())
		{
			tracing::warn!(
				from_token = %quote.from_token.contract,
				swift_input = %quote.swift_input_contract,
				"Gasless quote requires a source swap"
			);
			return Err(OrderError::SourceSwapUnsupported {
				from_token: quote.from_token.contract.clone(),
				swift_input: quote.swift_input_contract.clone(),
			});
		}

		let params = self
			.params
			.build(quote, swapper, destination, referrer, signer_chain_id)?;
		let encoder = self.params.encoder();
		let order_hash = encoder.build_order_hash(
			quote,
			swapper,
			destination,
			referrer,
			&params.order.random,
		)?;

		let submission_fee = quote.submit_relayer_fee64;
		let total_input =
			AmountCodec::to_native_units(quote.effective_amount_in, quote.swift_input_decimals)?;
		let input_amount = total_input.checked_sub(submission_fee).ok_or(
			OrderError::SubmissionFeeExceedsInput {
				fee: submission_fee,
				amount: total_input,
			},
		)?;

		let contract = AddressCodec::encode_for_family(&params.contract_address, ChainFamily::Evm)?;
		let typed_data = TypedData::create_order(
			signer_chain_id,
			Address::from_slice(&contract[12..]),
			order_hash,
			U256::from(input_amount),
			U256::from(submission_fee),
		);

		tracing::debug!(
			order_hash = %truncate_id(&order_hash.to_string()),
			input_amount,
			submission_fee,
			"Assembled gasless Swift order"
		);

		Ok(GaslessBundle {
			permit_params: permit,
			order_hash,
			order_params: GaslessOrderParams {
				source_chain_id: encoder.chains().id_by_name(&quote.from_chain)?,
				token_in: params.token_in,
				amount_in: params.amount_in,
				submission_fee,
				order: params.order,
			},
			order_typed_data: typed_data,
		})
	}
}

/// Parses a network id given either in decimal or as `0x`-prefixed hex, the
/// form wallets report from `eth_chainId`.
fn parse_signer_chain_id(raw: &str) -> Result<u64, OrderError> {
	let trimmed = raw.trim();
	let parsed = match trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
	{
		Some(digits) => u64::from_str_radix(digits, 16),
		None => trimmed.parse(),
	};
	parsed.map_err(|_| OrderError::InvalidSignerChain(raw.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encoder::OrderEncoder;
	use crate::nonce::FixedNonceSource;
	use crate::test_support::*;
	use alloy_primitives::B256;
	use std::sync::Arc;

	const NONCE: B256 = B256::repeat_byte(0x42);

	fn assembler() -> GaslessOrderAssembler {
		GaslessOrderAssembler::new(EvmOrderParamsBuilder::new(
			OrderEncoder::default(),
			Arc::new(FixedNonceSource(NONCE)),
		))
	}

	fn assemble(quote: &Quote, signer_chain_id: &str) -> Result<GaslessBundle, OrderError> {
		assembler().assemble(
			quote,
			SWAPPER,
			SOLANA_DESTINATION,
			None,
			signer_chain_id,
			None,
		)
	}

	fn permit() -> Erc20Permit {
		Erc20Permit {
			value: U256::from(100_500_000u64),
			deadline: 1_735_689_600,
			v: 27,
			r: B256::repeat_byte(1),
			s: B256::repeat_byte(2),
		}
	}

	#[test]
	fn test_assemble_bundle() {
		let quote = polygon_to_solana_quote();
		let bundle = assembler()
			.assemble(
				&quote,
				SWAPPER,
				SOLANA_DESTINATION,
				None,
				"137",
				Some(permit()),
			)
			.unwrap();

		assert_eq!(bundle.permit_params, Some(permit()));
		assert_eq!(bundle.order_params.source_chain_id, 5);
		assert_eq!(bundle.order_params.token_in, POLYGON_USDC);
		assert_eq!(bundle.order_params.amount_in, 100_500_000);
		assert_eq!(bundle.order_params.submission_fee, 30_000);
		assert_eq!(bundle.order_params.order.random, NONCE);

		let typed = &bundle.order_typed_data;
		assert_eq!(typed.domain.name, "Mayan Swift");
		assert_eq!(typed.domain.chain_id, 137);
		assert_eq!(
			typed.domain.verifying_contract,
			SWIFT_CONTRACT.parse::<Address>().unwrap()
		);
		assert_eq!(typed.value.order_id, bundle.order_hash);
		assert_eq!(typed.value.input_amount, U256::from(100_470_000u64));
		assert_eq!(typed.value.submission_fee, U256::from(30_000u64));
	}

	#[test]
	fn test_hash_uses_params_nonce() {
		let quote = polygon_to_solana_quote();
		let bundle = assemble(&quote, "137").unwrap();

		let expected = OrderEncoder::default()
			.build_order_hash(&quote, SWAPPER, SOLANA_DESTINATION, None, &NONCE)
			.unwrap();
		assert_eq!(bundle.order_hash, expected);
	}

	#[test]
	fn test_wrong_quote_type() {
		let mut quote = polygon_to_solana_quote();
		quote.quote_type = QuoteType::Mctp;

		assert!(matches!(
			assemble(&quote, "137").unwrap_err(),
			OrderError::WrongQuoteType(QuoteType::Mctp)
		));
	}

	#[test]
	fn test_gasless_not_supported() {
		let mut quote = polygon_to_solana_quote();
		quote.gasless = false;

		assert!(matches!(
			assemble(&quote, "137").unwrap_err(),
			OrderError::GaslessUnsupported
		));
	}

	#[test]
	fn test_invalid_signer_chain() {
		let quote = polygon_to_solana_quote();

		for signer in ["", "polygon", "-1", "0x", "0x-89", "0xzz", "89h"] {
			assert!(matches!(
				assemble(&quote, signer).unwrap_err(),
				OrderError::InvalidSignerChain(_)
			));
		}
	}

	#[test]
	fn test_hex_signer_chain() {
		let quote = polygon_to_solana_quote();
		let decimal = assemble(&quote, "137").unwrap();

		for signer in ["0x89", "0X89", " 0x89 "] {
			assert_eq!(assemble(&quote, signer).unwrap(), decimal);
		}
	}

	#[test]
	fn test_missing_deadline() {
		let mut quote = polygon_to_solana_quote();
		quote.deadline64 = 0;

		assert!(matches!(
			assemble(&quote, "137").unwrap_err(),
			OrderError::MissingDeadline
		));
	}

	#[test]
	fn test_source_swap_rejected() {
		let mut quote = polygon_to_solana_quote();
		// USDT in, swapped to USDC before deposit
		quote.from_token.contract = "0xc2132D05D31c914a87C6611C10748AEb04B58e8F".to_string();

		assert!(matches!(
			assemble(&quote, "137").unwrap_err(),
			OrderError::SourceSwapUnsupported { .. }
		));
	}

	#[test]
	fn test_input_contract_compared_case_insensitively() {
		let mut quote = polygon_to_solana_quote();
		quote.from_token.contract = POLYGON_USDC.to_lowercase();

		assert!(assemble(&quote, "137").is_ok());
	}

	#[test]
	fn test_submission_fee_exceeds_input() {
		let mut quote = polygon_to_solana_quote();
		quote.effective_amount_in = dec("0.01");

		assert!(matches!(
			assemble(&quote, "137").unwrap_err(),
			OrderError::SubmissionFeeExceedsInput {
				fee: 30_000,
				amount: 10_000
			}
		));
	}

	#[test]
	fn test_amounts_use_input_token_base_units() {
		let mut quote = polygon_to_solana_quote();
		quote.from_token.decimals = 18;
		quote.swift_input_decimals = 18;
		quote.effective_amount_in = dec("1.5");

		let bundle = assemble(&quote, "137").unwrap();
		assert_eq!(bundle.order_params.amount_in, 1_500_000_000_000_000_000);
		assert_eq!(
			bundle.order_typed_data.value.input_amount,
			U256::from(1_500_000_000_000_000_000u64 - 30_000)
		);
		assert_eq!(
			bundle.order_typed_data.value.submission_fee,
			U256::from(30_000u64)
		);
	}

	#[test]
	fn test_signer_chain_checked_by_params() {
		let quote = polygon_to_solana_quote();

		assert!(matches!(
			assemble(&quote, "1").unwrap_err(),
			OrderError::ChainMismatch { .. }
		));
	}
}
