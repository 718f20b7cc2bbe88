//! Swift order encoding and derivation.
//!
//! This crate turns a resolved Swift quote into the artifacts needed to
//! submit it on an EVM chain: the canonical order buffer and its hash, the
//! EVM submission parameters, and the typed-data bundle for gasless
//! submission. Everything here is synchronous and free of I/O; the only
//! source of nondeterminism is the injected [`NonceSource`].

use swift_types::{AddressError, AmountError, ChainError, QuoteType, WireChainId};
use thiserror::Error;

pub mod encoder;
pub mod gasless;
pub mod layout;
pub mod nonce;
pub mod params;

#[cfg(test)]
mod test_support;

pub use encoder::{OrderCommitment, OrderEncoder};
pub use gasless::GaslessOrderAssembler;
pub use layout::{field_bytes, FieldLayout, OrderField, ORDER_DATA_SIZE, ORDER_LAYOUT};
pub use nonce::{parse_nonce, FixedNonceSource, NonceSource, OsNonceSource};
pub use params::EvmOrderParamsBuilder;

/// Errors that can occur while deriving or encoding a Swift order.
///
/// Every error is terminal for the derivation attempt; no partial order is
/// ever returned.
#[derive(Debug, Error)]
pub enum OrderError {
	/// A native address could not be canonicalized.
	#[error("Address format error: {0}")]
	AddressFormat(#[from] AddressError),
	/// A chain name or id is outside the supported set.
	#[error("Unsupported chain: {0}")]
	UnsupportedChain(#[from] ChainError),
	/// An amount could not be converted to fixed point.
	#[error("Amount error: {0}")]
	Amount(#[from] AmountError),
	/// The signer is connected to a different chain than the quote's source.
	#[error(
		"Signer chain id ({signer_chain_id}) and quote source chain are not the same: {source_chain} != {signer_chain}"
	)]
	ChainMismatch {
		signer_chain_id: u64,
		source_chain: WireChainId,
		signer_chain: WireChainId,
	},
	/// The quote has no settlement contract.
	#[error("Swift contract address is missing")]
	MissingContract,
	/// The destination token does not live on the destination chain.
	#[error("Destination chain id mismatch: {expected} != {actual}")]
	DestinationChainMismatch {
		expected: WireChainId,
		actual: WireChainId,
	},
	/// The quote carries no deadline.
	#[error("Swift order requires a deadline")]
	MissingDeadline,
	/// Only SWIFT quotes can be turned into Swift orders.
	#[error("Quote type is not SWIFT: {0}")]
	WrongQuoteType(QuoteType),
	/// The quote was not issued for gasless submission.
	#[error("Quote does not support gasless")]
	GaslessUnsupported,
	/// The signer chain id is not a valid number.
	#[error("Invalid signer chain id: {0}")]
	InvalidSignerChain(String),
	/// Gasless orders cannot swap on the source chain before depositing.
	#[error(
		"Swift gasless order creation does not support source swap: {from_token} != {swift_input}"
	)]
	SourceSwapUnsupported {
		from_token: String,
		swift_input: String,
	},
	/// A basis-point value does not fit its 8-bit order field.
	#[error("{field} of {value} bps does not fit in the order")]
	FeeRateOutOfRange { field: &'static str, value: u16 },
	/// The relayer submission fee is larger than the order input.
	#[error("Submission fee {fee} exceeds input amount {amount}")]
	SubmissionFeeExceedsInput { fee: u64, amount: u64 },
	/// A caller-supplied field could not be parsed.
	#[error("Invalid {field}: {message}")]
	InvalidField { field: &'static str, message: String },
	/// The order buffer layout was violated. Indicates a defect, not bad input.
	#[error("Invalid order data at {field}: expected {expected}, got {actual}")]
	EncodingInvariant {
		field: &'static str,
		expected: usize,
		actual: usize,
	},
}
