//! Common types for Swift order derivation.
//!
//! This crate defines the quote input record, the derived order records, and
//! the leaf codecs that order encoding is built from: chain id resolution,
//! canonical address encoding and fixed-point amount conversion.

/// Canonical 32-byte address encoding.
pub mod address;
/// Fixed-point amount conversion.
pub mod amount;
/// Chain identifier registry.
pub mod chains;
/// Derived order records.
pub mod order;
/// Quote and permit input types.
pub mod quote;
/// EIP-712 typed data for gasless orders.
pub mod typed_data;
/// Formatting and serde helpers.
pub mod utils;

pub use address::{is_zero_address, AddressCodec, AddressError, EVM_ZERO_ADDRESS};
pub use amount::{AmountCodec, AmountError, MAX_AMOUNT_DECIMALS};
pub use chains::{
	ChainError, ChainFamily, ChainIdRegistry, ChainInfo, WireChainId, DEFAULT_CHAIN_REGISTRY,
};
pub use order::{EvmSwiftParams, GaslessBundle, GaslessOrderParams, OrderHash, SwiftOrder};
pub use quote::{Erc20Permit, Quote, QuoteToken, QuoteType};
pub use typed_data::{TypedData, TypedDataDomain, SWIFT_DOMAIN_NAME};
pub use utils::{truncate_id, without_0x_prefix};
