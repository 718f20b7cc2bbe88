//! Canonical 32-byte address encoding.
//!
//! Encoded Swift orders store every address as 32 bytes regardless of the
//! chain it belongs to. Solana public keys are already 32 bytes once decoded
//! from base58; EVM addresses are 20 bytes and are left-padded with zeros.
//! The encoding is chosen from the target chain's family, never guessed from
//! the shape of the input string.

use crate::chains::{ChainFamily, ChainInfo};
use crate::utils::without_0x_prefix;
use alloy_primitives::{Address as AlloyAddress, B256};
use thiserror::Error;

/// The EVM zero address, used by quotes to denote a chain's native token.
pub const EVM_ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

const SOLANA_PUBKEY_LENGTH: usize = 32;
const EVM_ADDRESS_LENGTH: usize = 20;

/// Errors that can occur while canonicalizing a native address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
	#[error("Invalid {family} address '{address}': {reason}")]
	InvalidFormat {
		family: ChainFamily,
		address: String,
		reason: String,
	},
	#[error("Invalid {family} address length: expected {expected} bytes, got {actual}")]
	InvalidLength {
		family: ChainFamily,
		expected: usize,
		actual: usize,
	},
}

/// Converts native addresses to and from their canonical 32-byte form.
pub struct AddressCodec;

impl AddressCodec {
	/// Canonicalizes `address` for the given chain.
	pub fn encode(address: &str, chain: &ChainInfo) -> Result<B256, AddressError> {
		Self::encode_for_family(address, chain.family)
	}

	/// Canonicalizes `address` using the given address family.
	pub fn encode_for_family(address: &str, family: ChainFamily) -> Result<B256, AddressError> {
		let address = address.trim();
		match family {
			ChainFamily::Solana => {
				let bytes = bs58::decode(address).into_vec().map_err(|e| {
					AddressError::InvalidFormat {
						family,
						address: address.to_string(),
						reason: e.to_string(),
					}
				})?;
				if bytes.len() != SOLANA_PUBKEY_LENGTH {
					return Err(AddressError::InvalidLength {
						family,
						expected: SOLANA_PUBKEY_LENGTH,
						actual: bytes.len(),
					});
				}
				Ok(B256::from_slice(&bytes))
			},
			ChainFamily::Evm => {
				let bytes = hex::decode(without_0x_prefix(address)).map_err(|e| {
					AddressError::InvalidFormat {
						family,
						address: address.to_string(),
						reason: e.to_string(),
					}
				})?;
				if bytes.len() != EVM_ADDRESS_LENGTH {
					return Err(AddressError::InvalidLength {
						family,
						expected: EVM_ADDRESS_LENGTH,
						actual: bytes.len(),
					});
				}
				let mut word = [0u8; 32];
				word[12..].copy_from_slice(&bytes);
				Ok(B256::from(word))
			},
		}
	}

	/// Canonical form of the chain's native-asset placeholder.
	///
	/// Both the Solana system program id and the EVM zero address decode to
	/// 32 zero bytes.
	pub fn native_token_sentinel(_chain: &ChainInfo) -> B256 {
		B256::ZERO
	}

	/// Canonicalizes a token contract, substituting the native sentinel when
	/// the quote marks the token as native with the EVM zero address.
	pub fn encode_token(contract: &str, chain: &ChainInfo) -> Result<B256, AddressError> {
		if is_zero_address(contract) {
			Ok(Self::native_token_sentinel(chain))
		} else {
			Self::encode(contract, chain)
		}
	}

	/// Renders a canonical address back in the chain's native text form.
	pub fn decode(canonical: &B256, chain: &ChainInfo) -> String {
		match chain.family {
			ChainFamily::Solana => bs58::encode(canonical.as_slice()).into_string(),
			ChainFamily::Evm => AlloyAddress::from_slice(&canonical[12..]).to_checksum(None),
		}
	}
}

/// Returns true if `contract` is the EVM zero address.
pub fn is_zero_address(contract: &str) -> bool {
	contract.trim().eq_ignore_ascii_case(EVM_ZERO_ADDRESS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::chains::DEFAULT_CHAIN_REGISTRY;

	const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
	const SOLANA_SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";
	const EVM_ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

	#[test]
	fn test_encode_evm_address() {
		let ethereum = DEFAULT_CHAIN_REGISTRY.chain_by_name("ethereum").unwrap();
		let encoded = AddressCodec::encode(EVM_ADDR, ethereum).unwrap();

		assert_eq!(&encoded[..12], &[0u8; 12]);
		assert_eq!(
			hex::encode(&encoded[12..]),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);

		// Prefix is optional
		let unprefixed = AddressCodec::encode(without_0x_prefix(EVM_ADDR), ethereum).unwrap();
		assert_eq!(encoded, unprefixed);
	}

	#[test]
	fn test_encode_solana_address() {
		let solana = DEFAULT_CHAIN_REGISTRY.chain_by_name("solana").unwrap();
		let encoded = AddressCodec::encode(USDC_MINT, solana).unwrap();

		assert_eq!(
			encoded,
			B256::from_slice(&bs58::decode(USDC_MINT).into_vec().unwrap())
		);
		assert_eq!(AddressCodec::decode(&encoded, solana), USDC_MINT);
	}

	#[test]
	fn test_family_selected_by_chain() {
		let solana = DEFAULT_CHAIN_REGISTRY.chain_by_name("solana").unwrap();
		let polygon = DEFAULT_CHAIN_REGISTRY.chain_by_name("polygon").unwrap();

		// Hex addresses are not valid base58 pubkeys on Solana ('0' and 'x' are not in the alphabet)
		assert!(matches!(
			AddressCodec::encode(EVM_ADDR, solana),
			Err(AddressError::InvalidFormat { .. })
		));
		assert!(matches!(
			AddressCodec::encode(USDC_MINT, polygon),
			Err(AddressError::InvalidFormat { .. })
		));
	}

	#[test]
	fn test_wrong_length_rejected() {
		let ethereum = DEFAULT_CHAIN_REGISTRY.chain_by_name("ethereum").unwrap();
		let solana = DEFAULT_CHAIN_REGISTRY.chain_by_name("solana").unwrap();

		assert_eq!(
			AddressCodec::encode("0x1234", ethereum),
			Err(AddressError::InvalidLength {
				family: ChainFamily::Evm,
				expected: 20,
				actual: 2,
			})
		);
		assert!(matches!(
			AddressCodec::encode("1111", solana),
			Err(AddressError::InvalidLength { expected: 32, .. })
		));
	}

	#[test]
	fn test_native_sentinel() {
		let solana = DEFAULT_CHAIN_REGISTRY.chain_by_name("solana").unwrap();
		let base = DEFAULT_CHAIN_REGISTRY.chain_by_name("base").unwrap();

		assert_eq!(
			AddressCodec::native_token_sentinel(solana),
			AddressCodec::encode(SOLANA_SYSTEM_PROGRAM, solana).unwrap()
		);
		assert_eq!(
			AddressCodec::native_token_sentinel(base),
			AddressCodec::encode(EVM_ZERO_ADDRESS, base).unwrap()
		);
		assert_eq!(
			AddressCodec::encode_token(EVM_ZERO_ADDRESS, solana).unwrap(),
			B256::ZERO
		);

		// Sentinels render back as each family's native placeholder
		assert_eq!(
			AddressCodec::decode(&B256::ZERO, solana),
			SOLANA_SYSTEM_PROGRAM
		);
		assert_eq!(AddressCodec::decode(&B256::ZERO, base), EVM_ZERO_ADDRESS);
	}

	#[test]
	fn test_decode_evm_checksum() {
		let ethereum = DEFAULT_CHAIN_REGISTRY.chain_by_name("ethereum").unwrap();
		let encoded = AddressCodec::encode(&EVM_ADDR.to_lowercase(), ethereum).unwrap();

		assert_eq!(AddressCodec::decode(&encoded, ethereum), EVM_ADDR);
	}
}
