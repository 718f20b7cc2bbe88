//! Order nonce sources.
//!
//! Every submitted order carries a 32-byte random nonce so that its hash is
//! unique per submission attempt. Production code draws the nonce from the
//! operating system's CSPRNG; tests inject a fixed value.

use crate::OrderError;
use alloy_primitives::B256;
use rand::rngs::OsRng;
use rand::RngCore;
use std::str::FromStr;

/// Source of per-order random nonces.
pub trait NonceSource: Send + Sync {
	/// Returns a fresh 32-byte nonce.
	fn next_nonce(&self) -> B256;
}

/// Nonce source backed by the operating system's secure random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
	fn next_nonce(&self) -> B256 {
		let mut bytes = [0u8; 32];
		OsRng.fill_bytes(&mut bytes);
		B256::from(bytes)
	}
}

/// Nonce source that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedNonceSource(pub B256);

impl NonceSource for FixedNonceSource {
	fn next_nonce(&self) -> B256 {
		self.0
	}
}

/// Parses a 32-byte nonce from hex, with or without a `0x` prefix.
pub fn parse_nonce(hex: &str) -> Result<B256, OrderError> {
	B256::from_str(hex.trim()).map_err(|e| OrderError::InvalidField {
		field: "random",
		message: e.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_os_nonces_differ() {
		let source = OsNonceSource;
		assert_ne!(source.next_nonce(), source.next_nonce());
	}

	#[test]
	fn test_parse_nonce() {
		let hex = "0x0101010101010101010101010101010101010101010101010101010101010101";
		assert_eq!(parse_nonce(hex).unwrap(), B256::repeat_byte(1));
		assert_eq!(parse_nonce(&hex[2..]).unwrap(), B256::repeat_byte(1));
		assert!(matches!(
			parse_nonce("0x1234"),
			Err(OrderError::InvalidField { field: "random", .. })
		));
	}
}
