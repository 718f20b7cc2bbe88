//! Fixed-point conversion of decimal token amounts.
//!
//! Order amounts travel as 64-bit integers with at most 8 fractional digits,
//! and never more fractional digits than the token itself supports. Amounts
//! pulled from the swapper are kept in the token's own base units instead.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Upper bound on fractional digits carried by any order amount.
pub const MAX_AMOUNT_DECIMALS: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
	#[error("Invalid amount {0}: amounts must not be negative")]
	Negative(Decimal),
	#[error("Amount {amount} with {decimals} decimals does not fit in 64 bits")]
	Overflow { amount: Decimal, decimals: u8 },
}

/// Converts a decimal amount into a truncated 64-bit fixed-point integer.
pub struct AmountCodec;

impl AmountCodec {
	/// Scales `amount` by `10^min(token_decimals, 8)` and truncates toward
	/// zero.
	///
	/// ```
	/// use rust_decimal::Decimal;
	/// use swift_types::AmountCodec;
	///
	/// let amount: Decimal = "1.123456789".parse().unwrap();
	/// assert_eq!(AmountCodec::to_fixed_point(amount, 9).unwrap(), 112_345_678);
	/// ```
	pub fn to_fixed_point(amount: Decimal, token_decimals: u8) -> Result<u64, AmountError> {
		if amount.is_sign_negative() && !amount.is_zero() {
			return Err(AmountError::Negative(amount));
		}

		let decimals = Self::precision(token_decimals);
		let overflow = || AmountError::Overflow { amount, decimals };

		let scale = Decimal::from(10u64.pow(decimals as u32));
		amount
			.checked_mul(scale)
			.ok_or_else(overflow)?
			.trunc()
			.to_u64()
			.ok_or_else(overflow)
	}

	/// Truncates `amount` to at most 8 fractional digits and scales it to the
	/// token's base units, `10^token_decimals`.
	///
	/// ```
	/// use rust_decimal::Decimal;
	/// use swift_types::AmountCodec;
	///
	/// let amount: Decimal = "1.123456789".parse().unwrap();
	/// assert_eq!(
	/// 	AmountCodec::to_native_units(amount, 18).unwrap(),
	/// 	1_123_456_780_000_000_000
	/// );
	/// ```
	pub fn to_native_units(amount: Decimal, token_decimals: u8) -> Result<u64, AmountError> {
		let kept = Self::to_fixed_point(amount, token_decimals)?;
		let padding = token_decimals - Self::precision(token_decimals);

		10u64
			.checked_pow(padding as u32)
			.and_then(|scale| kept.checked_mul(scale))
			.ok_or(AmountError::Overflow {
				amount,
				decimals: token_decimals,
			})
	}

	/// Number of fractional digits kept for a token with `token_decimals`.
	pub fn precision(token_decimals: u8) -> u8 {
		token_decimals.min(MAX_AMOUNT_DECIMALS)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	fn dec(s: &str) -> Decimal {
		Decimal::from_str(s).unwrap()
	}

	#[test]
	fn test_truncates_to_eight_digits() {
		assert_eq!(
			AmountCodec::to_fixed_point(dec("1.123456789"), 9).unwrap(),
			112_345_678
		);
		// Never rounds up
		assert_eq!(
			AmountCodec::to_fixed_point(dec("0.999999999"), 18).unwrap(),
			99_999_999
		);
	}

	#[test]
	fn test_respects_token_decimals() {
		assert_eq!(
			AmountCodec::to_fixed_point(dec("12.3456789"), 6).unwrap(),
			12_345_678
		);
		assert_eq!(AmountCodec::to_fixed_point(dec("5.99"), 0).unwrap(), 5);
		assert_eq!(AmountCodec::to_fixed_point(dec("0"), 6).unwrap(), 0);
		assert_eq!(AmountCodec::precision(18), 8);
		assert_eq!(AmountCodec::precision(6), 6);
	}

	#[test]
	fn test_overflow() {
		// u64::MAX / 1e8 is roughly 1.8e11
		let err = AmountCodec::to_fixed_point(dec("200000000000"), 8).unwrap_err();
		assert!(matches!(err, AmountError::Overflow { decimals: 8, .. }));

		assert!(AmountCodec::to_fixed_point(dec("200000000000"), 6).is_ok());
	}

	#[test]
	fn test_native_units() {
		assert_eq!(
			AmountCodec::to_native_units(dec("1.5"), 18).unwrap(),
			1_500_000_000_000_000_000
		);
		// Digits past the eighth are dropped before scaling
		assert_eq!(
			AmountCodec::to_native_units(dec("1.123456789"), 18).unwrap(),
			1_123_456_780_000_000_000
		);
		assert_eq!(
			AmountCodec::to_native_units(dec("100.5"), 6).unwrap(),
			100_500_000
		);
		assert_eq!(AmountCodec::to_native_units(dec("0"), 18).unwrap(), 0);
	}

	#[test]
	fn test_native_units_overflow() {
		// 20 * 10^18 exceeds u64::MAX
		let err = AmountCodec::to_native_units(dec("20"), 18).unwrap_err();
		assert!(matches!(err, AmountError::Overflow { decimals: 18, .. }));

		assert!(AmountCodec::to_native_units(dec("18"), 18).is_ok());
	}

	#[test]
	fn test_negative_rejected() {
		assert!(matches!(
			AmountCodec::to_fixed_point(dec("-1"), 6),
			Err(AmountError::Negative(_))
		));
		assert!(matches!(
			AmountCodec::to_native_units(dec("-1"), 18),
			Err(AmountError::Negative(_))
		));
	}
}
