//! Serde helpers for integer fields carried as decimal strings.
//!
//! Quotes encode 64-bit fee and deadline fields as decimal strings, and the
//! derived records are consumed by JavaScript callers that cannot hold a full
//! 64-bit integer in a JSON number. Both directions therefore use strings,
//! while deserialization also tolerates plain JSON numbers.

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
	String(String),
	Number(u64),
}

/// Serializes a `u64` as a decimal string and accepts a string or number.
pub mod u64_string {
	use super::StringOrNumber;
	use serde::{de::Error, Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&value.to_string())
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
	where
		D: Deserializer<'de>,
	{
		match StringOrNumber::deserialize(deserializer)? {
			StringOrNumber::String(s) => s
				.trim()
				.parse::<u64>()
				.map_err(|e| D::Error::custom(format!("Invalid u64 '{}': {}", s, e))),
			StringOrNumber::Number(n) => Ok(n),
		}
	}
}

/// Serializes a `U256` as a decimal string.
pub mod u256_string {
	use alloy_primitives::U256;
	use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

	pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		value.to_string().serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		U256::from_str_radix(&s, 10).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::{Deserialize, Serialize};

	#[derive(Debug, Serialize, Deserialize)]
	struct Fees {
		#[serde(with = "u64_string")]
		fee: u64,
	}

	#[test]
	fn test_u64_string_accepts_both_forms() {
		let from_str: Fees = serde_json::from_str(r#"{"fee":"18446744073709551615"}"#).unwrap();
		assert_eq!(from_str.fee, u64::MAX);

		let from_num: Fees = serde_json::from_str(r#"{"fee":42}"#).unwrap();
		assert_eq!(from_num.fee, 42);

		assert!(serde_json::from_str::<Fees>(r#"{"fee":"-1"}"#).is_err());
		assert!(serde_json::from_str::<Fees>(r#"{"fee":"1.5"}"#).is_err());
	}

	#[test]
	fn test_u64_string_serializes_as_string() {
		let json = serde_json::to_string(&Fees { fee: 7 }).unwrap();
		assert_eq!(json, r#"{"fee":"7"}"#);
	}
}
