//! EIP-712 typed data for gasless Swift orders.
//!
//! A gasless order is authorized by the swapper signing a `CreateOrder`
//! message bound to the Swift settlement contract. This module builds the
//! JSON payload handed to external signers and can recompute the signing
//! digest for the same payload:
//! - Domain hash computation
//! - Final digest computation (0x1901 || domainHash || structHash)
//! - A minimal ABI encoder for the static field types involved

use crate::utils::serde_helpers::u256_string;
use alloy_primitives::{keccak256, Address as AlloyAddress, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DOMAIN_TYPE: &str = "EIP712Domain(string name,uint256 chainId,address verifyingContract)";
pub const SWIFT_DOMAIN_NAME: &str = "Mayan Swift";
pub const CREATE_ORDER_PRIMARY_TYPE: &str = "CreateOrder";
pub const CREATE_ORDER_TYPE: &str =
	"CreateOrder(bytes32 OrderId,uint256 InputAmount,uint256 SubmissionFee)";

/// Compute EIP-712 domain hash (keccak256(abi.encode(typeHash, nameHash, chainId, verifyingContract))).
pub fn compute_domain_hash(name: &str, chain_id: u64, verifying_contract: &AlloyAddress) -> B256 {
	let domain_type_hash = keccak256(DOMAIN_TYPE.as_bytes());
	let name_hash = keccak256(name.as_bytes());
	let mut enc = Eip712AbiEncoder::new();
	enc.push_b256(&domain_type_hash);
	enc.push_b256(&name_hash);
	enc.push_u256(U256::from(chain_id));
	enc.push_address(verifying_contract);
	keccak256(enc.finish())
}

/// Compute the final EIP-712 digest: keccak256(0x1901 || domainHash || structHash).
pub fn compute_final_digest(domain_hash: &B256, struct_hash: &B256) -> B256 {
	let mut out = Vec::with_capacity(2 + 32 + 32);
	out.push(0x19);
	out.push(0x01);
	out.extend_from_slice(domain_hash.as_slice());
	out.extend_from_slice(struct_hash.as_slice());
	keccak256(out)
}

/// Minimal ABI encoder for static types used in EIP-712 struct hashing.
#[derive(Default)]
pub struct Eip712AbiEncoder {
	buf: Vec<u8>,
}

impl Eip712AbiEncoder {
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	pub fn push_b256(&mut self, v: &B256) {
		self.buf.extend_from_slice(v.as_slice());
	}

	pub fn push_address(&mut self, addr: &AlloyAddress) {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(addr.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u256(&mut self, v: U256) {
		let word: [u8; 32] = v.to_be_bytes::<32>();
		self.buf.extend_from_slice(&word);
	}

	pub fn finish(self) -> Vec<u8> {
		self.buf
	}
}

/// Signing domain of the Swift contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
	pub name: String,
	pub chain_id: u64,
	pub verifying_contract: AlloyAddress,
}

/// A single `{ name, type }` entry of an EIP-712 type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
	pub name: String,
	#[serde(rename = "type")]
	pub field_type: String,
}

impl TypedDataField {
	fn new(name: &str, field_type: &str) -> Self {
		Self {
			name: name.to_string(),
			field_type: field_type.to_string(),
		}
	}
}

/// Message value of a `CreateOrder` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderValue {
	#[serde(rename = "OrderId")]
	pub order_id: B256,
	#[serde(rename = "InputAmount", with = "u256_string")]
	pub input_amount: U256,
	#[serde(rename = "SubmissionFee", with = "u256_string")]
	pub submission_fee: U256,
}

/// Typed-data payload for signing a gasless Swift order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedData {
	pub domain: TypedDataDomain,
	pub types: BTreeMap<String, Vec<TypedDataField>>,
	pub value: CreateOrderValue,
}

impl TypedData {
	/// Builds the `CreateOrder` payload for the Swift contract on `chain_id`.
	pub fn create_order(
		chain_id: u64,
		verifying_contract: AlloyAddress,
		order_id: B256,
		input_amount: U256,
		submission_fee: U256,
	) -> Self {
		let mut types = BTreeMap::new();
		types.insert(
			CREATE_ORDER_PRIMARY_TYPE.to_string(),
			vec![
				TypedDataField::new("OrderId", "bytes32"),
				TypedDataField::new("InputAmount", "uint256"),
				TypedDataField::new("SubmissionFee", "uint256"),
			],
		);

		Self {
			domain: TypedDataDomain {
				name: SWIFT_DOMAIN_NAME.to_string(),
				chain_id,
				verifying_contract,
			},
			types,
			value: CreateOrderValue {
				order_id,
				input_amount,
				submission_fee,
			},
		}
	}

	pub fn domain_separator(&self) -> B256 {
		compute_domain_hash(
			&self.domain.name,
			self.domain.chain_id,
			&self.domain.verifying_contract,
		)
	}

	pub fn struct_hash(&self) -> B256 {
		let mut enc = Eip712AbiEncoder::new();
		enc.push_b256(&keccak256(CREATE_ORDER_TYPE.as_bytes()));
		enc.push_b256(&self.value.order_id);
		enc.push_u256(self.value.input_amount);
		enc.push_u256(self.value.submission_fee);
		keccak256(enc.finish())
	}

	/// Digest the swapper signs for this payload.
	pub fn signing_hash(&self) -> B256 {
		compute_final_digest(&self.domain_separator(), &self.struct_hash())
	}
}
