//! Wire layout of an encoded Swift order.
//!
//! The settlement contract hashes a fixed 239-byte buffer. Scalars are
//! big-endian and every field occupies a fixed, non-overlapping range:
//!
//! ```text
//! offset  width  field
//!      0     32  trader
//!     32      2  source chain id
//!     34     32  token in
//!     66     32  destination address
//!     98      2  destination chain id
//!    100     32  token out
//!    132      8  min amount out
//!    140      8  gas drop
//!    148      8  cancel fee
//!    156      8  refund fee
//!    164      8  deadline
//!    172     32  referrer address
//!    204      1  referrer bps
//!    205      1  protocol bps
//!    206      1  auction mode
//!    207     32  random
//! ```

use crate::OrderError;
use alloy_primitives::B256;

/// Total size of an encoded order.
pub const ORDER_DATA_SIZE: usize = 239;

/// Fields of an encoded order, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
	Trader,
	SourceChainId,
	TokenIn,
	DestAddr,
	DestChainId,
	TokenOut,
	MinAmountOut,
	GasDrop,
	CancelFee,
	RefundFee,
	Deadline,
	ReferrerAddr,
	ReferrerBps,
	ProtocolBps,
	AuctionMode,
	Random,
}

impl OrderField {
	pub fn name(self) -> &'static str {
		match self {
			OrderField::Trader => "trader",
			OrderField::SourceChainId => "sourceChainId",
			OrderField::TokenIn => "tokenIn",
			OrderField::DestAddr => "destAddr",
			OrderField::DestChainId => "destChainId",
			OrderField::TokenOut => "tokenOut",
			OrderField::MinAmountOut => "minAmountOut",
			OrderField::GasDrop => "gasDrop",
			OrderField::CancelFee => "cancelFee",
			OrderField::RefundFee => "refundFee",
			OrderField::Deadline => "deadline",
			OrderField::ReferrerAddr => "referrerAddr",
			OrderField::ReferrerBps => "referrerBps",
			OrderField::ProtocolBps => "protocolBps",
			OrderField::AuctionMode => "auctionMode",
			OrderField::Random => "random",
		}
	}

	/// Position of this field in the wire layout.
	pub fn layout(self) -> &'static FieldLayout {
		&ORDER_LAYOUT[self as usize]
	}
}

/// Byte range occupied by one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
	pub field: OrderField,
	pub offset: usize,
	pub width: usize,
}

impl FieldLayout {
	const fn new(field: OrderField, offset: usize, width: usize) -> Self {
		Self {
			field,
			offset,
			width,
		}
	}

	pub fn end(&self) -> usize {
		self.offset + self.width
	}
}

/// The order wire layout, indexed by `OrderField as usize`.
pub const ORDER_LAYOUT: [FieldLayout; 16] = [
	FieldLayout::new(OrderField::Trader, 0, 32),
	FieldLayout::new(OrderField::SourceChainId, 32, 2),
	FieldLayout::new(OrderField::TokenIn, 34, 32),
	FieldLayout::new(OrderField::DestAddr, 66, 32),
	FieldLayout::new(OrderField::DestChainId, 98, 2),
	FieldLayout::new(OrderField::TokenOut, 100, 32),
	FieldLayout::new(OrderField::MinAmountOut, 132, 8),
	FieldLayout::new(OrderField::GasDrop, 140, 8),
	FieldLayout::new(OrderField::CancelFee, 148, 8),
	FieldLayout::new(OrderField::RefundFee, 156, 8),
	FieldLayout::new(OrderField::Deadline, 164, 8),
	FieldLayout::new(OrderField::ReferrerAddr, 172, 32),
	FieldLayout::new(OrderField::ReferrerBps, 204, 1),
	FieldLayout::new(OrderField::ProtocolBps, 205, 1),
	FieldLayout::new(OrderField::AuctionMode, 206, 1),
	FieldLayout::new(OrderField::Random, 207, 32),
];

/// Returns the bytes of `field` within an encoded order.
pub fn field_bytes(data: &[u8; ORDER_DATA_SIZE], field: OrderField) -> &[u8] {
	let layout = field.layout();
	&data[layout.offset..layout.end()]
}

/// Sequential writer that enforces the wire layout.
///
/// Each write must be the next field of [`ORDER_LAYOUT`], start at the current
/// offset and have the field's exact width.
pub(crate) struct OrderWriter {
	data: [u8; ORDER_DATA_SIZE],
	offset: usize,
	next: usize,
}

impl OrderWriter {
	pub(crate) fn new() -> Self {
		Self {
			data: [0u8; ORDER_DATA_SIZE],
			offset: 0,
			next: 0,
		}
	}

	fn put(&mut self, field: OrderField, bytes: &[u8]) -> Result<(), OrderError> {
		let layout = ORDER_LAYOUT
			.get(self.next)
			.ok_or_else(|| OrderError::EncodingInvariant {
				field: field.name(),
				expected: ORDER_LAYOUT.len(),
				actual: self.next + 1,
			})?;
		if layout.field != field {
			return Err(OrderError::EncodingInvariant {
				field: field.name(),
				expected: layout.field as usize,
				actual: field as usize,
			});
		}
		if layout.offset != self.offset {
			return Err(OrderError::EncodingInvariant {
				field: field.name(),
				expected: layout.offset,
				actual: self.offset,
			});
		}
		if layout.width != bytes.len() || layout.end() > ORDER_DATA_SIZE {
			return Err(OrderError::EncodingInvariant {
				field: field.name(),
				expected: layout.width,
				actual: bytes.len(),
			});
		}

		self.data[self.offset..layout.end()].copy_from_slice(bytes);
		self.offset = layout.end();
		self.next += 1;
		Ok(())
	}

	pub(crate) fn put_b256(&mut self, field: OrderField, value: &B256) -> Result<(), OrderError> {
		self.put(field, value.as_slice())
	}

	pub(crate) fn put_u64(&mut self, field: OrderField, value: u64) -> Result<(), OrderError> {
		self.put(field, &value.to_be_bytes())
	}

	pub(crate) fn put_u16(&mut self, field: OrderField, value: u16) -> Result<(), OrderError> {
		self.put(field, &value.to_be_bytes())
	}

	pub(crate) fn put_u8(&mut self, field: OrderField, value: u8) -> Result<(), OrderError> {
		self.put(field, &[value])
	}

	/// Returns the buffer once every field has been written.
	pub(crate) fn finish(self) -> Result<[u8; ORDER_DATA_SIZE], OrderError> {
		if self.offset != ORDER_DATA_SIZE || self.next != ORDER_LAYOUT.len() {
			return Err(OrderError::EncodingInvariant {
				field: "orderData",
				expected: ORDER_DATA_SIZE,
				actual: self.offset,
			});
		}
		Ok(self.data)
	}
}
