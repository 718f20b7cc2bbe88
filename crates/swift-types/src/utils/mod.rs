//! Utility functions for string formatting and serde conversions.

pub mod formatting;
pub mod serde_helpers;

pub use formatting::{truncate_id, without_0x_prefix};
