//! Shared quote fixtures for unit tests.

use rust_decimal::Decimal;
use std::str::FromStr;
use swift_types::{Quote, QuoteToken, QuoteType, EVM_ZERO_ADDRESS};

pub const POLYGON_USDC: &str = "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359";
pub const SWIFT_CONTRACT: &str = "0xC38e4e6A15593f908255214653d3D947CA1c2338";
pub const SWAPPER: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const SOLANA_DESTINATION: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const SOLANA_REFERRER: &str = "So11111111111111111111111111111111111111112";

pub const POLYGON_NUMERIC_ID: u64 = 137;
pub const ETHEREUM_NUMERIC_ID: u64 = 1;

pub fn dec(value: &str) -> Decimal {
	Decimal::from_str(value).unwrap()
}

/// USDC on Polygon to native SOL, eligible for gasless submission.
pub fn polygon_to_solana_quote() -> Quote {
	Quote {
		quote_type: QuoteType::Swift,
		from_chain: "polygon".to_string(),
		to_chain: "solana".to_string(),
		from_token: QuoteToken {
			contract: POLYGON_USDC.to_string(),
			decimals: 6,
			w_chain_id: 5,
			symbol: Some("USDC".to_string()),
		},
		to_token: QuoteToken {
			contract: EVM_ZERO_ADDRESS.to_string(),
			decimals: 9,
			w_chain_id: 1,
			symbol: Some("SOL".to_string()),
		},
		effective_amount_in: dec("100.5"),
		min_amount_out: dec("0.6123456789"),
		gas_drop: dec("0.05"),
		cancel_relayer_fee64: 1_500,
		refund_relayer_fee64: 2_500,
		submit_relayer_fee64: 30_000,
		deadline64: 1_735_689_600,
		referrer_bps: None,
		protocol_bps: 3,
		swift_auction_mode: 2,
		swift_input_contract: POLYGON_USDC.to_string(),
		swift_input_decimals: 6,
		swift_mayan_contract: Some(SWIFT_CONTRACT.to_string()),
		gasless: true,
	}
}
