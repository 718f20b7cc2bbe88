//! Configuration for the Swift order tooling.
//!
//! Configuration is read from TOML. `${VAR}` and `${VAR:-default}` references
//! are substituted from the environment before parsing, and the result is
//! validated before it is handed out.
//!
//! The only section today is `[registry]`, which controls the chain set the
//! order encoder resolves names and ids against:
//!
//! ```toml
//! [registry]
//! use_defaults = true
//!
//! [[registry.chains]]
//! name = "sepolia"
//! wire_id = 10002
//! numeric_id = 11155111
//! family = "evm"
//! gas_decimals = 18
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use swift_types::{ChainFamily, ChainIdRegistry, ChainInfo, WireChainId};
use thiserror::Error;

/// Largest gas token precision accepted for a configured chain.
const MAX_GAS_DECIMALS: u8 = 36;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Keep the message, not the echoed input
		ConfigError::Parse(err.message().to_string())
	}
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Chain registry settings.
	#[serde(default)]
	pub registry: RegistryConfig,
}

/// Chain registry settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
	/// Start from the built-in chain table. Defaults to true.
	#[serde(default = "default_use_defaults")]
	pub use_defaults: bool,
	/// Additional chains. An entry whose name matches a built-in chain
	/// replaces it.
	#[serde(default)]
	pub chains: Vec<ChainConfig>,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			use_defaults: default_use_defaults(),
			chains: Vec::new(),
		}
	}
}

fn default_use_defaults() -> bool {
	true
}

/// A configured chain entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
	pub name: String,
	pub wire_id: WireChainId,
	pub numeric_id: u64,
	pub family: ChainFamily,
	pub gas_decimals: u8,
}

impl From<&ChainConfig> for ChainInfo {
	fn from(chain: &ChainConfig) -> Self {
		ChainInfo::new(
			chain.name.clone(),
			chain.wire_id,
			chain.numeric_id,
			chain.family,
			chain.gas_decimals,
		)
	}
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	// Bound the input handed to the regex engine
	const MAX_INPUT_SIZE: usize = 1024 * 1024;
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = String::with_capacity(input.len());
	let mut last_end = 0;
	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match cap.get(2) {
				Some(default) => default.as_str().to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)))
				},
			},
		};

		result.push_str(&input[last_end..full_match.start()]);
		result.push_str(&value);
		last_end = full_match.end();
	}
	result.push_str(&input[last_end..]);

	Ok(result)
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = tokio::fs::read_to_string(path).await?;
		tracing::debug!(path = %path.display(), "Loaded configuration file");
		contents.parse()
	}

	/// Builds the chain registry described by this configuration.
	pub fn chain_registry(&self) -> Result<ChainIdRegistry, ConfigError> {
		let registry = &self.registry;
		let mut chains: Vec<ChainInfo> = if registry.use_defaults {
			ChainIdRegistry::default_chains()
				.into_iter()
				.filter(|builtin| {
					!registry
						.chains
						.iter()
						.any(|c| c.name.eq_ignore_ascii_case(&builtin.name))
				})
				.collect()
		} else {
			Vec::new()
		};
		chains.extend(registry.chains.iter().map(ChainInfo::from));

		let chain_registry = ChainIdRegistry::from_chains(chains)
			.map_err(|e| ConfigError::Validation(format!("Invalid chain registry: {}", e)))?;
		if chain_registry.is_empty() {
			return Err(ConfigError::Validation(
				"Chain registry cannot be empty".into(),
			));
		}
		Ok(chain_registry)
	}

	/// Validates the configuration.
	///
	/// - Chain names must be non-empty and lowercase
	/// - Gas decimals must not exceed 36
	/// - Names, wire ids and numeric ids must be unique across the registry
	/// - The resulting registry must not be empty
	fn validate(&self) -> Result<(), ConfigError> {
		for chain in &self.registry.chains {
			if chain.name.trim().is_empty() {
				return Err(ConfigError::Validation(
					"Chain name cannot be empty".into(),
				));
			}
			if chain.name != chain.name.to_lowercase() {
				return Err(ConfigError::Validation(format!(
					"Chain name '{}' must be lowercase",
					chain.name
				)));
			}
			if chain.gas_decimals > MAX_GAS_DECIMALS {
				return Err(ConfigError::Validation(format!(
					"Chain '{}' has {} gas decimals (max: {})",
					chain.name, chain.gas_decimals, MAX_GAS_DECIMALS
				)));
			}
		}

		self.chain_registry().map(|_| ())
	}
}

/// Parses configuration from TOML, resolving environment variables and
/// validating the result.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	const SEPOLIA: &str = r#"
[registry]
use_defaults = true

[[registry.chains]]
name = "sepolia"
wire_id = 10002
numeric_id = 11155111
family = "evm"
gas_decimals = 18
"#;

	#[test]
	fn test_env_var_resolution() {
		std::env::set_var("SWIFT_TEST_HOST", "localhost");
		std::env::set_var("SWIFT_TEST_PORT", "5432");

		let input = "host = \"${SWIFT_TEST_HOST}:${SWIFT_TEST_PORT}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "host = \"localhost:5432\"");

		std::env::remove_var("SWIFT_TEST_HOST");
		std::env::remove_var("SWIFT_TEST_PORT");
	}

	#[test]
	fn test_env_var_with_default() {
		let input = "value = \"${SWIFT_MISSING_VAR:-default_value}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "value = \"default_value\"");
	}

	#[test]
	fn test_missing_env_var_error() {
		let result = resolve_env_vars("value = \"${SWIFT_MISSING_VAR}\"");
		assert!(result
			.unwrap_err()
			.to_string()
			.contains("SWIFT_MISSING_VAR"));
	}

	#[test]
	fn test_empty_config_uses_defaults() {
		let config: Config = "".parse().unwrap();
		let registry = config.chain_registry().unwrap();

		assert_eq!(registry.len(), ChainIdRegistry::default_chains().len());
		assert_eq!(registry.id_by_name("polygon").unwrap(), 5);
	}

	#[test]
	fn test_additional_chain() {
		let config: Config = SEPOLIA.parse().unwrap();
		let registry = config.chain_registry().unwrap();

		assert_eq!(registry.id_by_numeric_id(11_155_111).unwrap(), 10002);
		assert_eq!(registry.id_by_name("solana").unwrap(), 1);
	}

	#[test]
	fn test_override_replaces_builtin() {
		let config: Config = r#"
[[registry.chains]]
name = "base"
wire_id = 30
numeric_id = 84532
family = "evm"
gas_decimals = 18
"#
		.parse()
		.unwrap();
		let registry = config.chain_registry().unwrap();

		assert_eq!(registry.id_by_numeric_id(84_532).unwrap(), 30);
		assert!(registry.id_by_numeric_id(8453).is_err());
	}

	#[test]
	fn test_without_defaults() {
		let config: Config = SEPOLIA
			.replace("use_defaults = true", "use_defaults = false")
			.parse()
			.unwrap();
		let registry = config.chain_registry().unwrap();

		assert_eq!(registry.len(), 1);
		assert!(registry.id_by_name("ethereum").is_err());
	}

	#[test]
	fn test_empty_registry_rejected() {
		let result = "[registry]\nuse_defaults = false\n".parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_duplicate_wire_id_rejected() {
		// Collides with ethereum's wire id
		let result = SEPOLIA.replace("10002", "2").parse::<Config>();
		let err = result.unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
		assert!(err.to_string().contains("wire_id"));
	}

	#[test]
	fn test_invalid_chain_entries_rejected() {
		let uppercase = SEPOLIA.replace("\"sepolia\"", "\"Sepolia\"");
		assert!(matches!(
			uppercase.parse::<Config>(),
			Err(ConfigError::Validation(_))
		));

		let empty = SEPOLIA.replace("\"sepolia\"", "\"\"");
		assert!(matches!(
			empty.parse::<Config>(),
			Err(ConfigError::Validation(_))
		));

		let decimals = SEPOLIA.replace("gas_decimals = 18", "gas_decimals = 40");
		assert!(matches!(
			decimals.parse::<Config>(),
			Err(ConfigError::Validation(_))
		));
	}

	#[test]
	fn test_unknown_family_is_parse_error() {
		let result = SEPOLIA.replace("\"evm\"", "\"cosmos\"").parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[test]
	fn test_config_with_env_vars() {
		std::env::set_var("SWIFT_TEST_WIRE_ID", "10003");

		let config: Config = SEPOLIA
			.replace("10002", "${SWIFT_TEST_WIRE_ID}")
			.replace("11155111", "${SWIFT_TEST_NUMERIC_ID:-421614}")
			.parse()
			.unwrap();
		let registry = config.chain_registry().unwrap();
		assert_eq!(registry.id_by_numeric_id(421_614).unwrap(), 10003);

		std::env::remove_var("SWIFT_TEST_WIRE_ID");
	}

	#[tokio::test]
	async fn test_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(SEPOLIA.as_bytes()).unwrap();

		let config = Config::from_file(file.path()).await.unwrap();
		assert_eq!(config.registry.chains.len(), 1);
		assert_eq!(config.registry.chains[0].family, ChainFamily::Evm);
	}

	#[tokio::test]
	async fn test_from_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let result = Config::from_file(dir.path().join("missing.toml")).await;
		assert!(matches!(result, Err(ConfigError::Io(_))));
	}
}
