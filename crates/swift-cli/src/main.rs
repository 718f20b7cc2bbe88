//! Command-line driver for Swift order derivation.
//!
//! Reads a quote (and optionally a permit) from JSON files, derives the
//! requested artifact and prints it as JSON on stdout. Logs go to stderr.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use swift_config::Config;

mod commands;

use commands::Command;

/// Command-line arguments for the Swift order tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Path to configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, global = true, default_value = "warn")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	use tracing_subscriber::{fmt, EnvFilter};

	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
	fmt()
		.with_env_filter(env_filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.init();

	let config = match &cli.config {
		Some(path) => {
			let config = Config::from_file(path).await?;
			tracing::info!(path = %path.display(), "Loaded configuration");
			config
		},
		None => Config::default(),
	};
	let chains = Arc::new(config.chain_registry()?);

	let output = commands::execute(cli.command, chains).await?;
	println!("{}", serde_json::to_string_pretty(&output)?);
	Ok(())
}
