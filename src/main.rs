//! Contract metadata lookup entry point.
//!
//! This binary resolves a network's Blockscout explorer endpoint, queries
//! it for the verified metadata of a contract address and prints the
//! result as JSON. It exists mainly as a thin demonstration of the
//! library's blocking and non-blocking clients.
//!
//! # Flow
//! 1. Parses CLI arguments and loads environment variables from `.env`
//! 2. Builds a client configuration from defaults plus CLI overrides
//! 3. Performs a single lookup with the async client (or the blocking
//!    client under `--blocking`)
//! 4. Prints the metadata, or logs a notice when no verified contract
//!    exists for the address

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Arg, Command};
use dotenvy::dotenv;
use tracing::info;

use blockscout_client::{
	models::{ClientConfig, EthereumNetwork},
	services::explorer::{AsyncBlockscoutClient, BlockscoutClient, ContractMetadataClient},
	utils::logging::setup_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
	// Initialize command-line interface
	let matches = Command::new("blockscout-client")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Looks up the verified name and ABI of a smart contract on a network's Blockscout \
			 explorer.",
		)
		.arg(
			Arg::new("network")
				.long("network")
				.required(true)
				.help("Network slug to query, e.g. \"gnosis\"")
				.value_name("NETWORK_SLUG"),
		)
		.arg(
			Arg::new("address")
				.long("address")
				.required(true)
				.help("Checksummed contract address to look up")
				.value_name("ADDRESS"),
		)
		.arg(
			Arg::new("timeout")
				.long("timeout")
				.help("Request timeout in seconds (default: 10)")
				.value_name("SECONDS"),
		)
		.arg(
			Arg::new("max-connections")
				.long("max-connections")
				.help("Maximum simultaneous connections to the explorer host (default: 100)")
				.value_name("COUNT"),
		)
		.arg(
			Arg::new("blocking")
				.long("blocking")
				.help("Use the blocking client instead of the async one")
				.action(clap::ArgAction::SetTrue),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	setup_logging().map_err(|e| anyhow!("Failed to setup logging: {}", e))?;

	let network_slug = matches
		.get_one::<String>("network")
		.ok_or_else(|| anyhow!("--network is required"))?;
	let network: EthereumNetwork = network_slug
		.parse()
		.map_err(|e: String| anyhow!("Unrecognized network: {}", e))?;
	let address = matches
		.get_one::<String>("address")
		.ok_or_else(|| anyhow!("--address is required"))?;

	let mut config = ClientConfig::default();
	if let Some(timeout) = matches.get_one::<String>("timeout") {
		let seconds: u64 = timeout.parse().context("Invalid --timeout value")?;
		config = config.with_request_timeout(Duration::from_secs(seconds));
	}
	if let Some(max_connections) = matches.get_one::<String>("max-connections") {
		let count: usize = max_connections
			.parse()
			.context("Invalid --max-connections value")?;
		config = config.with_max_concurrent_requests(count);
	}

	info!(network = %network, address = %address, "Looking up contract metadata");

	let metadata = if matches.get_flag("blocking") {
		// The blocking client must live on a thread where blocking is
		// allowed, construction included
		let config = config.clone();
		let address = address.clone();
		tokio::task::spawn_blocking(move || {
			let client = BlockscoutClient::new(&network, &config)?;
			client.get_contract_metadata(&address)
		})
		.await
		.context("Blocking lookup task failed")??
	} else {
		let client = AsyncBlockscoutClient::new(&network, &config)?;
		client.get_contract_metadata(address).await?
	};

	match metadata {
		Some(metadata) => println!("{}", serde_json::to_string_pretty(&metadata)?),
		None => info!("No verified contract found for {}", address),
	}

	Ok(())
}
