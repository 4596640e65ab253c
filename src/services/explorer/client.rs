//! Blockscout client implementations.
//!
//! Provides a blocking and a non-blocking client for looking up verified
//! contract metadata. Both resolve their endpoint from the static table at
//! construction and share the request construction and response parsing in
//! [`super::query`]; they differ only in how the network call is performed.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Semaphore;
use url::Url;

use super::{endpoints, error::ExplorerError, query};
use crate::models::{ClientConfig, ContractMetadata, EthereumNetwork};

/// Defines the core interface for contract metadata clients
///
/// Implemented by the non-blocking client; test doubles implement it to
/// simulate explorer responses without network access.
#[async_trait]
pub trait ContractMetadataClient: Send + Sync + Clone {
	/// Retrieves the verified name and ABI for a contract address
	///
	/// # Arguments
	/// * `address` - Checksummed contract address, passed through verbatim
	///
	/// # Returns
	/// * `Ok(Some(metadata))` - The explorer knows a verified contract
	/// * `Ok(None)` - No verified contract, a server-reported query error,
	///   or a non-success HTTP status
	async fn get_contract_metadata(
		&self,
		address: &str,
	) -> Result<Option<ContractMetadata>, ExplorerError>;
}

fn resolve_endpoint(network: &EthereumNetwork) -> Result<&'static str, ExplorerError> {
	endpoints::graphql_url(network).ok_or_else(|| {
		ExplorerError::configuration_error(format!(
			"Network {} is not supported: no Blockscout endpoint registered",
			network
		))
	})
}

fn parse_endpoint(url: &str) -> Result<Url, ExplorerError> {
	if url.is_empty() {
		return Err(ExplorerError::configuration_error(
			"Endpoint URL must not be empty",
		));
	}
	Url::parse(url).map_err(|e| {
		ExplorerError::configuration_error(format!("Invalid endpoint URL {}: {}", url, e))
	})
}

/// Blocking Blockscout client.
///
/// Executes entirely on the calling thread with no internal concurrency.
/// The HTTP session is created once at construction and reused across
/// lookups.
#[derive(Clone, Debug)]
pub struct BlockscoutClient {
	graphql_url: Url,
	client: reqwest::blocking::Client,
}

impl BlockscoutClient {
	/// Creates a client for a network, resolving its endpoint from the
	/// static table.
	///
	/// # Errors
	/// Returns `ExplorerError::ConfigurationError` when the network has no
	/// registered Blockscout endpoint. This is the only validation
	/// performed at construction.
	pub fn new(network: &EthereumNetwork, config: &ClientConfig) -> Result<Self, ExplorerError> {
		Self::new_with_url(resolve_endpoint(network)?, config)
	}

	/// Creates a client against an explicit endpoint URL.
	pub fn new_with_url(url: &str, config: &ClientConfig) -> Result<Self, ExplorerError> {
		let graphql_url = parse_endpoint(url)?;
		let client = reqwest::blocking::Client::builder()
			.timeout(config.request_timeout)
			.build()
			.map_err(|e| {
				ExplorerError::configuration_error(format!("Failed to create HTTP client: {}", e))
			})?;
		Ok(Self {
			graphql_url,
			client,
		})
	}

	/// The endpoint this client was constructed against.
	pub fn graphql_url(&self) -> &Url {
		&self.graphql_url
	}

	/// Looks up verified contract metadata for a checksummed address,
	/// blocking the calling thread for up to the configured timeout.
	///
	/// # Returns
	/// * `Ok(Some(metadata))` - The explorer knows a verified contract
	/// * `Ok(None)` - No verified contract or non-success HTTP status
	///
	/// # Errors
	/// * `ExplorerError::TransportError` - Connection, DNS or timeout
	///   failure; never retried
	/// * `ExplorerError::ParseError` - Undecodable response body or ABI
	pub fn get_contract_metadata(
		&self,
		address: &str,
	) -> Result<Option<ContractMetadata>, ExplorerError> {
		let query = query::build_query(address);
		let response = self
			.client
			.post(self.graphql_url.clone())
			.json(&json!({ "query": query }))
			.send()?;

		if !response.status().is_success() {
			return Ok(None);
		}

		let body: Value = response.json()?;
		query::parse_metadata(&body)
	}
}

/// Non-blocking Blockscout client.
///
/// Owns a long-lived connection pool scoped to the client's lifetime.
/// Concurrent lookups on one instance (or its clones) share a permit pool
/// capping simultaneous connections to the explorer host; lookups beyond
/// the cap queue until a permit frees up.
#[derive(Clone, Debug)]
pub struct AsyncBlockscoutClient {
	graphql_url: Url,
	client: reqwest::Client,
	request_permits: Arc<Semaphore>,
}

impl AsyncBlockscoutClient {
	/// Creates a client for a network, resolving its endpoint from the
	/// static table.
	///
	/// # Errors
	/// Returns `ExplorerError::ConfigurationError` when the network has no
	/// registered Blockscout endpoint or the connection cap is zero.
	pub fn new(network: &EthereumNetwork, config: &ClientConfig) -> Result<Self, ExplorerError> {
		Self::new_with_url(resolve_endpoint(network)?, config)
	}

	/// Creates a client against an explicit endpoint URL.
	pub fn new_with_url(url: &str, config: &ClientConfig) -> Result<Self, ExplorerError> {
		if config.max_concurrent_requests == 0 {
			return Err(ExplorerError::configuration_error(
				"Maximum concurrent requests must be greater than zero",
			));
		}
		let graphql_url = parse_endpoint(url)?;
		let client = reqwest::Client::builder()
			.timeout(config.request_timeout)
			.build()
			.map_err(|e| {
				ExplorerError::configuration_error(format!("Failed to create HTTP client: {}", e))
			})?;
		Ok(Self {
			graphql_url,
			client,
			request_permits: Arc::new(Semaphore::new(config.max_concurrent_requests)),
		})
	}

	/// The endpoint this client was constructed against.
	pub fn graphql_url(&self) -> &Url {
		&self.graphql_url
	}
}

#[async_trait]
impl ContractMetadataClient for AsyncBlockscoutClient {
	/// Looks up verified contract metadata without blocking the executor;
	/// the network round trip is the only suspension point.
	///
	/// # Errors
	/// * `ExplorerError::TransportError` - Connection, DNS or timeout
	///   failure; never retried
	/// * `ExplorerError::ParseError` - Undecodable response body or ABI
	async fn get_contract_metadata(
		&self,
		address: &str,
	) -> Result<Option<ContractMetadata>, ExplorerError> {
		let query = query::build_query(address);

		// The permit is held for the whole round trip so queued lookups
		// only start once a connection slot frees up
		let _permit = self.request_permits.acquire().await.map_err(|_| {
			ExplorerError::transport_error("Connection permit pool has been closed")
		})?;

		let response = self
			.client
			.post(self.graphql_url.clone())
			.json(&json!({ "query": query }))
			.send()
			.await?;

		if !response.status().is_success() {
			return Ok(None);
		}

		let body: Value = response.json().await?;
		query::parse_metadata(&body)
	}
}
