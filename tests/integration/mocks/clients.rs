//! Mock implementations of explorer clients.
//!
//! This module provides a mock implementation of the contract metadata
//! client trait plus helpers for mounting canned explorer responses on a
//! `mockito` server. The mocks allow testing lookup consumers without
//! actual network connections.

use async_trait::async_trait;
use mockall::mock;
use mockito::{Matcher, Mock, Server};
use serde_json::json;

use blockscout_client::{
	models::ContractMetadata,
	services::explorer::{ContractMetadataClient, ExplorerError},
};

mock! {
	/// Mock implementation of the contract metadata client trait.
	///
	/// Simulates explorer lookups without network access.
	pub ContractMetadataClient {}

	#[async_trait]
	impl ContractMetadataClient for ContractMetadataClient {
		async fn get_contract_metadata(
			&self,
			address: &str,
		) -> Result<Option<ContractMetadata>, ExplorerError>;
	}

	impl Clone for ContractMetadataClient {
		fn clone(&self) -> Self;
	}
}

/// Mounts a verified-contract response, matching the request body on the
/// literal address embedded in the query text.
pub async fn create_verified_contract_mock(
	server: &mut Server,
	address: &str,
	name: &str,
	abi_text: &str,
) -> Mock {
	server
		.mock("POST", "/")
		.match_header("content-type", "application/json")
		.match_body(Matcher::Regex(address.to_string()))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"data": {
					"address": {
						"hash": address,
						"smartContract": {"name": name, "abi": abi_text}
					}
				}
			})
			.to_string(),
		)
		.create_async()
		.await
}

/// Mounts an arbitrary JSON response body with a 200 status.
pub async fn create_json_response_mock(server: &mut Server, body: &serde_json::Value) -> Mock {
	server
		.mock("POST", "/")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(body.to_string())
		.create_async()
		.await
}

/// Mounts an empty response with the given HTTP status.
pub async fn create_error_status_mock(server: &mut Server, status: usize) -> Mock {
	server
		.mock("POST", "/")
		.with_status(status)
		.create_async()
		.await
}
