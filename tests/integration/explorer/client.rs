use std::{
	sync::{
		atomic::{AtomicUsize, Ordering},
		Arc,
	},
	time::Duration,
};

use mockito::Server;
use serde_json::json;
use tokio::{
	io::{AsyncReadExt, AsyncWriteExt},
	time::{sleep, timeout},
};

use crate::integration::mocks::{
	create_error_status_mock, create_json_response_mock, create_verified_contract_mock,
	MockContractMetadataClient,
};
use blockscout_client::{
	models::{ClientConfig, ContractMetadata, EthereumNetwork},
	services::explorer::{
		graphql_url, AsyncBlockscoutClient, BlockscoutClient, ContractMetadataClient,
		ExplorerError,
	},
};

const ADDRESS: &str = "0x5aFE3855358E112B5647B952709E6165e1c1eEEe";

#[test]
fn test_construction_fails_for_every_unsupported_network() {
	let config = ClientConfig::default();

	for network in EthereumNetwork::ALL {
		if graphql_url(network).is_some() {
			continue;
		}

		assert!(
			matches!(
				BlockscoutClient::new(network, &config),
				Err(ExplorerError::ConfigurationError(_))
			),
			"blocking construction should fail for {}",
			network
		);
		assert!(
			matches!(
				AsyncBlockscoutClient::new(network, &config),
				Err(ExplorerError::ConfigurationError(_))
			),
			"async construction should fail for {}",
			network
		);
	}
}

#[tokio::test]
async fn test_async_lookup_returns_verified_metadata() {
	let mut server = Server::new_async().await;
	let mock = create_verified_contract_mock(
		&mut server,
		ADDRESS,
		"GnosisSafeProxy",
		"[{\"type\":\"function\"}]",
	)
	.await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let metadata = client
		.get_contract_metadata(ADDRESS)
		.await
		.unwrap()
		.expect("metadata should be present");

	assert_eq!(metadata.name, "GnosisSafeProxy");
	assert_eq!(metadata.abi, json!([{"type": "function"}]));
	assert!(!metadata.from_proxy);
	// The mock only matches when the wire body embeds the literal address
	mock.assert_async().await;
}

#[tokio::test]
async fn test_async_lookup_absent_for_unverified_contract() {
	let mut server = Server::new_async().await;
	let mock = create_json_response_mock(
		&mut server,
		&json!({"data": {"address": {"hash": ADDRESS, "smartContract": null}}}),
	)
	.await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let result = client.get_contract_metadata(ADDRESS).await.unwrap();

	assert_eq!(result, None);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_async_lookup_absent_for_query_error() {
	let mut server = Server::new_async().await;
	let mock =
		create_json_response_mock(&mut server, &json!({"error": "query was malformed"})).await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let result = client.get_contract_metadata(ADDRESS).await.unwrap();

	assert_eq!(result, None);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_async_lookup_absent_for_http_error_status() {
	let mut server = Server::new_async().await;
	let mock = create_error_status_mock(&mut server, 500).await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let result = client.get_contract_metadata(ADDRESS).await.unwrap();

	assert_eq!(result, None);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_async_lookup_rejects_malformed_abi() {
	let mut server = Server::new_async().await;
	let mock = create_verified_contract_mock(&mut server, ADDRESS, "Foo", "not-json").await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let error = client.get_contract_metadata(ADDRESS).await.unwrap_err();

	assert!(matches!(error, ExplorerError::ParseError(_)));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_async_lookup_rejects_undecodable_body() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body("not-json")
		.create_async()
		.await;

	let client =
		AsyncBlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let error = client.get_contract_metadata(ADDRESS).await.unwrap_err();

	assert!(matches!(error, ExplorerError::ParseError(_)));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
	// Bind then drop to get a local port nothing listens on
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let endpoint = format!("http://{}", listener.local_addr().unwrap());
	drop(listener);

	let client = AsyncBlockscoutClient::new_with_url(&endpoint, &ClientConfig::default()).unwrap();
	let error = client.get_contract_metadata(ADDRESS).await.unwrap_err();

	assert!(matches!(error, ExplorerError::TransportError(_)));
}

#[tokio::test]
async fn test_configured_timeout_bounds_the_call() {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let endpoint = format!("http://{}", listener.local_addr().unwrap());

	// Accept connections but never answer
	tokio::spawn(async move {
		loop {
			match listener.accept().await {
				Ok((socket, _)) => {
					tokio::spawn(async move {
						sleep(Duration::from_secs(10)).await;
						drop(socket);
					});
				}
				Err(_) => break,
			}
		}
	});

	let config = ClientConfig::default().with_request_timeout(Duration::from_millis(250));
	let client = AsyncBlockscoutClient::new_with_url(&endpoint, &config).unwrap();
	let error = client.get_contract_metadata(ADDRESS).await.unwrap_err();

	assert!(matches!(error, ExplorerError::TransportError(_)));
}

#[tokio::test]
async fn test_concurrent_lookups_share_connection_cap() {
	const CAP: usize = 2;
	const LOOKUPS: usize = 6;

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let endpoint = format!("http://{}", listener.local_addr().unwrap());

	let open_connections = Arc::new(AtomicUsize::new(0));
	let peak_connections = Arc::new(AtomicUsize::new(0));

	// Counting server: tracks how many connections are open at once and
	// holds each one long enough for queued lookups to pile up
	{
		let open_connections = open_connections.clone();
		let peak_connections = peak_connections.clone();
		tokio::spawn(async move {
			loop {
				let (mut socket, _) = match listener.accept().await {
					Ok(connection) => connection,
					Err(_) => break,
				};
				let open_connections = open_connections.clone();
				let peak_connections = peak_connections.clone();
				tokio::spawn(async move {
					let open = open_connections.fetch_add(1, Ordering::SeqCst) + 1;
					peak_connections.fetch_max(open, Ordering::SeqCst);

					// Drain the request until the client goes quiet
					let mut buffer = [0u8; 4096];
					while let Ok(Ok(bytes_read)) =
						timeout(Duration::from_millis(50), socket.read(&mut buffer)).await
					{
						if bytes_read == 0 {
							break;
						}
					}
					sleep(Duration::from_millis(150)).await;

					let body = r#"{"data":{"address":{"smartContract":null}}}"#;
					let response = format!(
						"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
						body.len(),
						body
					);
					let _ = socket.write_all(response.as_bytes()).await;
					let _ = socket.shutdown().await;
					open_connections.fetch_sub(1, Ordering::SeqCst);
				});
			}
		});
	}

	let config = ClientConfig::default().with_max_concurrent_requests(CAP);
	let client = AsyncBlockscoutClient::new_with_url(&endpoint, &config).unwrap();

	let mut lookups = Vec::new();
	for _ in 0..LOOKUPS {
		let client = client.clone();
		lookups.push(tokio::spawn(async move {
			client.get_contract_metadata(ADDRESS).await
		}));
	}
	for lookup in lookups {
		let result = lookup.await.unwrap().unwrap();
		assert_eq!(result, None);
	}

	let peak = peak_connections.load(Ordering::SeqCst);
	assert!(
		peak <= CAP,
		"{} simultaneous connections observed, cap is {}",
		peak,
		CAP
	);
	assert!(peak > 0, "the counting server never saw a connection");
}

#[test]
fn test_blocking_lookup_returns_verified_metadata() {
	let mut server = Server::new();
	let mock = server
		.mock("POST", "/")
		.match_body(mockito::Matcher::Regex(ADDRESS.to_string()))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"data": {
					"address": {
						"hash": ADDRESS,
						"smartContract": {"name": "Foo", "abi": "[{\"type\":\"function\"}]"}
					}
				}
			})
			.to_string(),
		)
		.create();

	let client = BlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let metadata = client
		.get_contract_metadata(ADDRESS)
		.unwrap()
		.expect("metadata should be present");

	assert_eq!(metadata.name, "Foo");
	assert_eq!(metadata.abi, json!([{"type": "function"}]));
	assert!(!metadata.from_proxy);
	mock.assert();
}

#[test]
fn test_blocking_lookup_absent_for_http_error_status() {
	let mut server = Server::new();
	let mock = server.mock("POST", "/").with_status(403).create();

	let client = BlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let result = client.get_contract_metadata(ADDRESS).unwrap();

	assert_eq!(result, None);
	mock.assert();
}

#[test]
fn test_blocking_lookup_absent_for_unverified_contract() {
	let mut server = Server::new();
	let mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(json!({"data": {"address": {"smartContract": null}}}).to_string())
		.create();

	let client = BlockscoutClient::new_with_url(&server.url(), &ClientConfig::default()).unwrap();
	let result = client.get_contract_metadata(ADDRESS).unwrap();

	assert_eq!(result, None);
	mock.assert();
}

#[tokio::test]
async fn test_mocked_client_trait_lookup() {
	let mut mock = MockContractMetadataClient::new();
	let expected = ContractMetadata::new("Foo", json!([{"type": "function"}]));
	let returned = expected.clone();

	mock.expect_get_contract_metadata()
		.withf(|address| address == ADDRESS)
		.times(1)
		.returning(move |_| Ok(Some(returned.clone())));

	let result = mock.get_contract_metadata(ADDRESS).await.unwrap();
	assert_eq!(result, Some(expected));
}
