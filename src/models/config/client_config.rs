//! Per-instance client configuration.
//!
//! Defaults are sourced from environment variables once at construction;
//! the resulting configuration is immutable for the client's lifetime.

use std::time::Duration;

use crate::utils::parsing::{parse_env_u64, parse_env_usize};

/// Environment variable capping how long a single HTTP call may block.
pub const REQUEST_TIMEOUT_ENV: &str = "BLOCKSCOUT_CLIENT_REQUEST_TIMEOUT";

/// Environment variable capping simultaneous connections to the endpoint
/// host (async client only).
pub const MAX_REQUESTS_ENV: &str = "BLOCKSCOUT_CLIENT_MAX_REQUESTS";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Configuration shared by the blocking and async Blockscout clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
	/// Upper bound on a single HTTP round trip
	pub request_timeout: Duration,
	/// Upper bound on simultaneous outbound connections opened by the
	/// async client; excess lookups queue at the transport layer
	pub max_concurrent_requests: usize,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: Duration::from_secs(parse_env_u64(
				REQUEST_TIMEOUT_ENV,
				DEFAULT_REQUEST_TIMEOUT_SECS,
			)),
			max_concurrent_requests: parse_env_usize(
				MAX_REQUESTS_ENV,
				DEFAULT_MAX_CONCURRENT_REQUESTS,
			),
		}
	}
}

impl ClientConfig {
	/// Override the request timeout.
	pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
		self.request_timeout = request_timeout;
		self
	}

	/// Override the connection cap.
	pub fn with_max_concurrent_requests(mut self, max_concurrent_requests: usize) -> Self {
		self.max_concurrent_requests = max_concurrent_requests;
		self
	}
}
