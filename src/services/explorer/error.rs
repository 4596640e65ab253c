//! Explorer error types and handling.
//!
//! Distinguishes fatal construction problems from per-lookup transport and
//! decoding failures. "No verified contract" is not an error; lookups
//! report it as an absent result.

use log::error;
use std::{error::Error, fmt};

/// Represents possible errors that can occur during explorer operations
#[derive(Debug)]
pub enum ExplorerError {
	/// The network has no registered Blockscout endpoint; raised at
	/// client construction and fatal to that instance
	ConfigurationError(String),

	/// Network, connection or timeout failure during the HTTP call
	TransportError(String),

	/// The endpoint returned data that could not be decoded
	ParseError(String),
}

impl ExplorerError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConfigurationError(msg) => format!("Configuration error: {}", msg),
			Self::TransportError(msg) => format!("Transport error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
		}
	}

	/// Creates a new configuration error with logging
	pub fn configuration_error(msg: impl Into<String>) -> Self {
		let error = Self::ConfigurationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new transport error with logging
	pub fn transport_error(msg: impl Into<String>) -> Self {
		let error = Self::TransportError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new parse error with logging
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ExplorerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ExplorerError {}

impl From<reqwest::Error> for ExplorerError {
	fn from(err: reqwest::Error) -> Self {
		// Body decoding failures are protocol violations by the endpoint,
		// everything else is a transport problem
		if err.is_decode() {
			Self::parse_error(err.to_string())
		} else {
			Self::transport_error(err.to_string())
		}
	}
}

impl From<serde_json::Error> for ExplorerError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
