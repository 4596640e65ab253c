//! Request construction and response parsing shared by both clients.
//!
//! The blocking and async execution paths differ only in how they perform
//! the network call; everything request- and response-shaped lives here as
//! pure functions.

use serde_json::Value;

use super::error::ExplorerError;
use crate::models::ContractMetadata;

/// Builds the GraphQL query for a checksummed contract address.
///
/// The address is substituted literally into a fixed template with no
/// variables payload. No validation or normalization is performed; a
/// malformed address simply yields a query the server rejects or answers
/// with no contract.
pub fn build_query(address: &str) -> String {
	format!(
		"{{address(hash: \"{}\") {{ hash, smartContract {{name, abi}} }}}}",
		address
	)
}

// Truthiness in the loose sense the explorer API relies on: null, empty
// containers, empty strings, zero and false all mean "no value".
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(values) => !values.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// Extracts contract metadata from a decoded GraphQL response body.
///
/// # Returns
/// * `Ok(Some(metadata))` when the response describes a verified contract
/// * `Ok(None)` when the body carries an `error` key, or `data.address`
///   or `data.address.smartContract` is missing or empty
///
/// # Errors
/// Returns `ExplorerError::ParseError` when a present smart contract has a
/// missing or ill-typed `name`/`abi` field, or the ABI text is not valid
/// JSON; the endpoint is violating the protocol in that case.
pub fn parse_metadata(body: &Value) -> Result<Option<ContractMetadata>, ExplorerError> {
	if body.get("error").is_some() {
		return Ok(None);
	}

	let address = match body.get("data").and_then(|data| data.get("address")) {
		Some(address) if is_truthy(address) => address,
		_ => return Ok(None),
	};

	let contract = match address.get("smartContract") {
		Some(contract) if is_truthy(contract) => contract,
		_ => return Ok(None),
	};

	let name = contract.get("name").and_then(Value::as_str).ok_or_else(|| {
		ExplorerError::parse_error("smart contract response is missing a name string")
	})?;
	let abi_text = contract.get("abi").and_then(Value::as_str).ok_or_else(|| {
		ExplorerError::parse_error("smart contract response is missing an abi string")
	})?;

	// The ABI arrives as JSON text embedded in the JSON response
	let abi: Value = serde_json::from_str(abi_text)?;

	Ok(Some(ContractMetadata::new(name, abi)))
}
