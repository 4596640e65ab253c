use serde::{Deserialize, Serialize};

/// Verified smart contract metadata as indexed by a block explorer.
///
/// A transient value produced by a single lookup; it carries no identity
/// beyond its fields and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
	/// Contract name registered with the explorer
	pub name: String,
	/// Parsed ABI, typically an array of function and event descriptors
	pub abi: serde_json::Value,
	/// Whether the metadata was resolved through a proxy implementation.
	/// Blockscout lookups always describe the contract itself.
	pub from_proxy: bool,
}

impl ContractMetadata {
	/// Metadata for a contract verified under its own address.
	pub fn new(name: impl Into<String>, abi: serde_json::Value) -> Self {
		Self {
			name: name.into(),
			abi,
			from_proxy: false,
		}
	}
}
