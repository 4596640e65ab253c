//! Explorer client interfaces and implementations.
//!
//! Provides access to verified smart contract metadata indexed by
//! Blockscout explorers. Includes:
//!
//! - Generic contract metadata client trait
//! - Blocking and non-blocking Blockscout clients
//! - Static network-to-endpoint resolution
//! - Shared query construction and response parsing
//! - Error handling for explorer operations

mod client;
mod endpoints;
mod error;
mod query;

pub use client::{AsyncBlockscoutClient, BlockscoutClient, ContractMetadataClient};
pub use endpoints::graphql_url;
pub use error::ExplorerError;
pub use query::{build_query, parse_metadata};
