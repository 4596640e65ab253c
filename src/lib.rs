//! Client library for retrieving verified smart contract metadata (name
//! and ABI) from per-network Blockscout GraphQL endpoints.
//!
//! The crate is organized around a small set of modules:
//!
//! - `models`: Domain models (networks, metadata, client configuration)
//! - `services`: The blocking and non-blocking Blockscout clients plus
//!   endpoint resolution, query construction and response parsing
//! - `utils`: Logging and environment parsing utilities
//!
//! Lookups distinguish "no verified contract" (an absent result) from
//! lookup failures (transport or decoding errors); callers that need
//! resilience are expected to add retries themselves.

pub mod models;
pub mod services;
pub mod utils;
