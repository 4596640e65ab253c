//! Service layer of the crate.
//!
//! - `explorer`: Blockscout clients for contract metadata lookups

pub mod explorer;
