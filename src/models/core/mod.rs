mod metadata;
mod network;

pub use metadata::ContractMetadata;
pub use network::EthereumNetwork;
