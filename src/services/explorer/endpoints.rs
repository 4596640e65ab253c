//! Static resolution of networks to Blockscout GraphQL endpoints.
//!
//! The table is built once at first use and never mutated. Networks whose
//! explorers are not Blockscout deployments are deliberately absent;
//! looking them up yields `None` and client construction fails.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::EthereumNetwork;

lazy_static! {
	static ref NETWORK_GRAPHQL_URLS: HashMap<EthereumNetwork, &'static str> = {
		let mut urls = HashMap::new();
		urls.insert(
			EthereumNetwork::Gnosis,
			"https://gnosis.blockscout.com/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::GnosisChiadoTestnet,
			"https://gnosis-chiado.blockscout.com/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::EnergyWebChain,
			"https://explorer.energyweb.org/graphiql",
		);
		urls.insert(
			EthereumNetwork::EnergyWebVoltaTestnet,
			"https://volta-explorer.energyweb.org/graphiql",
		);
		urls.insert(
			EthereumNetwork::BobaNetwork,
			"https://blockexplorer.boba.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::MetisAndromedaMainnet,
			"https://andromeda-explorer.metis.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::FuseMainnet,
			"https://explorer.fuse.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::VelasEvmMainnet,
			"https://evmexplorer.velas.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::ReiNetwork,
			"https://scan.rei.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::MeterMainnet,
			"https://scan.meter.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::KaiaMainnet,
			"https://scope.klaytn.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::AcalaNetwork,
			"https://blockscout.acala.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::Astar,
			"https://blockscout.com/astar/graphiql",
		);
		urls.insert(
			EthereumNetwork::Shiden,
			"https://blockscout.com/shiden/graphiql",
		);
		urls.insert(EthereumNetwork::Evmos, "https://evm.evmos.org/graphiql");
		urls.insert(EthereumNetwork::KccMainnet, "https://scan.kcc.io/graphiql");
		urls.insert(
			EthereumNetwork::EthereumClassic,
			"https://blockscout.com/etc/mainnet/graphiql",
		);
		urls.insert(
			EthereumNetwork::MordorTestnet,
			"https://blockscout.com/etc/mordor/graphiql",
		);
		urls.insert(
			EthereumNetwork::Mantle,
			"https://explorer.mantle.xyz/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::MantleSepoliaTestnet,
			"https://explorer.sepolia.mantle.xyz/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::Scroll,
			"https://blockscout.scroll.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::ScrollSepoliaTestnet,
			"https://sepolia-blockscout.scroll.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::RootstockMainnet,
			"https://rootstock.blockscout.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::RootstockTestnet,
			"https://rootstock-testnet.blockscout.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::Linea,
			"https://explorer.linea.build/graphiql",
		);
		urls.insert(
			EthereumNetwork::NeonEvmMainnet,
			"https://neon.blockscout.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::OasisSapphire,
			"https://explorer.sapphire.oasis.io/graphiql",
		);
		urls.insert(
			EthereumNetwork::CronosMainnet,
			"https://cronos.org/explorer/graphiql",
		);
		urls.insert(
			EthereumNetwork::MantaPacificMainnet,
			"https://pacific-explorer.manta.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::Kroma,
			"https://blockscout.kroma.network/graphiql",
		);
		urls.insert(EthereumNetwork::Zora, "https://explorer.zora.energy/graphiql");
		urls.insert(
			EthereumNetwork::HaqqNetwork,
			"https://explorer.haqq.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::Mode,
			"https://explorer.mode.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::OpSepoliaTestnet,
			"https://optimism-sepolia.blockscout.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::IotaEvm,
			"https://iota-evm.blockscout.com/graphiql",
		);
		urls.insert(
			EthereumNetwork::Redstone,
			"https://explorer.redstone.xyz/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::Lisk,
			"https://blockscout.lisk.com/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::EtherlinkMainnet,
			"https://explorer.etherlink.com/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::EtherlinkTestnet,
			"https://testnet-explorer.etherlink.com/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::FlareMainnet,
			"https://flare-explorer.flare.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::SongbirdCanaryNetwork,
			"https://songbird-explorer.flare.network/graphiql",
		);
		urls.insert(
			EthereumNetwork::AlephZeroEvm,
			"https://evm-explorer.alephzero.org/api/v1/graphql",
		);
		urls.insert(
			EthereumNetwork::Swellchain,
			"https://explorer.swellnetwork.io/api/v1/graphql",
		);
		urls
	};
}

/// Resolves the Blockscout GraphQL endpoint for a network.
///
/// # Returns
/// * `Some(url)` when the network has a registered Blockscout explorer
/// * `None` for unsupported networks
pub fn graphql_url(network: &EthereumNetwork) -> Option<&'static str> {
	NETWORK_GRAPHQL_URLS.get(network).copied()
}
