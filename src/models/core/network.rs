//! Blockchain network identifiers.
//!
//! Networks are opaque lookup keys for endpoint resolution; whether a
//! network is actually supported is decided by the endpoint table in
//! `services::explorer::endpoints`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifies a blockchain network.
///
/// The serde representation and the [`fmt::Display`]/[`FromStr`] slug
/// agree, so a slug taken from CLI arguments or configuration round trips
/// through serde unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthereumNetwork {
	Mainnet,
	Sepolia,
	Polygon,
	Gnosis,
	GnosisChiadoTestnet,
	EnergyWebChain,
	EnergyWebVoltaTestnet,
	BobaNetwork,
	MetisAndromedaMainnet,
	FuseMainnet,
	VelasEvmMainnet,
	ReiNetwork,
	MeterMainnet,
	KaiaMainnet,
	AcalaNetwork,
	Astar,
	Shiden,
	Evmos,
	KccMainnet,
	EthereumClassic,
	MordorTestnet,
	Mantle,
	MantleSepoliaTestnet,
	Scroll,
	ScrollSepoliaTestnet,
	RootstockMainnet,
	RootstockTestnet,
	Linea,
	NeonEvmMainnet,
	OasisSapphire,
	CronosMainnet,
	MantaPacificMainnet,
	Kroma,
	Zora,
	HaqqNetwork,
	Mode,
	OpSepoliaTestnet,
	IotaEvm,
	Redstone,
	Lisk,
	EtherlinkMainnet,
	EtherlinkTestnet,
	FlareMainnet,
	SongbirdCanaryNetwork,
	AlephZeroEvm,
	Swellchain,
}

impl EthereumNetwork {
	/// Every known network, used to drive slug parsing.
	pub const ALL: &'static [EthereumNetwork] = &[
		EthereumNetwork::Mainnet,
		EthereumNetwork::Sepolia,
		EthereumNetwork::Polygon,
		EthereumNetwork::Gnosis,
		EthereumNetwork::GnosisChiadoTestnet,
		EthereumNetwork::EnergyWebChain,
		EthereumNetwork::EnergyWebVoltaTestnet,
		EthereumNetwork::BobaNetwork,
		EthereumNetwork::MetisAndromedaMainnet,
		EthereumNetwork::FuseMainnet,
		EthereumNetwork::VelasEvmMainnet,
		EthereumNetwork::ReiNetwork,
		EthereumNetwork::MeterMainnet,
		EthereumNetwork::KaiaMainnet,
		EthereumNetwork::AcalaNetwork,
		EthereumNetwork::Astar,
		EthereumNetwork::Shiden,
		EthereumNetwork::Evmos,
		EthereumNetwork::KccMainnet,
		EthereumNetwork::EthereumClassic,
		EthereumNetwork::MordorTestnet,
		EthereumNetwork::Mantle,
		EthereumNetwork::MantleSepoliaTestnet,
		EthereumNetwork::Scroll,
		EthereumNetwork::ScrollSepoliaTestnet,
		EthereumNetwork::RootstockMainnet,
		EthereumNetwork::RootstockTestnet,
		EthereumNetwork::Linea,
		EthereumNetwork::NeonEvmMainnet,
		EthereumNetwork::OasisSapphire,
		EthereumNetwork::CronosMainnet,
		EthereumNetwork::MantaPacificMainnet,
		EthereumNetwork::Kroma,
		EthereumNetwork::Zora,
		EthereumNetwork::HaqqNetwork,
		EthereumNetwork::Mode,
		EthereumNetwork::OpSepoliaTestnet,
		EthereumNetwork::IotaEvm,
		EthereumNetwork::Redstone,
		EthereumNetwork::Lisk,
		EthereumNetwork::EtherlinkMainnet,
		EthereumNetwork::EtherlinkTestnet,
		EthereumNetwork::FlareMainnet,
		EthereumNetwork::SongbirdCanaryNetwork,
		EthereumNetwork::AlephZeroEvm,
		EthereumNetwork::Swellchain,
	];

	/// Stable string form of the network, matching the serde representation.
	pub fn slug(&self) -> &'static str {
		match self {
			Self::Mainnet => "mainnet",
			Self::Sepolia => "sepolia",
			Self::Polygon => "polygon",
			Self::Gnosis => "gnosis",
			Self::GnosisChiadoTestnet => "gnosis_chiado_testnet",
			Self::EnergyWebChain => "energy_web_chain",
			Self::EnergyWebVoltaTestnet => "energy_web_volta_testnet",
			Self::BobaNetwork => "boba_network",
			Self::MetisAndromedaMainnet => "metis_andromeda_mainnet",
			Self::FuseMainnet => "fuse_mainnet",
			Self::VelasEvmMainnet => "velas_evm_mainnet",
			Self::ReiNetwork => "rei_network",
			Self::MeterMainnet => "meter_mainnet",
			Self::KaiaMainnet => "kaia_mainnet",
			Self::AcalaNetwork => "acala_network",
			Self::Astar => "astar",
			Self::Shiden => "shiden",
			Self::Evmos => "evmos",
			Self::KccMainnet => "kcc_mainnet",
			Self::EthereumClassic => "ethereum_classic",
			Self::MordorTestnet => "mordor_testnet",
			Self::Mantle => "mantle",
			Self::MantleSepoliaTestnet => "mantle_sepolia_testnet",
			Self::Scroll => "scroll",
			Self::ScrollSepoliaTestnet => "scroll_sepolia_testnet",
			Self::RootstockMainnet => "rootstock_mainnet",
			Self::RootstockTestnet => "rootstock_testnet",
			Self::Linea => "linea",
			Self::NeonEvmMainnet => "neon_evm_mainnet",
			Self::OasisSapphire => "oasis_sapphire",
			Self::CronosMainnet => "cronos_mainnet",
			Self::MantaPacificMainnet => "manta_pacific_mainnet",
			Self::Kroma => "kroma",
			Self::Zora => "zora",
			Self::HaqqNetwork => "haqq_network",
			Self::Mode => "mode",
			Self::OpSepoliaTestnet => "op_sepolia_testnet",
			Self::IotaEvm => "iota_evm",
			Self::Redstone => "redstone",
			Self::Lisk => "lisk",
			Self::EtherlinkMainnet => "etherlink_mainnet",
			Self::EtherlinkTestnet => "etherlink_testnet",
			Self::FlareMainnet => "flare_mainnet",
			Self::SongbirdCanaryNetwork => "songbird_canary_network",
			Self::AlephZeroEvm => "aleph_zero_evm",
			Self::Swellchain => "swellchain",
		}
	}
}

impl fmt::Display for EthereumNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.slug())
	}
}

impl FromStr for EthereumNetwork {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|network| network.slug() == s)
			.ok_or_else(|| format!("unknown network slug: {}", s))
	}
}
