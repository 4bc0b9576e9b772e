//! Network descriptor and contract address registry.

use std::fmt;
use std::str::FromStr;

use octant_chain::Address;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

const ASSET_TOKEN: Address = Address::from_bytes([
    0xa0, 0xb8, 0x69, 0x91, 0xc6, 0x21, 0x8b, 0x36, 0xc1, 0xd1, 0x9d, 0x4a, 0x2e, 0x9e, 0xb0,
    0xce, 0x36, 0x06, 0xeb, 0x48,
]);
const VAULT: Address = Address::from_bytes([
    0x5a, 0xa3, 0xee, 0xfa, 0xd5, 0x7a, 0x9b, 0xa2, 0x61, 0x03, 0x0e, 0xed, 0x45, 0xc6, 0x86,
    0xea, 0xc8, 0xf4, 0x1e, 0xa9,
]);
const DONATION_ROUTER: Address = Address::from_bytes([
    0x4c, 0x4a, 0x14, 0xc9, 0x49, 0x80, 0xe7, 0x21, 0x2e, 0xa5, 0xb7, 0x46, 0xfe, 0x39, 0x7e,
    0x55, 0xcb, 0x7e, 0x4a, 0x07,
]);
const LENDING_ADAPTER: Address = Address::from_bytes([
    0xbc, 0x3f, 0xed, 0x4d, 0xa2, 0xde, 0x3d, 0xe3, 0x37, 0xe3, 0x03, 0x3c, 0x20, 0xf3, 0x35,
    0x76, 0x5f, 0x35, 0xf2, 0xa7,
]);
const LENDING_VAULT: Address = Address::from_bytes([
    0x8e, 0xb6, 0x7a, 0x50, 0x96, 0x16, 0xcd, 0x6a, 0x7c, 0x1b, 0x3c, 0x8c, 0x21, 0xd4, 0x8f,
    0xf5, 0x7d, 0xf3, 0xd4, 0x58,
]);

/// Native currency of the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// The chain the dashboard talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub explorer_name: String,
    pub explorer_url: String,
    pub native_currency: NativeCurrency,
}

impl NetworkConfig {
    /// Local mainnet fork replaying real lending-market state. Keeps the
    /// mainnet chain id so wallets accept it without a custom network.
    pub fn mainnet_fork() -> Self {
        Self {
            chain_id: 1,
            name: "Mainnet Fork (Morpho)".to_string(),
            rpc_url: "http://127.0.0.1:8545".to_string(),
            explorer_name: "Etherscan".to_string(),
            explorer_url: "https://etherscan.io".to_string(),
            native_currency: NativeCurrency {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!(
            "{}/address/{}",
            self.explorer_url.trim_end_matches('/'),
            address
        )
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::mainnet_fork()
    }
}

/// Logical names of the contracts the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractName {
    AssetToken,
    Vault,
    DonationRouter,
    LendingAdapter,
    LendingVault,
}

impl ContractName {
    pub const ALL: [ContractName; 5] = [
        ContractName::AssetToken,
        ContractName::Vault,
        ContractName::DonationRouter,
        ContractName::LendingAdapter,
        ContractName::LendingVault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::AssetToken => "asset_token",
            ContractName::Vault => "vault",
            ContractName::DonationRouter => "donation_router",
            ContractName::LendingAdapter => "lending_adapter",
            ContractName::LendingVault => "lending_vault",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ContractName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "unknown contract '{}'",
                    s
                )))
            })
    }
}

/// Fixed mapping from logical contract names to deployed addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRegistry {
    pub asset_token: Address,
    pub vault: Address,
    pub donation_router: Address,
    pub lending_adapter: Address,
    pub lending_vault: Address,
}

impl ContractRegistry {
    pub fn get(&self, name: ContractName) -> Address {
        match name {
            ContractName::AssetToken => self.asset_token,
            ContractName::Vault => self.vault,
            ContractName::DonationRouter => self.donation_router,
            ContractName::LendingAdapter => self.lending_adapter,
            ContractName::LendingVault => self.lending_vault,
        }
    }

    pub fn set(&mut self, name: ContractName, address: Address) {
        match name {
            ContractName::AssetToken => self.asset_token = address,
            ContractName::Vault => self.vault = address,
            ContractName::DonationRouter => self.donation_router = address,
            ContractName::LendingAdapter => self.lending_adapter = address,
            ContractName::LendingVault => self.lending_vault = address,
        }
    }

    pub fn entries(&self) -> Vec<(ContractName, Address)> {
        ContractName::ALL
            .into_iter()
            .map(|name| (name, self.get(name)))
            .collect()
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self {
            asset_token: ASSET_TOKEN,
            vault: VAULT,
            donation_router: DONATION_ROUTER,
            lending_adapter: LENDING_ADAPTER,
            lending_vault: LENDING_VAULT,
        }
    }
}

/// Contract entry as shown to clients, with an explorer link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEntry {
    pub name: ContractName,
    pub address: Address,
    pub explorer_url: String,
}

/// Network descriptor plus every registered contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkOverview {
    pub network: NetworkConfig,
    pub contracts: Vec<ContractEntry>,
}

impl NetworkOverview {
    pub fn new(network: &NetworkConfig, contracts: &ContractRegistry) -> Self {
        let contracts = contracts
            .entries()
            .into_iter()
            .map(|(name, address)| ContractEntry {
                name,
                address,
                explorer_url: network.explorer_address_url(&address),
            })
            .collect();
        Self {
            network: network.clone(),
            contracts,
        }
    }
}
