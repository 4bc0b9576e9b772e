//! Wallet domain models.

use octant_chain::Address;
use serde::{Deserialize, Serialize};

/// Connection state reported by a wallet connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connected { address: Address },
}

impl WalletStatus {
    pub fn address(&self) -> Option<Address> {
        match self {
            WalletStatus::Connected { address } => Some(*address),
            WalletStatus::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected { .. })
    }
}

/// Input model for connecting a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectWallet {
    pub address: String,
}

/// Wallet badge and button as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub is_connected: bool,
    pub address: Option<Address>,
    /// e.g. `0x5aa3...1ea9`
    pub short_address: Option<String>,
    pub badge: Option<String>,
    pub button_label: String,
}

impl From<WalletStatus> for WalletView {
    fn from(status: WalletStatus) -> Self {
        match status {
            WalletStatus::Connected { address } => Self {
                is_connected: true,
                address: Some(address),
                short_address: Some(address.short()),
                badge: Some("Connected".to_string()),
                button_label: "Disconnect".to_string(),
            },
            WalletStatus::Disconnected => Self {
                is_connected: false,
                address: None,
                short_address: None,
                badge: None,
                button_label: "Connect Wallet".to_string(),
            },
        }
    }
}
