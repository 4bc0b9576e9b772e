//! Dashboard view models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::network::NetworkConfig;
use crate::vault::VaultSnapshot;
use crate::wallet::WalletView;

/// Tabs of the action panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTab {
    #[default]
    Deposit,
    Withdraw,
    Harvest,
}

impl ActionTab {
    pub const ALL: [ActionTab; 3] = [ActionTab::Deposit, ActionTab::Withdraw, ActionTab::Harvest];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTab::Deposit => "deposit",
            ActionTab::Withdraw => "withdraw",
            ActionTab::Harvest => "harvest",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActionTab::Deposit => "Deposit",
            ActionTab::Withdraw => "Withdraw",
            ActionTab::Harvest => "Harvest",
        }
    }
}

impl fmt::Display for ActionTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownTab(s.to_string()).into())
    }
}

/// The two free-text amount buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    Deposit,
    Withdraw,
}

impl FromStr for AmountField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(AmountField::Deposit),
            "withdraw" => Ok(AmountField::Withdraw),
            _ => Err(ValidationError::InvalidInput(format!(
                "unknown amount field '{}', expected deposit or withdraw",
                s
            ))
            .into()),
        }
    }
}

/// Request body for selecting a tab
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTab {
    pub tab: ActionTab,
}

/// Request body for updating an amount buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountUpdate {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub label: String,
    pub enabled: bool,
}

impl ActionButton {
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }

    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }
}

/// Headline vault figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStatsView {
    pub total_assets: String,
    pub current_apy: String,
    pub available_yield: String,
}

/// The connected account's holdings. Only present while connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub asset_balance: String,
    pub vault_position: String,
}

/// Deposit or withdraw tab body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountActionView {
    pub amount_label: String,
    pub amount: String,
    pub placeholder: String,
    pub button: ActionButton,
    pub note: String,
}

/// Harvest tab body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestActionView {
    pub available_yield: String,
    pub button: ActionButton,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPanelView {
    pub active_tab: ActionTab,
    pub deposit: AmountActionView,
    pub withdraw: AmountActionView,
    pub harvest: HarvestActionView,
}

/// Everything a client needs to render the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub network: NetworkConfig,
    pub wallet: WalletView,
    pub stats: VaultStatsView,
    pub portfolio: Option<PortfolioView>,
    pub actions: ActionPanelView,
    pub snapshot: VaultSnapshot,
}
