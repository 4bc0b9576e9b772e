//! Dashboard composition and action gating.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use super::dashboard_model::{
    ActionButton, ActionPanelView, ActionTab, AmountActionView, AmountField, DashboardView,
    HarvestActionView, PortfolioView, VaultStatsView,
};
use super::dashboard_state::DashboardState;
use crate::constants::{
    ASSET_SYMBOL, DISCONNECTED_APY_LABEL, DISPLAY_DECIMAL_PRECISION, ESTIMATED_APY_LABEL,
};
use crate::errors::{Error, Result, ValidationError};
use crate::network::NetworkConfig;
use crate::utils::format::{format_fixed, format_usd};
use crate::vault::{VaultServiceTrait, VaultSnapshot};
use crate::wallet::{WalletConnector, WalletStatus, WalletView};

const AMOUNT_PLACEHOLDER: &str = "0.00";

/// Trait for dashboard operations
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Composes the full dashboard from a fresh vault read.
    async fn get_dashboard(&self) -> DashboardView;

    fn get_state(&self) -> DashboardState;

    fn select_tab(&self, tab: ActionTab) -> DashboardState;

    fn set_amount(&self, field: AmountField, value: String) -> DashboardState;

    /// Rejects the action whenever its button is disabled. Submission itself
    /// is not implemented, so an allowed action ends in [`Error::NotImplemented`].
    async fn submit_action(&self, tab: ActionTab) -> Result<()>;
}

pub struct DashboardService {
    vault_service: Arc<dyn VaultServiceTrait>,
    wallet: Arc<dyn WalletConnector>,
    network: NetworkConfig,
    state: RwLock<DashboardState>,
}

impl DashboardService {
    pub fn new(
        vault_service: Arc<dyn VaultServiceTrait>,
        wallet: Arc<dyn WalletConnector>,
        network: NetworkConfig,
    ) -> Self {
        Self {
            vault_service,
            wallet,
            network,
            state: RwLock::new(DashboardState::new()),
        }
    }

    fn update_state(&self, apply: impl FnOnce(&mut DashboardState)) -> DashboardState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
        state.clone()
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(&self) -> DashboardView {
        let wallet = self.wallet.status();
        let snapshot = self.vault_service.get_snapshot(wallet.address()).await;
        let state = self.get_state();
        compose_dashboard(snapshot, wallet, &state, &self.network)
    }

    fn get_state(&self) -> DashboardState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn select_tab(&self, tab: ActionTab) -> DashboardState {
        self.update_state(|state| state.select_tab(tab))
    }

    fn set_amount(&self, field: AmountField, value: String) -> DashboardState {
        self.update_state(|state| state.set_amount(field, value))
    }

    async fn submit_action(&self, tab: ActionTab) -> Result<()> {
        let button = match tab {
            ActionTab::Deposit | ActionTab::Withdraw => amount_button(tab),
            ActionTab::Harvest => {
                let wallet = self.wallet.status();
                let snapshot = self.vault_service.get_snapshot(wallet.address()).await;
                harvest_button(wallet.is_connected(), snapshot.available_yield)
            }
        };

        if !button.enabled {
            debug!("Rejected {} action: {}", tab, button.label);
            return Err(ValidationError::ActionUnavailable {
                action: tab.to_string(),
                reason: button.label,
            }
            .into());
        }

        info!("{} requested but transaction submission is not available", tab);
        Err(Error::NotImplemented(format!("{} submission", tab.title())))
    }
}

/// Deposit and withdraw buttons stay disabled until submission exists.
fn amount_button(tab: ActionTab) -> ActionButton {
    ActionButton::disabled(format!("Connect Wallet to {}", tab.title()))
}

/// Harvest button gating: connected and strictly positive yield.
pub fn harvest_button(is_connected: bool, available_yield: Decimal) -> ActionButton {
    if !is_connected {
        ActionButton::disabled("Connect Wallet to Harvest")
    } else if available_yield <= Decimal::ZERO {
        ActionButton::disabled("No Yield Available")
    } else {
        ActionButton::enabled(format!(
            "Harvest ${}",
            format_fixed(available_yield, DISPLAY_DECIMAL_PRECISION)
        ))
    }
}

pub fn apy_label(is_connected: bool) -> &'static str {
    if is_connected {
        ESTIMATED_APY_LABEL
    } else {
        DISCONNECTED_APY_LABEL
    }
}

fn amount_action(tab: ActionTab, amount: &str, note: &str) -> AmountActionView {
    AmountActionView {
        amount_label: format!("Amount ({})", ASSET_SYMBOL),
        amount: amount.to_string(),
        placeholder: AMOUNT_PLACEHOLDER.to_string(),
        button: amount_button(tab),
        note: note.to_string(),
    }
}

/// Builds the dashboard from already-fetched inputs. Pure.
pub fn compose_dashboard(
    snapshot: VaultSnapshot,
    wallet: WalletStatus,
    state: &DashboardState,
    network: &NetworkConfig,
) -> DashboardView {
    let is_connected = wallet.is_connected();

    let stats = VaultStatsView {
        total_assets: format_usd(snapshot.total_assets),
        current_apy: apy_label(is_connected).to_string(),
        available_yield: format_usd(snapshot.available_yield),
    };

    let portfolio = is_connected.then(|| PortfolioView {
        asset_balance: format_usd(snapshot.user_asset_balance),
        vault_position: format_usd(snapshot.user_asset_value),
    });

    let actions = ActionPanelView {
        active_tab: state.active_tab(),
        deposit: amount_action(
            ActionTab::Deposit,
            state.amount(AmountField::Deposit),
            "Your USDC will be invested in Morpho to generate real yield for public goods.",
        ),
        withdraw: amount_action(
            ActionTab::Withdraw,
            state.amount(AmountField::Withdraw),
            "Withdraw your principal at any time. Generated yield stays donated.",
        ),
        harvest: HarvestActionView {
            available_yield: format_usd(snapshot.available_yield),
            button: harvest_button(is_connected, snapshot.available_yield),
            note: "Harvest and automatically donate generated yield to public goods recipients."
                .to_string(),
        },
    };

    DashboardView {
        network: network.clone(),
        wallet: WalletView::from(wallet),
        stats,
        portfolio,
        actions,
        snapshot,
    }
}
