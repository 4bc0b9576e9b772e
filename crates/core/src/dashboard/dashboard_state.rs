//! Ephemeral UI state of the action panel.

use log::debug;
use serde::Serialize;

use super::dashboard_model::{ActionTab, AmountField};

/// Active tab plus the two amount buffers.
///
/// Buffers hold whatever the user typed: they are never validated or parsed,
/// and each tab keeps its own. Nothing here outlives the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    active_tab: ActionTab,
    deposit_amount: String,
    withdraw_amount: String,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ActionTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: ActionTab) {
        if self.active_tab != tab {
            debug!("Action tab {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }

    pub fn amount(&self, field: AmountField) -> &str {
        match field {
            AmountField::Deposit => &self.deposit_amount,
            AmountField::Withdraw => &self.withdraw_amount,
        }
    }

    pub fn set_amount(&mut self, field: AmountField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AmountField::Deposit => self.deposit_amount = value,
            AmountField::Withdraw => self.withdraw_amount = value,
        }
    }
}
