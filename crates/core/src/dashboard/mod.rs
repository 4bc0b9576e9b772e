//! Dashboard module - tab state machine and view composition.
//!
//! The dashboard combines a vault snapshot, the wallet status and the
//! session's panel state into a read-only view. Deposit, withdraw and harvest
//! are presented but cannot be submitted.

mod dashboard_model;
mod dashboard_service;
mod dashboard_state;

pub use dashboard_model::*;
pub use dashboard_service::{
    apy_label, compose_dashboard, harvest_button, DashboardService, DashboardServiceTrait,
};
pub use dashboard_state::DashboardState;
