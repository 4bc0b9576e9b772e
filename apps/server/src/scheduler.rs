//! Background vault refresh.
//!
//! Starts the watcher loop that re-reads the vault on a fixed interval and
//! publishes each snapshot to SSE subscribers.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::main_lib::AppState;

/// Starts the background vault refresh loop.
pub fn start_vault_refresh_scheduler(state: Arc<AppState>) -> JoinHandle<()> {
    info!(
        "Vault refresh scheduler started for vault {}",
        state.contracts.vault
    );
    state.watcher.clone().spawn()
}

/// Re-reads the vault out of band, e.g. after the wallet account changed.
pub fn trigger_vault_refresh(state: Arc<AppState>) {
    tokio::spawn(async move {
        state.watcher.refresh().await;
    });
}
