use std::sync::Arc;

use crate::config::{Config, LogFormat};
use octant_chain::{ChainReader, JsonRpcReader};
use octant_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    network::{ContractRegistry, NetworkConfig},
    vault::{VaultService, VaultServiceTrait, VaultWatcher},
    wallet::{SessionWallet, WalletConnector},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub network: NetworkConfig,
    pub contracts: ContractRegistry,
    pub chain_reader: Arc<dyn ChainReader>,
    pub wallet: Arc<dyn WalletConnector>,
    pub vault_service: Arc<dyn VaultServiceTrait>,
    pub watcher: Arc<VaultWatcher>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// bridged through `tracing-log`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Using {} (chain id {}) at {}",
        config.network.name,
        config.network.chain_id,
        config.network.rpc_url
    );
    let chain_reader: Arc<dyn ChainReader> = Arc::new(JsonRpcReader::with_timeout(
        config.network.rpc_url.clone(),
        config.rpc_timeout,
    ));

    let wallet: Arc<dyn WalletConnector> = Arc::new(SessionWallet::new());
    let vault_service: Arc<dyn VaultServiceTrait> = Arc::new(VaultService::new(
        chain_reader.clone(),
        config.contracts.clone(),
    ));
    let watcher = Arc::new(VaultWatcher::new(
        vault_service.clone(),
        wallet.clone(),
        config.refresh_interval,
    ));
    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        vault_service.clone(),
        wallet.clone(),
        config.network.clone(),
    ));

    Ok(Arc::new(AppState {
        network: config.network.clone(),
        contracts: config.contracts.clone(),
        chain_reader,
        wallet,
        vault_service,
        watcher,
        dashboard_service,
    }))
}
