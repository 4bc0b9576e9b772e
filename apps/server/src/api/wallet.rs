use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, scheduler::trigger_vault_refresh};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use octant_core::{
    errors::ValidationError,
    wallet::{ConnectWallet, WalletView},
    Address,
};

async fn get_wallet(State(state): State<Arc<AppState>>) -> Json<WalletView> {
    Json(WalletView::from(state.wallet.status()))
}

async fn connect_wallet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConnectWallet>,
) -> ApiResult<Json<WalletView>> {
    let address = request
        .address
        .parse::<Address>()
        .map_err(|e| octant_core::Error::from(ValidationError::InvalidAddress(e.to_string())))?;
    let status = state.wallet.connect(address)?;
    trigger_vault_refresh(state.clone());
    Ok(Json(WalletView::from(status)))
}

async fn disconnect_wallet(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletView>> {
    let status = state.wallet.disconnect()?;
    trigger_vault_refresh(state.clone());
    Ok(Json(WalletView::from(status)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wallet", get(get_wallet))
        .route("/wallet/connect", post(connect_wallet))
        .route("/wallet/disconnect", post(disconnect_wallet))
}
