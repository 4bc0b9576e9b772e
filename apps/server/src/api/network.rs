use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, routing::get, Json, Router};
use octant_core::network::NetworkOverview;

async fn get_network(State(state): State<Arc<AppState>>) -> Json<NetworkOverview> {
    Json(NetworkOverview::new(&state.network, &state.contracts))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/network", get(get_network))
}
