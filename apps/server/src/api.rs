use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod dashboard;
mod network;
mod vault;
mod wallet;

pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub status: &'static str,
    pub chain_id: u64,
}

/// Ready once the node answers and reports the configured chain.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<Json<Readiness>> {
    let chain_id = state.chain_reader.chain_id().await.map_err(|e| {
        tracing::warn!("Readiness check failed: {}", e);
        ApiError::ServiceUnavailable(format!("Chain node unavailable: {}", e))
    })?;

    if chain_id != state.network.chain_id {
        return Err(ApiError::ServiceUnavailable(format!(
            "Connected to chain {} but {} is configured",
            chain_id, state.network.chain_id
        )));
    }

    Ok(Json(Readiness {
        status: "ready",
        chain_id,
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins).allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(network::router())
        .merge(vault::router())
        .merge(wallet::router())
        .merge(dashboard::router());

    Router::new()
        .nest("/api/v1", api)
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
