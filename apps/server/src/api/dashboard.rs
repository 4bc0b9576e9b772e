use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use octant_core::dashboard::{
    ActionTab, AmountField, AmountUpdate, DashboardState, DashboardView, SelectTab,
};

async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard_service.get_dashboard().await)
}

async fn get_dashboard_state(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(state.dashboard_service.get_state())
}

async fn select_tab(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectTab>,
) -> Json<DashboardState> {
    Json(state.dashboard_service.select_tab(request.tab))
}

async fn set_amount(
    Path(field): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<AmountUpdate>,
) -> ApiResult<Json<DashboardState>> {
    let field: AmountField = field.parse()?;
    Ok(Json(state.dashboard_service.set_amount(field, request.value)))
}

/// Gates the action like its button does. Allowed actions end in 501.
async fn submit_action(
    Path(tab): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let tab: ActionTab = tab.parse()?;
    state.dashboard_service.submit_action(tab).await?;
    Ok(StatusCode::ACCEPTED)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/state", get(get_dashboard_state))
        .route("/dashboard/tab", put(select_tab))
        .route("/dashboard/amounts/{field}", put(set_amount))
        .route("/actions/{tab}", post(submit_action))
}
