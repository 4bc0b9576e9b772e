use std::{convert::Infallible, sync::Arc, time::Duration};

use crate::main_lib::AppState;
use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_core::stream::Stream;
use octant_core::vault::VaultSnapshot;
use tokio_stream::wrappers::WatchStream;

const SNAPSHOT_EVENT: &str = "vault-snapshot";

/// Reads the vault now for the connected account.
async fn get_snapshot(State(state): State<Arc<AppState>>) -> Json<VaultSnapshot> {
    let account = state.wallet.status().address();
    Json(state.vault_service.get_snapshot(account).await)
}

/// Streams every snapshot the watcher publishes, starting with the latest.
async fn stream_snapshots(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let receiver = WatchStream::new(state.watcher.subscribe());
    let stream = tokio_stream::StreamExt::filter_map(receiver, |snapshot| {
        match SseEvent::default().event(SNAPSHOT_EVENT).json_data(&snapshot) {
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                tracing::error!("Failed to serialize vault snapshot: {}", err);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/vault/snapshot", get(get_snapshot))
        .route("/vault/stream", get(stream_snapshots))
}
