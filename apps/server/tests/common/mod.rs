//! Shared helpers: a mock JSON-RPC node and request plumbing.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    routing::post,
    Json, Router,
};
use octant_chain::{Address, ContractCall, ContractFunction};
use octant_core::network::ContractRegistry;
use octant_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ONE_SHARE: u128 = 1_000_000_000_000_000_000;

pub fn account() -> Address {
    "0x00000000000000000000000000000000000000aa".parse().unwrap()
}

#[derive(Clone)]
struct MockNode {
    chain_id: u64,
    /// Keyed on target address followed by calldata, both lowercase hex.
    answers: Arc<HashMap<String, u128>>,
    delay: Duration,
}

fn answer_key(to: &str, data: &str) -> String {
    format!("{}{}", to.to_ascii_lowercase(), data.to_ascii_lowercase())
}

async fn handle_rpc(State(node): State<MockNode>, Json(request): Json<Value>) -> Json<Value> {
    if !node.delay.is_zero() {
        tokio::time::sleep(node.delay).await;
    }
    let id = request["id"].clone();
    let response = match request["method"].as_str() {
        Some("eth_chainId") => {
            json!({ "jsonrpc": "2.0", "id": id, "result": format!("0x{:x}", node.chain_id) })
        }
        Some("eth_call") => {
            let call = &request["params"][0];
            let key = answer_key(
                call["to"].as_str().unwrap_or_default(),
                call["data"].as_str().unwrap_or_default(),
            );
            match node.answers.get(&key) {
                Some(value) => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": format!("0x{:064x}", value),
                }),
                None => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": { "code": 3, "message": "execution reverted" },
                }),
            }
        }
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "method not found" },
        }),
    };
    Json(response)
}

/// Starts a node that answers the given calls and reports `chain_id`.
pub async fn spawn_mock_node(chain_id: u64, answers: Vec<(ContractCall, u128)>) -> String {
    spawn_slow_mock_node(chain_id, answers, Duration::ZERO).await
}

/// Like [`spawn_mock_node`], but every request waits `delay` before answering.
pub async fn spawn_slow_mock_node(
    chain_id: u64,
    answers: Vec<(ContractCall, u128)>,
    delay: Duration,
) -> String {
    let answers = answers
        .into_iter()
        .map(|(call, value)| {
            let key = answer_key(&call.to.to_string(), &call.calldata_hex().unwrap());
            (key, value)
        })
        .collect();
    let app = Router::new().route("/", post(handle_rpc)).with_state(MockNode {
        chain_id,
        answers: Arc::new(answers),
        delay,
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Vault holding 13.3456 USDC for 10 shares, of which 12.3456 is unharvested,
/// with `account()` owning one share and 5 USDC.
pub fn yielding_vault() -> Vec<(ContractCall, u128)> {
    let contracts = ContractRegistry::default();
    let vault = contracts.vault;
    let asset = contracts.asset_token;
    vec![
        (ContractCall::new(vault, ContractFunction::TotalAssets), 13_345_600),
        (ContractCall::new(vault, ContractFunction::TotalSupply), 10 * ONE_SHARE),
        (
            ContractCall::new(vault, ContractFunction::LastRecordedAssets),
            1_000_000,
        ),
        (
            ContractCall::with_args(vault, ContractFunction::BalanceOf, vec![account()]),
            ONE_SHARE,
        ),
        (
            ContractCall::with_args(asset, ContractFunction::BalanceOf, vec![account()]),
            5_000_000,
        ),
        (
            ContractCall::with_args(
                asset,
                ContractFunction::Allowance,
                vec![account(), vault],
            ),
            0,
        ),
    ]
}

pub fn config_for(rpc_url: &str) -> Config {
    let mut config = Config::default();
    config.network.rpc_url = rpc_url.to_string();
    config.rpc_timeout = Duration::from_millis(500);
    config
}

pub async fn app_for(config: &Config) -> Router {
    let state = build_state(config).await.unwrap();
    app_router(state, config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
