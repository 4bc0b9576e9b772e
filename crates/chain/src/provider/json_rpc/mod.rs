//! Ethereum JSON-RPC reader.
//!
//! Issues `eth_call` against the `latest` block and `eth_chainId` over plain
//! HTTP. Works against public nodes as well as local forks (anvil, hardhat).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::ChainError;
use crate::models::{decode_uint, ContractCall};
use crate::provider::ChainReader;

const READER_ID: &str = "JSON_RPC";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Wire Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

// ============================================================================
// JsonRpcReader
// ============================================================================

/// [`ChainReader`] backed by an HTTP JSON-RPC endpoint.
pub struct JsonRpcReader {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl JsonRpcReader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one JSON-RPC request and returns the `result` string.
    async fn request(&self, method: &str, params: Value) -> Result<String, ChainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        debug!("JSON-RPC request #{}: {} -> {}", id, method, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChainError::Timeout {
                        endpoint: self.endpoint.clone(),
                    }
                } else {
                    ChainError::Transport {
                        endpoint: self.endpoint.clone(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ChainError::Transport {
                endpoint: self.endpoint.clone(),
                message: format!("HTTP {} - {}", status, text),
            });
        }

        let parsed: RpcResponse = response.json().await.map_err(|e| {
            ChainError::InvalidResponse(format!("Failed to parse JSON-RPC response: {}", e))
        })?;

        if let Some(error) = parsed.error {
            warn!(
                "JSON-RPC request #{} ({}) failed: {} {}",
                id, method, error.code, error.message
            );
            return Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        match parsed.result {
            Some(Value::String(result)) => Ok(result),
            Some(other) => Err(ChainError::InvalidResponse(format!(
                "expected hex string result, got {}",
                other
            ))),
            None => Err(ChainError::InvalidResponse(
                "response carries neither result nor error".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ChainReader for JsonRpcReader {
    fn id(&self) -> &'static str {
        READER_ID
    }

    async fn read_uint(&self, call: &ContractCall) -> Result<u128, ChainError> {
        let params = json!([
            {
                "to": call.to.to_string(),
                "data": call.calldata_hex()?,
            },
            "latest"
        ]);

        let raw = self.request("eth_call", params).await?;
        let value = decode_uint(&raw)?;
        debug!("{}.{} = {}", call.to, call.function, value);
        Ok(value)
    }

    async fn chain_id(&self) -> Result<u64, ChainError> {
        let raw = self.request("eth_chainId", json!([])).await?;
        let value = decode_uint(&raw)?;
        u64::try_from(value).map_err(|_| ChainError::ValueOverflow(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, ContractFunction};

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on loopback in any sane test environment.
        let reader = JsonRpcReader::with_timeout("http://127.0.0.1:9", Duration::from_secs(2));
        let call = ContractCall::new(Address::ZERO, ContractFunction::TotalAssets);

        let err = reader.read_uint(&call).await.unwrap_err();
        assert!(
            matches!(
                err,
                ChainError::Transport { .. } | ChainError::Timeout { .. }
            ),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn test_bad_arguments_fail_before_any_request() {
        let reader = JsonRpcReader::new("http://127.0.0.1:9");
        let call = ContractCall::new(Address::ZERO, ContractFunction::Allowance);

        let err = reader.read_uint(&call).await.unwrap_err();
        assert!(matches!(err, ChainError::ArgumentMismatch { .. }));
    }

    #[test]
    fn test_request_ids_increase() {
        let reader = JsonRpcReader::new("http://127.0.0.1:9");
        let first = reader.next_id.fetch_add(1, Ordering::Relaxed);
        let second = reader.next_id.fetch_add(1, Ordering::Relaxed);
        assert!(second > first);
        assert_eq!(reader.id(), "JSON_RPC");
    }
}
