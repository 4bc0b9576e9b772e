//! Chain reader trait definition.

use async_trait::async_trait;

use crate::errors::ChainError;
use crate::models::ContractCall;

/// Read-only access to contract state.
///
/// Implementations perform exactly one request per call. Callers decide what
/// an error means for them; the dashboard treats any failure as a value that
/// is not available yet.
///
/// # Example
///
/// ```ignore
/// use octant_chain::{ChainReader, ContractCall, ContractFunction, JsonRpcReader};
///
/// let reader = JsonRpcReader::new("http://127.0.0.1:8545");
/// let call = ContractCall::new(vault_address, ContractFunction::TotalAssets);
/// let raw_assets = reader.read_uint(&call).await?;
/// ```
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Identifier used in logs, e.g. `"JSON_RPC"`.
    fn id(&self) -> &'static str;

    /// Calls a view function and decodes its single `uint256` return value.
    async fn read_uint(&self, call: &ContractCall) -> Result<u128, ChainError>;

    /// The chain id reported by the connected node.
    async fn chain_id(&self) -> Result<u64, ChainError>;
}
