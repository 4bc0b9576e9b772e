use async_trait::async_trait;
use octant_chain::Address;

use super::vault_model::{VaultReadings, VaultSnapshot};

/// Trait for vault read operations
#[async_trait]
pub trait VaultServiceTrait: Send + Sync {
    /// Reads raw vault state. Account-specific values are only read when an
    /// account is given; any failed read is reported as `None`.
    async fn fetch_readings(&self, account: Option<Address>) -> VaultReadings;

    /// Fresh readings turned into display figures.
    async fn get_snapshot(&self, account: Option<Address>) -> VaultSnapshot;
}
