//! Vault domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw on-chain values in each token's native precision.
///
/// `None` means the read has not completed or failed; derivation treats it
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultReadings {
    /// Vault `totalAssets()`, asset decimals
    pub total_assets: Option<u128>,
    /// Vault `totalSupply()`, share decimals
    pub total_supply: Option<u128>,
    /// Vault `lastRecordedAssets()` watermark, asset decimals
    pub last_recorded_assets: Option<u128>,
    /// Vault `balanceOf(account)`, share decimals
    pub user_shares: Option<u128>,
    /// Asset token `balanceOf(account)`, asset decimals
    pub user_asset_balance: Option<u128>,
    /// Asset token `allowance(account, vault)`, asset decimals
    pub allowance: Option<u128>,
}

/// Display-ready vault figures, recomputed from fresh readings every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultSnapshot {
    pub total_assets: Decimal,
    pub last_recorded_assets: Decimal,
    /// `max(0, total_assets - last_recorded_assets)`
    pub available_yield: Decimal,
    /// Assets per share; exactly 1 when supply is zero or unknown
    pub share_price: Decimal,
    pub user_shares: Decimal,
    pub user_asset_balance: Decimal,
    /// `user_shares * share_price`
    pub user_asset_value: Decimal,
    pub allowance: Decimal,
    pub is_connected: bool,
}

impl Default for VaultSnapshot {
    fn default() -> Self {
        super::derive_snapshot(&VaultReadings::default(), false)
    }
}
