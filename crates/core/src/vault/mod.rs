//! Vault module - raw readings, derived metrics and the refresh loop.

mod vault_metrics;
mod vault_model;
mod vault_service;
mod vault_traits;
mod vault_watcher;

pub use vault_metrics::{available_yield, derive_snapshot, share_price};
pub use vault_model::{VaultReadings, VaultSnapshot};
pub use vault_service::VaultService;
pub use vault_traits::VaultServiceTrait;
pub use vault_watcher::VaultWatcher;

#[cfg(test)]
mod vault_metrics_tests;
