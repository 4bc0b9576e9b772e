//! Vault read service.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use octant_chain::{Address, ChainReader, ContractCall, ContractFunction};

use super::vault_metrics::derive_snapshot;
use super::vault_model::{VaultReadings, VaultSnapshot};
use super::vault_traits::VaultServiceTrait;
use crate::network::ContractRegistry;

/// Reads vault and asset-token state through a [`ChainReader`].
pub struct VaultService {
    reader: Arc<dyn ChainReader>,
    contracts: ContractRegistry,
}

impl VaultService {
    pub fn new(reader: Arc<dyn ChainReader>, contracts: ContractRegistry) -> Self {
        Self { reader, contracts }
    }

    pub fn contracts(&self) -> &ContractRegistry {
        &self.contracts
    }

    /// One independent read; failures are logged and become `None`.
    async fn read(&self, call: ContractCall) -> Option<u128> {
        match self.reader.read_uint(&call).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    "{} read of {} on {} failed: {}",
                    self.reader.id(),
                    call.function,
                    call.to,
                    e
                );
                None
            }
        }
    }

    /// A read that only exists for a connected account.
    async fn read_for(
        &self,
        account: Option<Address>,
        call: impl FnOnce(Address) -> ContractCall,
    ) -> Option<u128> {
        match account {
            Some(account) => self.read(call(account)).await,
            None => None,
        }
    }
}

#[async_trait]
impl VaultServiceTrait for VaultService {
    async fn fetch_readings(&self, account: Option<Address>) -> VaultReadings {
        let vault = self.contracts.vault;
        let asset_token = self.contracts.asset_token;

        let (
            total_assets,
            total_supply,
            last_recorded_assets,
            user_asset_balance,
            user_shares,
            allowance,
        ) = futures::join!(
            self.read(ContractCall::new(vault, ContractFunction::TotalAssets)),
            self.read(ContractCall::new(vault, ContractFunction::TotalSupply)),
            self.read(ContractCall::new(vault, ContractFunction::LastRecordedAssets)),
            self.read_for(account, |owner| {
                ContractCall::with_args(asset_token, ContractFunction::BalanceOf, vec![owner])
            }),
            self.read_for(account, |owner| {
                ContractCall::with_args(vault, ContractFunction::BalanceOf, vec![owner])
            }),
            self.read_for(account, |owner| {
                ContractCall::with_args(
                    asset_token,
                    ContractFunction::Allowance,
                    vec![owner, vault],
                )
            }),
        );

        let readings = VaultReadings {
            total_assets,
            total_supply,
            last_recorded_assets,
            user_shares,
            user_asset_balance,
            allowance,
        };
        debug!("Vault readings for {:?}: {:?}", account, readings);
        readings
    }

    async fn get_snapshot(&self, account: Option<Address>) -> VaultSnapshot {
        let readings = self.fetch_readings(account).await;
        derive_snapshot(&readings, account.is_some())
    }
}
