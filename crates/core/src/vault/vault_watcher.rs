//! Periodic vault refresh published to subscribers.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::vault_model::VaultSnapshot;
use super::vault_traits::VaultServiceTrait;
use crate::wallet::WalletConnector;

/// Polls the vault for the currently connected account and publishes every
/// fresh snapshot on a watch channel.
///
/// Subscribers only ever see the latest value; intermediate snapshots may be
/// skipped if a subscriber is slow.
pub struct VaultWatcher {
    vault_service: Arc<dyn VaultServiceTrait>,
    wallet: Arc<dyn WalletConnector>,
    interval: Duration,
    sender: watch::Sender<VaultSnapshot>,
    refresh_lock: Mutex<()>,
}

impl VaultWatcher {
    pub fn new(
        vault_service: Arc<dyn VaultServiceTrait>,
        wallet: Arc<dyn WalletConnector>,
        interval: Duration,
    ) -> Self {
        let (sender, _receiver) = watch::channel(VaultSnapshot::default());
        Self {
            vault_service,
            wallet,
            interval,
            sender,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<VaultSnapshot> {
        self.sender.subscribe()
    }

    /// Last published snapshot (zero-valued until the first refresh).
    pub fn latest(&self) -> VaultSnapshot {
        self.sender.borrow().clone()
    }

    /// Reads the vault now and publishes the result.
    ///
    /// Refreshes are serialized so a snapshot for a previous wallet account
    /// can never overwrite one for the current account.
    pub async fn refresh(&self) -> VaultSnapshot {
        let _guard = self.refresh_lock.lock().await;
        let account = self.wallet.status().address();
        let snapshot = self.vault_service.get_snapshot(account).await;
        debug!(
            "Publishing vault snapshot to {} subscriber(s)",
            self.sender.receiver_count()
        );
        self.sender.send_replace(snapshot.clone());
        snapshot
    }

    /// Starts the polling loop. The first refresh happens immediately.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("Vault watcher started ({}s interval)", self.interval.as_secs());
            // tokio panics on a zero period
            let mut ticker = interval(self.interval.max(Duration::from_millis(100)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.refresh().await;
            }
        })
    }
}
