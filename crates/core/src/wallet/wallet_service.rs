//! In-memory wallet session.

use std::sync::{PoisonError, RwLock};

use log::info;
use octant_chain::Address;

use super::wallet_model::WalletStatus;
use super::wallet_traits::WalletConnector;
use crate::errors::{Result, ValidationError};

/// Session-scoped [`WalletConnector`]: remembers one connected account for
/// the lifetime of the process and nothing more.
#[derive(Debug, Default)]
pub struct SessionWallet {
    account: RwLock<Option<Address>>,
}

impl SessionWallet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalletConnector for SessionWallet {
    fn connect(&self, address: Address) -> Result<WalletStatus> {
        if address == Address::ZERO {
            return Err(ValidationError::InvalidAddress(
                "the zero address cannot be connected".to_string(),
            )
            .into());
        }

        let mut account = self.account.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = account.replace(address) {
            if previous != address {
                info!("Wallet switched from {} to {}", previous, address);
            }
        } else {
            info!("Wallet connected: {}", address);
        }
        Ok(WalletStatus::Connected { address })
    }

    fn disconnect(&self) -> Result<WalletStatus> {
        let mut account = self.account.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = account.take() {
            info!("Wallet disconnected: {}", previous);
        }
        Ok(WalletStatus::Disconnected)
    }

    fn status(&self) -> WalletStatus {
        match *self.account.read().unwrap_or_else(PoisonError::into_inner) {
            Some(address) => WalletStatus::Connected { address },
            None => WalletStatus::Disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::WalletView;

    fn account() -> Address {
        "0x00000000000000000000000000000000000000aa".parse().unwrap()
    }

    #[test]
    fn test_starts_disconnected() {
        let wallet = SessionWallet::new();
        assert_eq!(wallet.status(), WalletStatus::Disconnected);
        assert!(wallet.status().address().is_none());
    }

    #[test]
    fn test_connect_then_disconnect() {
        let wallet = SessionWallet::new();
        let status = wallet.connect(account()).unwrap();
        assert!(status.is_connected());
        assert_eq!(wallet.status().address(), Some(account()));

        wallet.disconnect().unwrap();
        assert_eq!(wallet.status(), WalletStatus::Disconnected);
        // second disconnect is a no-op
        assert_eq!(wallet.disconnect().unwrap(), WalletStatus::Disconnected);
    }

    #[test]
    fn test_connect_replaces_previous_account() {
        let wallet = SessionWallet::new();
        let other: Address = "0x00000000000000000000000000000000000000bb".parse().unwrap();
        wallet.connect(account()).unwrap();
        wallet.connect(other).unwrap();
        assert_eq!(wallet.status().address(), Some(other));
    }

    #[test]
    fn test_zero_address_rejected() {
        let wallet = SessionWallet::new();
        assert!(wallet.connect(Address::ZERO).is_err());
        assert!(!wallet.status().is_connected());
    }

    #[test]
    fn test_wallet_view_labels() {
        let view = WalletView::from(WalletStatus::Disconnected);
        assert_eq!(view.button_label, "Connect Wallet");
        assert!(view.short_address.is_none());

        let view = WalletView::from(WalletStatus::Connected { address: account() });
        assert_eq!(view.button_label, "Disconnect");
        assert_eq!(view.badge.as_deref(), Some("Connected"));
        assert_eq!(view.short_address.as_deref(), Some("0x0000...00aa"));
    }
}
