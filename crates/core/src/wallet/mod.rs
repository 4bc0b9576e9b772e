//! Wallet module - connection state for the dashboard session.

mod wallet_model;
mod wallet_service;
mod wallet_traits;

pub use wallet_model::{ConnectWallet, WalletStatus, WalletView};
pub use wallet_service::SessionWallet;
pub use wallet_traits::WalletConnector;
