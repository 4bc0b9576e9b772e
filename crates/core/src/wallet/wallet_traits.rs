use octant_chain::Address;

use super::wallet_model::WalletStatus;
use crate::errors::Result;

/// Capability provider for wallet connection state.
///
/// The dashboard only ever asks who is connected; signing and transaction
/// submission are not part of this interface.
pub trait WalletConnector: Send + Sync {
    /// Connects `address`, replacing any previously connected account.
    fn connect(&self, address: Address) -> Result<WalletStatus>;

    /// Disconnects the current account. Disconnecting twice is not an error.
    fn disconnect(&self) -> Result<WalletStatus>;

    fn status(&self) -> WalletStatus;
}
