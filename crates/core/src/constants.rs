/// Decimals of the vault's underlying asset (USDC)
pub const ASSET_DECIMALS: u32 = 6;

/// Decimals of vault shares
pub const SHARE_DECIMALS: u32 = 18;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Symbol of the underlying asset, used in labels
pub const ASSET_SYMBOL: &str = "USDC";

/// APY shown while a wallet is connected. There is no on-chain rate source
/// yet; this is the lending market's advertised estimate.
pub const ESTIMATED_APY_LABEL: &str = "~5.2%";

/// APY shown while no wallet is connected
pub const DISCONNECTED_APY_LABEL: &str = "0.00%";

/// Default vault refresh interval, roughly one mainnet block
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 12;
