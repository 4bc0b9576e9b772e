//! Pure derivation of display figures from raw vault readings.

use log::warn;
use rust_decimal::Decimal;

use super::vault_model::{VaultReadings, VaultSnapshot};
use crate::constants::{ASSET_DECIMALS, SHARE_DECIMALS};
use crate::utils::units::from_base_units;

fn asset_amount(raw: Option<u128>) -> Decimal {
    from_base_units(raw.unwrap_or(0), ASSET_DECIMALS)
}

fn share_amount(raw: Option<u128>) -> Decimal {
    from_base_units(raw.unwrap_or(0), SHARE_DECIMALS)
}

/// Yield accrued above the watermark. Never negative: a loss since the last
/// harvest shows as zero yield.
pub fn available_yield(total_assets: Decimal, last_recorded_assets: Decimal) -> Decimal {
    (total_assets - last_recorded_assets).max(Decimal::ZERO)
}

/// Assets per share.
///
/// Falls back to exactly 1 unless both supply and assets are known and
/// non-zero. A quotient too large for `Decimal` saturates.
pub fn share_price(total_assets: Option<u128>, total_supply: Option<u128>) -> Decimal {
    match (total_assets, total_supply) {
        (Some(assets), Some(supply)) if assets > 0 && supply > 0 => {
            let assets = from_base_units(assets, ASSET_DECIMALS);
            let supply = from_base_units(supply, SHARE_DECIMALS);
            assets.checked_div(supply).unwrap_or_else(|| {
                warn!("Share price {} / {} overflows; saturating", assets, supply);
                Decimal::MAX
            })
        }
        _ => Decimal::ONE,
    }
}

/// Builds the snapshot shown to the user.
///
/// Asset amounts use 6 decimals, share amounts 18. Missing readings count as
/// zero, so the result is always well-formed.
pub fn derive_snapshot(readings: &VaultReadings, is_connected: bool) -> VaultSnapshot {
    let total_assets = asset_amount(readings.total_assets);
    let last_recorded_assets = asset_amount(readings.last_recorded_assets);
    let share_price = share_price(readings.total_assets, readings.total_supply);
    let user_shares = share_amount(readings.user_shares);

    VaultSnapshot {
        total_assets,
        last_recorded_assets,
        available_yield: available_yield(total_assets, last_recorded_assets),
        share_price,
        user_shares,
        user_asset_balance: asset_amount(readings.user_asset_balance),
        user_asset_value: user_shares.saturating_mul(share_price),
        allowance: asset_amount(readings.allowance),
        is_connected,
    }
}
