//! Unit tests for vault metric derivation.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ONE_SHARE: u128 = 1_000_000_000_000_000_000;

fn readings(total_assets: u128, total_supply: u128, last_recorded: u128) -> VaultReadings {
    VaultReadings {
        total_assets: Some(total_assets),
        total_supply: Some(total_supply),
        last_recorded_assets: Some(last_recorded),
        ..Default::default()
    }
}

#[test]
fn test_yield_above_watermark() {
    let snapshot = derive_snapshot(&readings(1_050_000, ONE_SHARE, 1_000_000), false);
    assert_eq!(snapshot.total_assets, dec!(1.05));
    assert_eq!(snapshot.last_recorded_assets, dec!(1.00));
    assert_eq!(snapshot.available_yield, dec!(0.05));
}

#[test]
fn test_yield_never_negative_below_watermark() {
    let snapshot = derive_snapshot(&readings(900_000, ONE_SHARE, 1_000_000), false);
    assert_eq!(snapshot.available_yield, Decimal::ZERO);
}

#[test]
fn test_zero_supply_share_price_is_one() {
    let snapshot = derive_snapshot(&readings(5_000_000, 0, 0), false);
    assert_eq!(snapshot.share_price, Decimal::ONE);
}

#[test]
fn test_unknown_supply_share_price_is_one() {
    let input = VaultReadings {
        total_assets: Some(5_000_000),
        ..Default::default()
    };
    assert_eq!(derive_snapshot(&input, false).share_price, Decimal::ONE);
}

#[test]
fn test_share_price_from_assets_and_supply() {
    // 5 USDC backing 4 shares
    let snapshot = derive_snapshot(&readings(5_000_000, 4 * ONE_SHARE, 0), false);
    assert_eq!(snapshot.share_price, dec!(1.25));
}

#[test]
fn test_user_position_value() {
    let input = VaultReadings {
        user_shares: Some(2 * ONE_SHARE),
        user_asset_balance: Some(12_345_670),
        allowance: Some(1_000_000),
        ..readings(5_000_000, 4 * ONE_SHARE, 4_000_000)
    };
    let snapshot = derive_snapshot(&input, true);
    assert_eq!(snapshot.user_shares, dec!(2));
    assert_eq!(snapshot.user_asset_value, dec!(2.5));
    assert_eq!(snapshot.user_asset_balance, dec!(12.34567));
    assert_eq!(snapshot.allowance, dec!(1));
    assert!(snapshot.is_connected);
}

#[test]
fn test_no_shares_no_position_value() {
    let snapshot = derive_snapshot(&readings(5_000_000, 4 * ONE_SHARE, 0), true);
    assert_eq!(snapshot.user_asset_value, Decimal::ZERO);
}

#[test]
fn test_missing_readings_degrade_to_zero() {
    let snapshot = derive_snapshot(&VaultReadings::default(), false);
    assert_eq!(snapshot.total_assets, Decimal::ZERO);
    assert_eq!(snapshot.available_yield, Decimal::ZERO);
    assert_eq!(snapshot.share_price, Decimal::ONE);
    assert_eq!(snapshot.user_asset_value, Decimal::ZERO);
    assert_eq!(snapshot, VaultSnapshot::default());
}

#[test]
fn test_dust_supply_saturates_instead_of_panicking() {
    // 10^12 USDC against a single wei of shares overflows Decimal
    let snapshot = derive_snapshot(&readings(10u128.pow(18), 1, 0), false);
    assert_eq!(snapshot.share_price, Decimal::MAX);
}

#[test]
fn test_snapshot_serializes_camel_case_numbers() {
    let snapshot = derive_snapshot(&readings(1_050_000, ONE_SHARE, 1_000_000), false);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["availableYield"], serde_json::json!(0.05));
    assert_eq!(json["sharePrice"], serde_json::json!(1.05));
    assert_eq!(json["isConnected"], serde_json::json!(false));
}
