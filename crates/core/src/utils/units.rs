//! Fixed-point unit conversion.

use rust_decimal::Decimal;

/// Converts a raw integer amount expressed in `decimals` fractional digits
/// into a `Decimal`, e.g. `from_base_units(1_050_000, 6) == 1.05`.
///
/// `Decimal` holds a 96-bit mantissa and at most 28 fractional digits.
/// Larger inputs lose their least significant fractional digits (truncated);
/// integer parts beyond the mantissa saturate at `Decimal::MAX`.
pub fn from_base_units(raw: u128, decimals: u32) -> Decimal {
    let mut mantissa = raw;
    let mut scale = decimals;

    loop {
        if let Ok(signed) = i128::try_from(mantissa) {
            if let Ok(value) = Decimal::try_from_i128_with_scale(signed, scale) {
                return value.normalize();
            }
        }
        if scale == 0 {
            return Decimal::MAX;
        }
        mantissa /= 10;
        scale -= 1;
    }
}
