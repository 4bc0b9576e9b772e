pub mod format;
pub mod units;
