//! Data types shared by chain readers.

mod address;
mod call;

pub use address::Address;
pub use call::{decode_uint, ContractCall, ContractFunction};
