//! Octant Core - vault metrics, wallet session and dashboard state.
//!
//! This crate contains the logic behind the Octant vault dashboard.
//! It is transport-agnostic: chain access goes through the
//! [`octant_chain::ChainReader`] trait, and nothing here is persisted.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod network;
pub mod utils;
pub mod vault;
pub mod wallet;

// Re-export the chain types every consumer needs
pub use octant_chain::{Address, ChainReader};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
