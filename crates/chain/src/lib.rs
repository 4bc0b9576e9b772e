//! Octant Chain Crate
//!
//! This crate provides transport-agnostic read access to on-chain contract
//! state for the Octant vault dashboard.
//!
//! # Overview
//!
//! The chain crate supports:
//! - Typed 20-byte addresses with hex parsing and display
//! - ABI calldata encoding for the handful of view functions the dashboard reads
//! - Decoding of `uint256` return words into native integers
//! - A JSON-RPC reader talking to any Ethereum node (or local fork)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> |  ContractCall    |  (address + function + args)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   ChainReader    |  (trait)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  JsonRpcReader   |  (eth_call over HTTP)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |      u128        |  (raw fixed-point value)
//!                          +------------------+
//! ```
//!
//! Reads are single-shot: no retries, batching or caching happen here.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ChainError;
pub use models::{decode_uint, Address, ContractCall, ContractFunction};
pub use provider::{ChainReader, JsonRpcReader};
