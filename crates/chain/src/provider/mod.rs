//! Chain reader abstraction and its implementations.

pub mod json_rpc;
mod traits;

pub use json_rpc::JsonRpcReader;
pub use traits::ChainReader;
