//! Error types for the chain crate.

use thiserror::Error;

/// Errors that can occur while reading contract state.
///
/// None of these are retried by the crate itself. Callers that display
/// chain data treat any of them as "value not yet available".
#[derive(Error, Debug)]
pub enum ChainError {
    /// The node answered with a JSON-RPC error object
    /// (e.g. an execution revert).
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message reported by the node
        message: String,
    },

    /// The request to the node timed out.
    #[error("Timeout: {endpoint}")]
    Timeout {
        /// The endpoint that timed out
        endpoint: String,
    },

    /// The request could not be delivered or the HTTP exchange failed.
    #[error("Transport error: {endpoint} - {message}")]
    Transport {
        /// The endpoint that was called
        endpoint: String,
        /// Description of the failure
        message: String,
    },

    /// The node returned something that is not a well-formed answer.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A returned word does not fit into 128 bits.
    #[error("Value overflow: {0}")]
    ValueOverflow(String),

    /// An address string could not be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A call was built with the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArgumentMismatch {
        /// Solidity signature of the function
        function: &'static str,
        /// Number of arguments the function takes
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },
}
