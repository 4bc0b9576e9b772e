//! Contract view functions, calldata encoding and return decoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::errors::ChainError;

/// View functions the dashboard reads from the vault and its asset token.
///
/// Selectors are the first four bytes of the Keccak-256 hash of
/// [`signature`](Self::signature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractFunction {
    TotalAssets,
    TotalSupply,
    LastRecordedAssets,
    BalanceOf,
    Allowance,
}

impl ContractFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TotalAssets => "totalAssets",
            Self::TotalSupply => "totalSupply",
            Self::LastRecordedAssets => "lastRecordedAssets",
            Self::BalanceOf => "balanceOf",
            Self::Allowance => "allowance",
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            Self::TotalAssets => "totalAssets()",
            Self::TotalSupply => "totalSupply()",
            Self::LastRecordedAssets => "lastRecordedAssets()",
            Self::BalanceOf => "balanceOf(address)",
            Self::Allowance => "allowance(address,address)",
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            Self::TotalAssets => [0x01, 0xe1, 0xd1, 0x14],
            Self::TotalSupply => [0x18, 0x16, 0x0d, 0xdd],
            Self::LastRecordedAssets => [0x2a, 0x7c, 0x1b, 0x5c],
            Self::BalanceOf => [0x70, 0xa0, 0x82, 0x31],
            Self::Allowance => [0xdd, 0x62, 0xed, 0x3e],
        }
    }

    /// Number of address arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::TotalAssets | Self::TotalSupply | Self::LastRecordedAssets => 0,
            Self::BalanceOf => 1,
            Self::Allowance => 2,
        }
    }
}

impl fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A read of `function` on the contract at `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub function: ContractFunction,
    pub args: Vec<Address>,
}

impl ContractCall {
    pub fn new(to: Address, function: ContractFunction) -> Self {
        Self {
            to,
            function,
            args: Vec::new(),
        }
    }

    pub fn with_args(to: Address, function: ContractFunction, args: Vec<Address>) -> Self {
        Self { to, function, args }
    }

    /// ABI calldata: selector followed by one 32-byte word per argument.
    pub fn calldata(&self) -> Result<Vec<u8>, ChainError> {
        if self.args.len() != self.function.arity() {
            return Err(ChainError::ArgumentMismatch {
                function: self.function.signature(),
                expected: self.function.arity(),
                actual: self.args.len(),
            });
        }

        let mut data = Vec::with_capacity(4 + 32 * self.args.len());
        data.extend_from_slice(&self.function.selector());
        for arg in &self.args {
            data.extend_from_slice(&arg.to_word());
        }
        Ok(data)
    }

    /// Calldata as a `0x`-prefixed hex string, the form JSON-RPC expects.
    pub fn calldata_hex(&self) -> Result<String, ChainError> {
        Ok(format!("0x{}", hex::encode(self.calldata()?)))
    }
}

/// Decodes a `uint256` return word into a `u128`.
///
/// Leading zero bytes are ignored, so both full 32-byte words and shorter
/// quantities (as returned by `eth_chainId`) are accepted.
pub fn decode_uint(raw: &str) -> Result<u128, ChainError> {
    let digits = raw
        .trim()
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::InvalidResponse(format!("missing 0x prefix: {}", raw)))?;

    if digits.is_empty() {
        return Err(ChainError::InvalidResponse(
            "empty return data (is the target a contract?)".to_string(),
        ));
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    if significant.len() > 32 {
        return Err(ChainError::ValueOverflow(raw.to_string()));
    }

    u128::from_str_radix(significant, 16)
        .map_err(|e| ChainError::InvalidResponse(format!("{}: {}", raw, e)))
}
