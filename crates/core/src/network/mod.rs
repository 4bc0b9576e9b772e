//! Network module - chain descriptor and contract registry.

mod network_model;

pub use network_model::{
    ContractEntry, ContractName, ContractRegistry, NativeCurrency, NetworkConfig,
    NetworkOverview,
};
