use std::{net::SocketAddr, str::FromStr, time::Duration};

use octant_core::{
    constants::DEFAULT_REFRESH_INTERVAL_SECS,
    errors::Error as CoreError,
    network::{ContractName, ContractRegistry, NetworkConfig},
    Address,
};

const DEFAULT_RPC_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub network: NetworkConfig,
    pub contracts: ContractRegistry,
    pub refresh_interval: Duration,
    pub rpc_timeout: Duration,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            network: NetworkConfig::mainnet_fork(),
            contracts: ContractRegistry::default(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            rpc_timeout: Duration::from_millis(DEFAULT_RPC_TIMEOUT_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            cors_allow: vec!["*".to_string()],
            log_format: LogFormat::Text,
        }
    }
}

/// Reads raw configuration values by key; blank values count as unset.
struct Source<F> {
    lookup: F,
}

impl<F> Source<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, key: &str) -> Result<Option<T>, CoreError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.string(key)
            .map(|raw| {
                raw.parse::<T>().map_err(|e| {
                    CoreError::InvalidConfigValue(format!("{}='{}': {}", key, raw, e))
                })
            })
            .transpose()
    }
}

fn contract_env_key(name: ContractName) -> String {
    format!("OCTANT_{}_ADDRESS", name.as_str().to_ascii_uppercase())
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok()).map_err(anyhow::Error::from)
    }

    /// Builds the configuration from `lookup`, falling back to defaults for
    /// unset keys. Malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source { lookup };
        let mut config = Config::default();

        if let Some(listen_addr) = source.parse::<SocketAddr>("OCTANT_LISTEN_ADDR")? {
            config.listen_addr = listen_addr;
        }

        if let Some(rpc_url) = source.string("OCTANT_RPC_URL") {
            config.network.rpc_url = rpc_url;
        }
        if let Some(chain_id) = source.parse::<u64>("OCTANT_CHAIN_ID")? {
            config.network.chain_id = chain_id;
        }
        if let Some(name) = source.string("OCTANT_NETWORK_NAME") {
            config.network.name = name;
        }
        if let Some(explorer_url) = source.string("OCTANT_EXPLORER_URL") {
            config.network.explorer_url = explorer_url;
        }

        for name in ContractName::ALL {
            if let Some(address) = source.parse::<Address>(&contract_env_key(name))? {
                config.contracts.set(name, address);
            }
        }

        if let Some(secs) = source.parse::<u64>("OCTANT_REFRESH_INTERVAL_SECS")? {
            if secs == 0 {
                return Err(CoreError::InvalidConfigValue(
                    "OCTANT_REFRESH_INTERVAL_SECS must be positive".to_string(),
                ));
            }
            config.refresh_interval = Duration::from_secs(secs);
        }
        if let Some(ms) = source.parse::<u64>("OCTANT_RPC_TIMEOUT_MS")? {
            config.rpc_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = source.parse::<u64>("OCTANT_REQUEST_TIMEOUT_MS")? {
            config.request_timeout = Duration::from_millis(ms);
        }

        if let Some(origins) = source.string("OCTANT_CORS_ALLOW_ORIGINS") {
            config.cors_allow = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(format) = source.parse::<LogFormat>("OCTANT_LOG_FORMAT")? {
            config.log_format = format;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, CoreError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| values.get(key).cloned())
    }

    fn assert_invalid(pairs: &[(&str, &str)], key: &str) {
        match from_pairs(pairs) {
            Err(CoreError::InvalidConfigValue(message)) => {
                assert!(message.contains(key), "{}", message)
            }
            other => panic!("expected invalid {}, got {:?}", key, other),
        }
    }

    #[test]
    fn empty_source_yields_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.network, NetworkConfig::mainnet_fork());
        assert_eq!(config.contracts, ContractRegistry::default());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_pairs(&[
            ("OCTANT_LISTEN_ADDR", "127.0.0.1:9000"),
            ("OCTANT_RPC_URL", "http://node:8545"),
            ("OCTANT_CHAIN_ID", "31337"),
            (
                "OCTANT_VAULT_ADDRESS",
                "0x00000000000000000000000000000000000000aa",
            ),
            ("OCTANT_REFRESH_INTERVAL_SECS", "30"),
            ("OCTANT_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("OCTANT_LOG_FORMAT", "json"),
            ("OCTANT_NETWORK_NAME", "   "),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.network.rpc_url, "http://node:8545");
        assert_eq!(config.network.chain_id, 31337);
        assert_eq!(config.network.name, "Mainnet Fork (Morpho)");
        assert_eq!(
            config.contracts.vault.to_string(),
            "0x00000000000000000000000000000000000000aa"
        );
        assert_eq!(config.contracts.asset_token, ContractRegistry::default().asset_token);
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_invalid(&[("OCTANT_CHAIN_ID", "abc")], "OCTANT_CHAIN_ID");
        assert_invalid(&[("OCTANT_VAULT_ADDRESS", "0x1234")], "OCTANT_VAULT_ADDRESS");
        assert_invalid(&[("OCTANT_LISTEN_ADDR", "localhost")], "OCTANT_LISTEN_ADDR");
        assert_invalid(&[("OCTANT_RPC_TIMEOUT_MS", "-5")], "OCTANT_RPC_TIMEOUT_MS");
        assert_invalid(&[("OCTANT_LOG_FORMAT", "yaml")], "OCTANT_LOG_FORMAT");
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        assert_invalid(
            &[("OCTANT_REFRESH_INTERVAL_SECS", "0")],
            "OCTANT_REFRESH_INTERVAL_SECS",
        );
    }

    #[test]
    fn contract_keys_follow_contract_names() {
        assert_eq!(
            contract_env_key(ContractName::LendingAdapter),
            "OCTANT_LENDING_ADAPTER_ADDRESS"
        );
        assert_eq!(contract_env_key(ContractName::Vault), "OCTANT_VAULT_ADDRESS");
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn defaults_match_local_fork() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.network.chain_id, 1);
        assert_eq!(config.refresh_interval, Duration::from_secs(12));
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
    }
}
