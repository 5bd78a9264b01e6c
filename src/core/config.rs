//! Run configuration.
//!
//! Built once at startup from the process environment and validated before
//! anything talks to the network. Network parameters are fixed; see
//! [`constants`](crate::core::constants).

use std::fmt;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Everything a single upload needs, immutable for the life of the run.
pub struct Config {
    /// Signer private key, wiped on drop
    pub private_key: Zeroizing<String>,
    /// JSON-RPC endpoint of the target chain
    pub rpc_url: String,
    /// Functions router contract address
    pub router_address: String,
    /// DON identifier
    pub don_id: String,
    /// Gateways receiving the encrypted secrets
    pub gateway_urls: Vec<String>,
    /// DON storage slot
    pub slot_id: u32,
    /// Expiration of the uploaded secrets, in minutes
    pub minutes_until_expiration: u32,
    /// Secrets manager bridge executable
    pub bridge: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lossy)
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// An empty value counts as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPrivateKey` if `PRIVATE_KEY` is unset,
    /// then `ConfigError::MissingRpcUrl` if `SEPOLIA_RPC_URL` is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let private_key = required(&lookup, constants::ENV_PRIVATE_KEY)
            .ok_or(ConfigError::MissingPrivateKey)?;
        let private_key = Zeroizing::new(private_key);

        let rpc_url =
            required(&lookup, constants::ENV_RPC_URL).ok_or(ConfigError::MissingRpcUrl)?;

        let bridge = required(&lookup, constants::ENV_BRIDGE)
            .unwrap_or_else(|| constants::DEFAULT_BRIDGE.to_string());

        debug!(rpc_url = %rpc_url, bridge = %bridge, "configuration loaded");

        Ok(Self {
            private_key,
            rpc_url,
            router_address: constants::ROUTER_ADDRESS.to_string(),
            don_id: constants::DON_ID.to_string(),
            gateway_urls: constants::GATEWAY_URLS
                .iter()
                .map(|u| u.to_string())
                .collect(),
            slot_id: constants::SLOT_ID,
            minutes_until_expiration: constants::MINUTES_UNTIL_EXPIRATION,
            bridge,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("router_address", &self.router_address)
            .field("don_id", &self.don_id)
            .field("gateway_urls", &self.gateway_urls)
            .field("slot_id", &self.slot_id)
            .field("minutes_until_expiration", &self.minutes_until_expiration)
            .field("bridge", &self.bridge)
            .finish()
    }
}

/// Read an environment variable, replacing invalid UTF-8 with U+FFFD.
///
/// A variable that is set is never reported as missing just because its
/// bytes are not UTF-8.
pub fn env_lossy(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

fn required<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.is_empty())
}
