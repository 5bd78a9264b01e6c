//! Constants used throughout upload-secrets.
//!
//! Centralizes the network parameters and environment variable names.

/// Functions router contract on Ethereum Sepolia.
///
/// Kept byte-for-byte as deployed; do not re-checksum.
pub const ROUTER_ADDRESS: &str = "0xb83e47c2bc239b3bf370bc41e1459a34b41238d0";

/// DON identifier for the Sepolia Functions network.
pub const DON_ID: &str = "fun-ethereum-sepolia-1";

/// Gateways that receive the encrypted secrets.
pub const GATEWAY_URLS: &[&str] = &[
    "https://01.functions-gateway.testnet.chain.link/",
    "https://02.functions-gateway.testnet.chain.link/",
];

/// DON storage slot the secrets are uploaded into.
pub const SLOT_ID: u32 = 0;

/// Minutes until the uploaded secrets expire (24 hours).
pub const MINUTES_UNTIL_EXPIRATION: u32 = 1440;

/// Signer private key.
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";

/// JSON-RPC endpoint for the target chain.
pub const ENV_RPC_URL: &str = "SEPOLIA_RPC_URL";

/// First uploaded secret.
pub const ENV_ALPACA_API_KEY: &str = "ALPACA_API_KEY";

/// Second uploaded secret.
pub const ENV_ALPACA_SECRET_KEY: &str = "ALPACA_SECRET_KEY";

/// Overrides the secrets manager bridge executable.
pub const ENV_BRIDGE: &str = "UPLOAD_SECRETS_BRIDGE";

/// Tracing filter directive.
pub const ENV_LOG: &str = "UPLOAD_SECRETS_LOG";

/// Bridge executable looked up on PATH when [`ENV_BRIDGE`] is unset.
pub const DEFAULT_BRIDGE: &str = "functions-toolkit-bridge";

/// Secret names as seen by the DON-side source code, paired with the
/// environment variable each value is read from.
pub const SECRET_SOURCES: &[(&str, &str)] = &[
    ("alpacaKey", ENV_ALPACA_API_KEY),
    ("alpacaSecret", ENV_ALPACA_SECRET_KEY),
];
