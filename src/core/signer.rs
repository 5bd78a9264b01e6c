//! Signing identity used to authorize gateway uploads.
//!
//! Key handling and signing happen inside the secrets manager; these types
//! only carry the key material and endpoint to it.

use std::fmt;
use zeroize::Zeroizing;

/// A JSON-RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    url: String,
}

impl Provider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// An unconnected private key.
pub struct Wallet {
    private_key: Zeroizing<String>,
}

impl Wallet {
    pub fn new(private_key: Zeroizing<String>) -> Self {
        Self { private_key }
    }

    /// Bind the wallet to a provider, producing a signer.
    pub fn connect(self, provider: Provider) -> Signer {
        Signer {
            private_key: self.private_key,
            provider,
        }
    }
}

/// A private key bound to the provider it signs for.
pub struct Signer {
    private_key: Zeroizing<String>,
    provider: Provider,
}

impl Signer {
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("private_key", &"<redacted>")
            .field("provider", &self.provider)
            .finish()
    }
}
