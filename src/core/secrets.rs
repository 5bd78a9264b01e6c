//! The secret bundle handed to the secrets manager for encryption.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::{config, constants};

/// Secret name to secret value, as the DON-side code will see it.
///
/// Always holds one entry per name in [`constants::SECRET_SOURCES`]. A value
/// whose environment variable is unset is kept as an empty string rather
/// than dropped, so the key set never depends on the environment.
pub struct SecretBundle {
    entries: BTreeMap<String, Zeroizing<String>>,
}

impl SecretBundle {
    /// Read the secret values from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(config::env_lossy)
    }

    /// Read the secret values through an arbitrary variable lookup.
    ///
    /// Values are not validated.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let entries: BTreeMap<_, _> = constants::SECRET_SOURCES
            .iter()
            .map(|&(name, var)| {
                let value = lookup(var).unwrap_or_default();
                if value.is_empty() {
                    debug!(secret = name, env = var, "secret value not set");
                }
                (name.to_string(), Zeroizing::new(value))
            })
            .collect();

        Self { entries }
    }

    /// Number of secrets in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Secret names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|v| v.as_str())
    }
}

impl Serialize for SecretBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v.as_str())))
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
