//! Secrets manager abstraction.
//!
//! Encryption, the gateway protocol and signing all live behind the
//! [`SecretsManager`] trait. The uploader only sequences calls to it.
//!
//! ## Backends
//!
//! - **bridge**: Default. Drives an external helper executable that wraps the
//!   Functions secrets SDK, one process per operation.
//! - **mock**: Test only. Records every call and returns canned responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::secrets::SecretBundle;
use crate::error::Result;

pub mod bridge;

#[cfg(test)]
pub mod mock;

pub use bridge::BridgeManager;

/// Encrypts secret bundles and uploads them to DON gateways.
pub trait SecretsManager {
    /// Prepare the client, typically by fetching on-chain DON configuration.
    ///
    /// Must succeed before any other call.
    fn initialize(&mut self) -> Result<()>;

    /// Encrypt a bundle for the DON.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the manager is not initialized or
    /// encryption fails.
    fn encrypt_secrets(&self, secrets: &SecretBundle) -> Result<EncryptedSecrets>;

    /// Upload an encrypted payload to the gateways.
    ///
    /// A gateway refusal is reported through [`UploadResult::success`], not
    /// as an `Err`.
    fn upload_encrypted_secrets_to_don(&self, request: &UploadRequest) -> Result<UploadResult>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Output of [`SecretsManager::encrypt_secrets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedSecrets {
    /// `0x`-prefixed hex string
    pub encrypted_secrets: String,
}

impl EncryptedSecrets {
    /// Whether the payload is a non-empty `0x`-prefixed hex string.
    pub fn is_hexstring(&self) -> bool {
        match self.encrypted_secrets.strip_prefix("0x") {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }
}

/// Arguments to [`SecretsManager::upload_encrypted_secrets_to_don`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub encrypted_secrets_hexstring: String,
    pub gateway_urls: Vec<String>,
    pub slot_id: u32,
    pub minutes_until_expiration: u32,
}

/// Gateway verdict on an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Version of the stored secret set. Gateways report it as either a JSON
    /// number or a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub version: String,
}

impl UploadResult {
    pub fn succeeded(version: impl Into<String>) -> Self {
        Self {
            success: true,
            error_message: None,
            version: version.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            version: String::new(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Version::deserialize(deserializer)? {
        Version::Text(s) => s,
        Version::Number(n) => n.to_string(),
    })
}
