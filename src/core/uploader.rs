//! The upload procedure.
//!
//! Strictly linear: initialize the manager, encrypt the bundle, upload it to
//! the fixed slot, check the verdict. Any failing step aborts the run.

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::core::config::Config;
use crate::core::manager::{BridgeManager, SecretsManager, UploadRequest, UploadResult};
use crate::core::secrets::SecretBundle;
use crate::core::signer::{Provider, Wallet};
use crate::error::{Result, UploadError};

/// A successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Raw gateway response
    pub result: UploadResult,
    /// DON-hosted secrets version, for referencing the slot from requests.
    /// `None` when the gateway's version string has no leading integer;
    /// the raw string is still in `result.version`.
    pub version: Option<u64>,
    pub slot_id: u32,
}

/// Build the production secrets manager for a configuration.
///
/// Connects a signer to the configured RPC endpoint and scopes the manager to
/// the router contract and DON. Performs no I/O.
pub fn connect(config: &Config) -> BridgeManager {
    let provider = Provider::new(config.rpc_url.as_str());
    let signer = Wallet::new(config.private_key.clone()).connect(provider);

    BridgeManager::new(
        config.bridge.as_str(),
        signer,
        config.router_address.as_str(),
        config.don_id.as_str(),
    )
}

/// Encrypt `secrets` and upload them to the DON.
///
/// # Errors
///
/// - `ClientError` from any manager call, unchanged
/// - `UploadError::Rejected` when the gateways report failure
///
/// Once the gateways accept the upload the secrets are stored, so an
/// unreadable version is logged, not returned as an error.
pub fn upload<M: SecretsManager>(
    config: &Config,
    manager: &mut M,
    secrets: &SecretBundle,
) -> Result<UploadOutcome> {
    debug!(backend = manager.name(), don_id = %config.don_id, "initializing secrets manager");
    manager.initialize()?;

    let encrypted = manager.encrypt_secrets(secrets)?;
    debug!(
        secrets = secrets.len(),
        payload_len = encrypted.encrypted_secrets.len(),
        fingerprint = %fingerprint(&encrypted.encrypted_secrets),
        "secrets encrypted"
    );

    let request = UploadRequest {
        encrypted_secrets_hexstring: encrypted.encrypted_secrets,
        gateway_urls: config.gateway_urls.clone(),
        slot_id: config.slot_id,
        minutes_until_expiration: config.minutes_until_expiration,
    };
    let result = manager.upload_encrypted_secrets_to_don(&request)?;

    if !result.success {
        let message = result.error_message.unwrap_or_default();
        return Err(UploadError::Rejected(message).into());
    }

    let version = parse_version(&result.version);
    match version {
        Some(version) => info!(version, slot_id = request.slot_id, "secrets uploaded"),
        None => warn!(
            raw = %result.version,
            slot_id = request.slot_id,
            "secrets uploaded but the reported version is not an integer"
        ),
    }

    Ok(UploadOutcome {
        result,
        version,
        slot_id: request.slot_id,
    })
}

/// Parse the leading integer of a version string.
///
/// Surrounding whitespace and trailing garbage are ignored ("12abc" is 12).
/// Returns `None` for no leading digits or a value beyond `u64`.
fn parse_version(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end].parse().ok()
}

/// Short SHA-256 fingerprint of an encrypted payload for logs.
fn fingerprint(payload: &str) -> String {
    Sha256::digest(payload.as_bytes())
        .iter()
        .take(8)
        .map(|b| format!("{:02x}", b))
        .collect()
}
