//! Bridge secrets manager backend.
//!
//! Delegates every operation to an external helper executable that wraps the
//! Functions secrets SDK. One process is spawned per operation:
//!
//! ```text
//! functions-toolkit-bridge initialize   # stdin: {"context": {...}}
//! functions-toolkit-bridge encrypt      # stdin: {"context": {...}, "secrets": {...}}
//! functions-toolkit-bridge upload       # stdin: {"context": {...}, "encryptedSecretsHexstring": ...}
//! ```
//!
//! The reply is a single JSON document on stdout. A non-zero exit status is a
//! failure, and stderr becomes the error message.
//!
//! ## Requirements
//!
//! - The bridge executable must be on `PATH`, or set `UPLOAD_SECRETS_BRIDGE`
//!   to its location
//! - The private key is only ever written to the child's stdin, never argv

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{EncryptedSecrets, SecretsManager, UploadRequest, UploadResult};
use crate::core::secrets::SecretBundle;
use crate::core::signer::Signer;
use crate::error::{ClientError, Result};

/// Secrets manager backed by an external bridge process.
#[derive(Debug)]
pub struct BridgeManager {
    program: String,
    signer: Signer,
    functions_router_address: String,
    don_id: String,
    initialized: bool,
}

/// Identity and network scope sent with every request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Context<'a> {
    rpc_url: &'a str,
    private_key: &'a str,
    functions_router_address: &'a str,
    don_id: &'a str,
}

#[derive(Serialize)]
struct Request<'a, T: Serialize> {
    context: Context<'a>,
    #[serde(flatten)]
    body: &'a T,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct EncryptBody<'a> {
    secrets: &'a SecretBundle,
}

#[derive(Deserialize)]
struct Ack {}

impl BridgeManager {
    /// Create a manager scoped to a router contract and DON.
    pub fn new(
        program: impl Into<String>,
        signer: Signer,
        functions_router_address: impl Into<String>,
        don_id: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            signer,
            functions_router_address: functions_router_address.into(),
            don_id: don_id.into(),
            initialized: false,
        }
    }

    /// Resolve the bridge executable on PATH (or as a direct path).
    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            ClientError::NotFound(format!(
                "{} ({}). Install it or set UPLOAD_SECRETS_BRIDGE",
                self.program, e
            ))
            .into()
        })
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ClientError::NotInitialized.into())
        }
    }

    /// Run one bridge operation and decode its reply.
    fn call<B, R>(&self, op: &'static str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let program = self.locate()?;

        let request = Request {
            context: Context {
                rpc_url: self.signer.provider().url(),
                private_key: self.signer.private_key(),
                functions_router_address: &self.functions_router_address,
                don_id: &self.don_id,
            },
            body,
        };
        let payload = Zeroizing::new(serde_json::to_vec(&request).map_err(|e| {
            ClientError::Failed {
                op,
                message: format!("failed to serialize request: {}", e),
            }
        })?);

        debug!(op, program = %program.display(), "calling secrets manager bridge");

        let mut child = Command::new(&program)
            .arg(op)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ClientError::Spawn(format!("{}: {}", program.display(), e)))?;

        // Write request to stdin; dropping the handle closes the pipe.
        // A bridge that exits without reading is judged by its exit status.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(&payload) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    drop(stdin);
                    reap(&mut child);
                    return Err(ClientError::Failed {
                        op,
                        message: format!("failed to write request: {}", e),
                    }
                    .into());
                }
            }
        }

        let output = child.wait_with_output().map_err(ClientError::from)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("bridge exited with {}", output.status),
                s => s.to_string(),
            };
            return Err(ClientError::Failed { op, message }.into());
        }

        trace!(op, reply_len = output.stdout.len(), "bridge replied");

        serde_json::from_slice(&output.stdout).map_err(|e| {
            ClientError::InvalidResponse {
                op,
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Kill a bridge we are abandoning and wait for it, so no zombie is left.
fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        trace!(error = %e, "bridge already exited");
    }
    if let Err(e) = child.wait() {
        debug!(error = %e, "failed to wait for bridge");
    }
}

impl SecretsManager for BridgeManager {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn initialize(&mut self) -> Result<()> {
        let _: Ack = self.call("initialize", &Empty {})?;
        self.initialized = true;
        debug!(don_id = %self.don_id, "secrets manager initialized");
        Ok(())
    }

    fn encrypt_secrets(&self, secrets: &SecretBundle) -> Result<EncryptedSecrets> {
        self.ensure_initialized()?;
        let encrypted: EncryptedSecrets = self.call("encrypt", &EncryptBody { secrets })?;

        if !encrypted.is_hexstring() {
            return Err(ClientError::InvalidResponse {
                op: "encrypt",
                message: "encryptedSecrets is not a 0x-prefixed hex string".to_string(),
            }
            .into());
        }
        Ok(encrypted)
    }

    fn upload_encrypted_secrets_to_don(&self, request: &UploadRequest) -> Result<UploadResult> {
        self.ensure_initialized()?;
        self.call("upload", request)
    }
}
