//! Recording secrets manager for tests.
//!
//! Uses a trivial hex encoding; NOT encryption, just enough to check the
//! plumbing.

use std::cell::RefCell;

use super::{EncryptedSecrets, SecretsManager, UploadRequest, UploadResult};
use crate::core::secrets::SecretBundle;
use crate::error::{ClientError, Result};

/// A call observed by [`MockManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize,
    /// Secret names and values, in order
    Encrypt(Vec<(String, String)>),
    Upload(UploadRequest),
}

#[derive(Debug)]
pub struct MockManager {
    pub calls: RefCell<Vec<Call>>,
    pub result: UploadResult,
    pub fail_initialize: bool,
}

impl MockManager {
    /// A manager whose uploads return `result`.
    pub fn returning(result: UploadResult) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            result,
            fail_initialize: false,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl SecretsManager for MockManager {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn initialize(&mut self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Initialize);
        if self.fail_initialize {
            return Err(ClientError::Failed {
                op: "initialize",
                message: "mock initialize failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn encrypt_secrets(&self, secrets: &SecretBundle) -> Result<EncryptedSecrets> {
        let entries: Vec<(String, String)> = secrets
            .names()
            .map(|n| (n.to_string(), secrets.get(n).unwrap_or_default().to_string()))
            .collect();
        let hex: String = entries
            .iter()
            .flat_map(|(k, v)| k.bytes().chain(v.bytes()))
            .map(|b| format!("{:02x}", b))
            .collect();
        self.calls.borrow_mut().push(Call::Encrypt(entries));
        Ok(EncryptedSecrets {
            encrypted_secrets: format!("0x{}", hex),
        })
    }

    fn upload_encrypted_secrets_to_don(&self, request: &UploadRequest) -> Result<UploadResult> {
        self.calls.borrow_mut().push(Call::Upload(request.clone()));
        Ok(self.result.clone())
    }
}
