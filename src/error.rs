//! Error types.
//!
//! Each stage of an upload has its own error enum so `main` can decide
//! which hint to show. Everything converts into [`Error`].

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A required configuration value is missing.
///
/// Raised before any call into the secrets manager.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("private key not provided - check your environment variables")]
    MissingPrivateKey,

    #[error("rpcUrl not provided - check your environment variables")]
    MissingRpcUrl,
}

/// The gateways refused the upload.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Failed to upload secrets: {0}")]
    Rejected(String),
}

/// Failures talking to the secrets-manager bridge.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("secrets manager bridge not found: {0}")]
    NotFound(String),

    #[error("secrets manager not initialized")]
    NotInitialized,

    #[error("failed to spawn secrets manager bridge: {0}")]
    Spawn(String),

    #[error("secrets manager {op} failed: {message}")]
    Failed { op: &'static str, message: String },

    #[error("invalid response from secrets manager {op}: {message}")]
    InvalidResponse { op: &'static str, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
