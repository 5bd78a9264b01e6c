//! Core library components.
//!
//! Configuration, the secret bundle, the signing identity, the secrets
//! manager seam and the upload procedure that ties them together.

pub mod config;
pub mod constants;
pub mod manager;
pub mod secrets;
pub mod signer;
pub mod uploader;
