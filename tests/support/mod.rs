//! Test support utilities for upload-secrets integration tests.
//!
//! Every test gets a temp directory holding a fake secrets manager bridge.
//! The bridge logs each operation it receives and saves the request body,
//! so tests can see exactly what crossed the process boundary.

#![allow(dead_code)]

pub mod assertions;
pub mod bridge;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use tempfile::TempDir;

/// A private key that only exists in tests.
pub const TEST_PRIVATE_KEY: &str =
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const TEST_RPC_URL: &str = "https://sepolia.rpc.test";

/// Test environment with an isolated temp directory and fake bridge.
///
/// No process-global state is mutated; the child process gets its
/// environment through `Command::env`.
pub struct Test {
    /// Holds the bridge script and everything it records
    pub dir: TempDir,
}

impl Test {
    /// Create an environment whose bridge accepts uploads as version 3.
    pub fn new() -> Self {
        let t = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        t.install_bridge();
        t.upload_responds(r#"{"success":true,"version":"3"}"#);
        t
    }
}
