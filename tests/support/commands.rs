//! Command helper methods for Test.

use super::{Test, TEST_PRIVATE_KEY, TEST_RPC_URL};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an upload-secrets command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - the four input variables removed
    /// - UPLOAD_SECRETS_BRIDGE pointing at the fake bridge
    /// - NO_COLOR set so output is plain
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("upload-secrets").expect("failed to find upload-secrets binary");
        for var in [
            "PRIVATE_KEY",
            "SEPOLIA_RPC_URL",
            "ALPACA_API_KEY",
            "ALPACA_SECRET_KEY",
            "UPLOAD_SECRETS_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("UPLOAD_SECRETS_BRIDGE", self.bridge_path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command with both required variables and both secrets set.
    pub fn configured(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("PRIVATE_KEY", TEST_PRIVATE_KEY)
            .env("SEPOLIA_RPC_URL", TEST_RPC_URL)
            .env("ALPACA_API_KEY", "PKTEST123")
            .env("ALPACA_SECRET_KEY", "sktest456");
        cmd
    }

    /// Shortcut for a fully configured run.
    pub fn upload(&self) -> Output {
        self.configured()
            .output()
            .expect("failed to run upload-secrets")
    }
}
