//! Command-line interface.

pub mod output;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::secrets::SecretBundle;
use crate::core::uploader::{self, UploadOutcome};
use crate::error::Result;

/// Encrypt secrets from the environment and upload them to the Functions DON.
///
/// Reads PRIVATE_KEY, SEPOLIA_RPC_URL, ALPACA_API_KEY and ALPACA_SECRET_KEY.
#[derive(Parser, Debug)]
#[command(name = "upload-secrets", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run one upload using the process environment.
///
/// Configuration is validated before the secrets manager is created, so a
/// missing variable never reaches the network.
pub fn execute() -> Result<UploadOutcome> {
    let config = Config::from_env()?;
    let secrets = SecretBundle::from_env();
    debug!(?config, ?secrets, "starting upload");

    let mut manager = uploader::connect(&config);
    let outcome = uploader::upload(&config, &mut manager, &secrets)?;

    report(&outcome);
    Ok(outcome)
}

fn report(outcome: &UploadOutcome) {
    let response = serde_json::to_string(&outcome.result)
        .unwrap_or_else(|_| format!("{:?}", outcome.result));

    println!();
    output::success(&format!(
        "Secrets uploaded successfully! response: {}",
        response
    ));
    match outcome.version {
        Some(version) => output::kv("Secrets version:", version),
        None => output::kv(
            "Secrets version:",
            format!("{:?} (not an integer)", outcome.result.version),
        ),
    }
}
