//! upload-secrets - Encrypt secrets and host them on a Functions DON.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use upload_secrets::cli::{execute, output, Cli};
use upload_secrets::core::constants;
use upload_secrets::error::{ClientError, ConfigError, Error};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors share the exit code of every other failure
                let rendered = e.to_string();
                output::error(rendered.trim_start_matches("error: ").trim_end());
                std::process::exit(1);
            }
        },
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("upload_secrets=debug")
        } else {
            EnvFilter::new("upload_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute() {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingPrivateKey) => Some("export PRIVATE_KEY=0x..."),
            Error::Config(ConfigError::MissingRpcUrl) => Some("export SEPOLIA_RPC_URL=https://..."),
            Error::Client(ClientError::NotFound(_)) => {
                Some("set UPLOAD_SECRETS_BRIDGE to the secrets manager bridge executable")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
