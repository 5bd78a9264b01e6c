//! upload-secrets - Encrypt secrets and host them on a Functions DON.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # Terminal output helpers
//! ├── core/             # Core library components
//! │   ├── config        # Environment-backed run configuration
//! │   ├── constants     # Router, DON id, gateways, slot, expiration
//! │   ├── secrets       # Secret bundle
//! │   ├── signer        # Provider, wallet and signer
//! │   ├── manager/      # Secrets manager backends
//! │   │   ├── mod       # SecretsManager trait
//! │   │   └── bridge    # External bridge process
//! │   └── uploader      # initialize → encrypt → upload
//! └── error             # Error types
//! ```

pub mod cli;
pub mod core;
pub mod error;
