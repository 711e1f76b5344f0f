//! Error types for cart loading.

use std::path::PathBuf;

use till_core::ValidationError;

/// Failures while reading a cart file.
///
/// Checkout failures are not listed here: they are reported through the
/// output port and end the run with a failure exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read cart file {path}")]
    CartRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cart file {path} is not a valid cart")]
    CartParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cart file {path} contains an invalid item")]
    InvalidCart {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}
