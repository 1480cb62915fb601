//! Library error type

use std::path::PathBuf;
use thiserror::Error;

use crate::checkout::ValidationErrors;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The platform opener could not be started. Whatever happens after a
    /// successful spawn is never observed.
    #[error("failed to launch {opener} for {url}: {source}")]
    Launch {
        opener: String,
        url: String,
        source: std::io::Error,
    },

    #[error("browser refused to open {url}: {reason}")]
    BrowserBlocked { url: String, reason: String },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid checkout request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("checkout form is invalid: {0}")]
    Validation(ValidationErrors),
}
