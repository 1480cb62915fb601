pub mod checkout;
pub mod commands;
pub mod config;
pub mod error;
pub mod handoff;
pub mod wasm;

// Re-export WASM functions
pub use wasm::*;

pub use config::CheckoutConfig;
pub use error::CheckoutError;

/// Result from a command, separating the human-readable overview from the
/// JSON result
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Order overview and explanations
    pub output: String,
    /// Clean JSON result for scripts and the browser page
    pub result: String,
}
