//! Checkout configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON file:
//!
//! ```json
//! {
//!   "product": { "name": "BANK KONTEN", "unit_price": 5000 },
//!   "whatsapp": { "recipient": "6283173441172" }
//! }
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::checkout::Product;
use crate::error::CheckoutError;
use crate::handoff::WhatsAppLink;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub product: Product,
    pub whatsapp: WhatsAppLink,
}

impl CheckoutConfig {
    pub fn from_json(path: &Path, data: &str) -> Result<Self, CheckoutError> {
        serde_json::from_str(data).map_err(|source| CheckoutError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CheckoutError> {
        let data = std::fs::read_to_string(path).map_err(|source| CheckoutError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(path, &data)?;
        debug!(path = %path.display(), product = %config.product.name, "loaded config");
        Ok(config)
    }

    /// Load `path` when given, else fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CheckoutError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::{DEFAULT_BASE_URL, DEFAULT_RECIPIENT};

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.product.name, "BANK KONTEN");
        assert_eq!(config.whatsapp.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.whatsapp.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_partial_override() {
        let config = CheckoutConfig::from_json(
            Path::new("checkout.json"),
            r#"{"product":{"unit_price":7500},"whatsapp":{"recipient":"620000"}}"#,
        )
        .unwrap();
        assert_eq!(config.product.name, "BANK KONTEN");
        assert_eq!(config.product.unit_price, 7500);
        assert_eq!(config.whatsapp.recipient, "620000");
        assert_eq!(config.whatsapp.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_malformed_config() {
        let err = CheckoutConfig::from_json(Path::new("bad.json"), "{not json").unwrap_err();
        assert!(matches!(err, CheckoutError::Config { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = CheckoutConfig::load(Path::new("/nonexistent/wa-checkout.json")).unwrap_err();
        assert!(matches!(err, CheckoutError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            CheckoutConfig::load_or_default(None).unwrap(),
            CheckoutConfig::default()
        );
    }
}
