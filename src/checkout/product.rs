//! The single product sold by this checkout

use serde::{Deserialize, Serialize};

/// A digital product offered for sale. Immutable for the lifetime of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Display name, also used verbatim in the order message
    pub name: String,
    /// Price per item in whole rupiah
    pub unit_price: u64,
    /// Product image shown on the product card
    pub image_url: String,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: "BANK KONTEN".to_string(),
            unit_price: 5000,
            image_url: "https://i.postimg.cc/GTJqBZ59/1-20251001-010825-0000.png".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_product() {
        let product = Product::default();
        assert_eq!(product.name, "BANK KONTEN");
        assert_eq!(product.unit_price, 5000);
    }
}
