//! Buyer details entered on the form

use serde::{Deserialize, Serialize};

/// Contact details. Stored exactly as typed: no trimming, no normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub email: String,
    pub name: String,
    pub phone: String,
}

/// Text fields the buyer can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuyerField {
    Email,
    Name,
    Phone,
    Notes,
}

impl BuyerField {
    pub fn label(&self) -> &'static str {
        match self {
            BuyerField::Email => "Email *",
            BuyerField::Name => "Name",
            BuyerField::Phone => "Phone Number",
            BuyerField::Notes => "Catatan Tambahan (Opsional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BuyerField::Email => "Your Email",
            BuyerField::Name => "Your Name",
            BuyerField::Phone => "08xxxxxxxx",
            BuyerField::Notes => "Contoh: Beli bank konten kategori beauty",
        }
    }
}

/// Consent checkboxes. Only `agreed_to_terms` gates submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentFlags {
    pub agreed_to_terms: bool,
    pub agreed_to_marketing: bool,
}
