//! TUI state definitions

use wa_checkout::checkout::{BuyerField, FieldKey};

/// Which screen is showing
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub enum AppState {
    /// The checkout form
    #[default]
    Checkout,

    /// Composed message, shown without validating
    Preview { message: String },

    /// Link handed to the launcher
    Sent { url: String },
}

/// Form field focus, in tab order
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum CheckoutField {
    #[default]
    Email,
    Name,
    Phone,
    Notes,
    Quantity,
    Payment,
    Terms,
    Marketing,
    Buy,
}

impl CheckoutField {
    pub fn all() -> &'static [CheckoutField] {
        &[
            Self::Email,
            Self::Name,
            Self::Phone,
            Self::Notes,
            Self::Quantity,
            Self::Payment,
            Self::Terms,
            Self::Marketing,
            Self::Buy,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }

    /// The buyer field edited through this focus, if it is a text field
    pub fn buyer_field(&self) -> Option<BuyerField> {
        match self {
            Self::Email => Some(BuyerField::Email),
            Self::Name => Some(BuyerField::Name),
            Self::Phone => Some(BuyerField::Phone),
            Self::Notes => Some(BuyerField::Notes),
            _ => None,
        }
    }

    /// Where to put focus to fix a validation error
    pub fn for_error(key: FieldKey) -> Self {
        match key {
            FieldKey::Email => Self::Email,
            FieldKey::Name => Self::Name,
            FieldKey::Phone => Self::Phone,
            FieldKey::Terms => Self::Terms,
        }
    }
}
