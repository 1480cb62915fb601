//! Submit-time validation of the buyer form

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::buyer::{BuyerInfo, ConsentFlags};

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const PHONE_REQUIRED: &str = "Phone number is required.";
pub const TERMS_REQUIRED: &str = "You must agree to the Terms of Use.";

/// `local@domain.tld` shape, matched anywhere in the input
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Keys of the error mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Email,
    Name,
    Phone,
    Terms,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Email => "email",
            FieldKey::Name => "name",
            FieldKey::Phone => "phone",
            FieldKey::Terms => "terms",
        }
    }
}

/// Field -> message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn insert(&mut self, key: FieldKey, message: &str) {
        self.0.insert(key, message.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(key, msg)| format!("{}: {}", key.as_str(), msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Run every rule and collect the failures.
///
/// Rules are independent; a failing email never hides a missing phone.
/// Only empty strings count as missing, so `"   "` passes the name check.
pub fn validate(buyer: &BuyerInfo, consent: &ConsentFlags) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if buyer.email.is_empty() {
        errors.insert(FieldKey::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&buyer.email) {
        errors.insert(FieldKey::Email, EMAIL_INVALID);
    }

    if buyer.name.is_empty() {
        errors.insert(FieldKey::Name, NAME_REQUIRED);
    }

    if buyer.phone.is_empty() {
        errors.insert(FieldKey::Phone, PHONE_REQUIRED);
    }

    if !consent.agreed_to_terms {
        errors.insert(FieldKey::Terms, TERMS_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buyer(email: &str, name: &str, phone: &str) -> BuyerInfo {
        BuyerInfo {
            email: email.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    fn agreed() -> ConsentFlags {
        ConsentFlags {
            agreed_to_terms: true,
            agreed_to_marketing: false,
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&BuyerInfo::default(), &ConsentFlags::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldKey::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(FieldKey::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldKey::Phone), Some(PHONE_REQUIRED));
        assert_eq!(errors.get(FieldKey::Terms), Some(TERMS_REQUIRED));
    }

    #[test]
    fn test_minimal_valid_form() {
        let errors = validate(&buyer("a@b.c", "Budi", "0812"), &agreed());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_email_only() {
        let errors = validate(&buyer("not-an-email", "Budi", "0812"), &agreed());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldKey::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_email_pattern_edges() {
        let check = |email: &str| validate(&buyer(email, "n", "p"), &agreed()).is_empty();
        assert!(check("user@example.com"));
        assert!(check("a b@c.d"));
        assert!(!check("a@b"));
        assert!(!check("@b.c"));
        assert!(!check("a@.c"));
        assert!(!check("a@b."));
        assert!(!check("   "));
    }

    #[test]
    fn test_whitespace_name_passes() {
        let errors = validate(&buyer("a@b.c", "   ", "0812"), &agreed());
        assert!(!errors.contains(FieldKey::Name));
    }

    #[test]
    fn test_marketing_is_not_required() {
        let consent = ConsentFlags {
            agreed_to_terms: true,
            agreed_to_marketing: false,
        };
        assert!(validate(&buyer("a@b.c", "n", "p"), &consent).is_empty());
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let errors = validate(&buyer("", "n", "p"), &agreed());
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"email":"Email is required."}"#);
    }

    #[test]
    fn test_email_pattern_compiles() {
        let pattern = Lazy::force(&EMAIL_PATTERN);
        assert_eq!(pattern.as_str(), r"\S+@\S+\.\S+");
    }
}
