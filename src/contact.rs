//! Contact Form State
//!
//! Controlled form fields; submission has no backend.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// One-line summary for the submission log
    pub fn summary(&self) -> String {
        format!(
            "from {:?} <{}>, {} chars",
            self.name,
            self.email,
            self.message.chars().count()
        )
    }
}

/// `mailto:` link with an encoded subject line
pub fn mailto_href(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, utf8_percent_encode(subject, NON_ALPHANUMERIC))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".to_string());
        form.set(ContactField::Email, "ada@example.com".to_string());
        form.set(ContactField::Name, "Ada L.".to_string());
        assert_eq!(form.get(ContactField::Name), "Ada L.");
        assert_eq!(form.get(ContactField::Email), "ada@example.com");
        assert_eq!(form.get(ContactField::Message), "");
    }

    #[test]
    fn test_summary() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "héllo".to_string(),
        };
        assert_eq!(form.summary(), "from \"Ada\" <ada@example.com>, 5 chars");
    }

    #[test]
    fn test_serializes_all_fields() {
        let form = ContactForm { name: "A".into(), email: "b".into(), message: "c".into() };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "email": "b", "message": "c"}));
    }

    #[test]
    fn test_mailto_encodes_subject() {
        assert_eq!(
            mailto_href("me@example.com", "Let's work together"),
            "mailto:me@example.com?subject=Let%27s%20work%20together"
        );
    }
}
