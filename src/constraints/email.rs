//! Email format constraint

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;

/// Checks the rough shape of an email address.
///
/// Empty values pass; emptiness is the [`Required`](super::Required)
/// constraint's job.
#[derive(Debug, Clone)]
pub struct EmailFormat {
    message: Option<String>,
}

impl EmailFormat {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

fn looks_like_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl Constraint for EmailFormat {
    fn is_valid(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
        value.is_empty() || looks_like_email(value.as_text())
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(input: &str) -> bool {
        let ctx = ValidationContext::new(&[]);
        EmailFormat::new("Invalid email").is_valid(&input.into(), &ctx)
    }

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid("jane.doe@example.org"));
    }

    #[test]
    fn test_empty_value_passes() {
        assert!(is_valid(""));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid("jane.example.org"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_valid("jane@example"));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid("@example.org"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid("jane doe@example.org"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid("jane@doe@example.org"));
    }
}
