//! Closure-backed constraint for host-specific rules

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;
use std::fmt;

/// Wraps an arbitrary predicate supplied by the form builder
pub struct Custom {
    message: Option<String>,
    predicate: Box<dyn Fn(&FieldValue) -> bool>,
}

impl Custom {
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&FieldValue) -> bool + 'static,
    ) -> Self {
        Self {
            message: Some(message.into()),
            predicate: Box::new(predicate),
        }
    }
}

impl Constraint for Custom {
    fn is_valid(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
        (self.predicate)(value)
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_decides_validity() {
        let ctx = ValidationContext::new(&[]);
        let constraint = Custom::new("Must start with a letter", |v| {
            v.as_text().chars().next().is_some_and(char::is_alphabetic)
        });
        assert!(constraint.is_valid(&"abc1".into(), &ctx));
        assert!(!constraint.is_valid(&"1abc".into(), &ctx));
    }

    #[test]
    fn test_message() {
        let constraint = Custom::new("nope", |_| true);
        assert_eq!(constraint.message(), Some("nope"));
    }
}
