//! Cross-field equality constraint

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;

/// Fails unless the value equals the current value of another element on the
/// same form (password confirmation, email repetition, ...). A missing peer
/// element fails.
#[derive(Debug, Clone)]
pub struct FieldsMatch {
    other: String,
    message: Option<String>,
}

impl FieldsMatch {
    pub fn new(other: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            message: Some(message.into()),
        }
    }
}

impl Constraint for FieldsMatch {
    fn is_valid(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool {
        match ctx.value_of(&self.other) {
            Some(peer) => peer == *value,
            None => false,
        }
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
