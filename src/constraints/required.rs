//! Required-ness constraint

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;

/// Fails on an empty value
#[derive(Debug, Clone)]
pub struct Required {
    message: Option<String>,
}

impl Required {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Required-ness without a user-visible message
    pub fn silent() -> Self {
        Self { message: None }
    }
}

impl Constraint for Required {
    fn is_valid(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
        !value.is_empty()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn marks_required(&self) -> bool {
        true
    }
}
