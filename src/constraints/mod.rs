//! Validation constraints attached to form elements

mod captcha;
mod custom;
mod email;
mod fields_match;
mod range;
mod required;

pub use captcha::*;
pub use custom::*;
pub use email::*;
pub use fields_match::*;
pub use range::*;
pub use required::*;

use crate::elements::{Element, FieldValue};

/// Read-only view of sibling element values, for cross-field constraints
pub struct ValidationContext<'a> {
    elements: &'a [Element],
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(elements: &'a [Element]) -> Self {
        Self { elements }
    }

    /// Current value of another element on the same form
    pub fn value_of(&self, name: &str) -> Option<FieldValue> {
        self.elements
            .iter()
            .find(|e| e.name() == name)
            .map(Element::value)
    }
}

/// A single pass/fail rule plus its failure message.
///
/// Constraints are pure predicates: they never mutate element or form state.
/// A `None` message means the failure is recorded nowhere; the constraint
/// still answers `false` but produces no user-visible error.
pub trait Constraint {
    /// True if `value` satisfies the rule
    fn is_valid(&self, value: &FieldValue, ctx: &ValidationContext<'_>) -> bool;

    /// The configured failure text
    fn message(&self) -> Option<&str>;

    /// Identity tag for the required-ness variant
    fn marks_required(&self) -> bool {
        false
    }
}
