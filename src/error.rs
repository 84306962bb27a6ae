//! Structural errors raised while building a form

use thiserror::Error;

/// Errors raised at form-construction time.
///
/// Value-level validation failures never surface here; they are recorded in
/// the form's [`ErrorManager`](crate::form::ErrorManager) and queried, not
/// thrown. This enum only covers structural problems the form builder must
/// fix before the form can exist.
#[derive(Debug, Error)]
pub enum FormError {
    /// A mandatory configuration setting is missing for an element
    #[error("element `{element}`: missing configuration `{setting}`")]
    BadConfiguration { element: String, setting: String },

    /// The caller asked for an element type this library does not know
    #[error("unknown element type `{0}`")]
    UnknownElementType(String),

    /// Element names are unique within a form
    #[error("element `{0}` already exists on this form")]
    DuplicateElement(String),
}
