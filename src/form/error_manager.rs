//! Per-form registry of validation failures

use crate::elements::Element;

/// One recorded failure. A `None` message marks the element invalid without
/// any user-visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub element_name: String,
    pub message: Option<String>,
}

/// Collects (element, message) pairs during error determination.
///
/// Owned by exactly one form; never shared across forms or requests.
/// Duplicates are allowed because several constraints on one element may
/// each legitimately fail.
#[derive(Debug, Default)]
pub struct ErrorManager {
    errors: Vec<ErrorEntry>,
}

impl ErrorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally, in recording order
    pub fn add(&mut self, message: Option<String>, element_name: &str) {
        self.errors.push(ErrorEntry {
            element_name: element_name.to_string(),
            message,
        });
    }

    /// True iff no recorded error references this element's name
    pub fn element_is_valid(&self, element: &Element) -> bool {
        self.name_is_valid(element.name())
    }

    /// Name-based twin of [`element_is_valid`](Self::element_is_valid)
    pub fn name_is_valid(&self, element_name: &str) -> bool {
        !self.errors.iter().any(|e| e.element_name == element_name)
    }

    /// All user-visible messages recorded for this element, in order
    pub fn errors_for(&self, element: &Element) -> Vec<String> {
        self.errors_for_name(element.name())
    }

    /// Name-based twin of [`errors_for`](Self::errors_for)
    pub fn errors_for_name(&self, element_name: &str) -> Vec<String> {
        self.errors
            .iter()
            .filter(|e| e.element_name == element_name)
            .filter_map(|e| e.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Every recorded entry, including suppressed-text ones
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unreferenced_element_is_valid() {
        let manager = ErrorManager::new();
        assert!(manager.name_is_valid("email"));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_add_marks_element_invalid() {
        let mut manager = ErrorManager::new();
        manager.add(Some("Email is required".to_string()), "email");
        assert!(!manager.name_is_valid("email"));
        assert!(manager.name_is_valid("age"));
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut manager = ErrorManager::new();
        manager.add(Some("first".to_string()), "email");
        manager.add(Some("second".to_string()), "email");
        manager.add(Some("first".to_string()), "email");
        assert_eq!(
            manager.errors_for_name("email"),
            vec!["first".to_string(), "second".to_string(), "first".to_string()]
        );
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_none_message_marks_invalid_but_stays_hidden() {
        let mut manager = ErrorManager::new();
        manager.add(None, "avatar");
        assert!(!manager.name_is_valid("avatar"));
        assert!(manager.errors_for_name("avatar").is_empty());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_exact_name_match() {
        let mut manager = ErrorManager::new();
        manager.add(Some("msg".to_string()), "email");
        assert!(manager.name_is_valid("email2"));
        assert!(manager.name_is_valid("mail"));
    }
}
