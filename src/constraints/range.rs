//! Numeric range constraint

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;

/// Parses the value as an integer and checks it against an inclusive range.
///
/// Empty values pass; non-numeric text fails.
#[derive(Debug, Clone)]
pub struct NumericRange {
    min: i64,
    max: i64,
    message: Option<String>,
}

impl NumericRange {
    pub fn new(min: i64, max: i64, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: Some(message.into()),
        }
    }
}

impl Constraint for NumericRange {
    fn is_valid(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
        if value.is_empty() {
            return true;
        }
        match value.as_text().trim().parse::<i64>() {
            Ok(n) => n >= self.min && n <= self.max,
            Err(_) => false,
        }
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_check(input: &str) -> bool {
        let ctx = ValidationContext::new(&[]);
        NumericRange::new(18, 99, "Age must be between 18 and 99").is_valid(&input.into(), &ctx)
    }

    #[test]
    fn test_value_inside_range_passes() {
        assert!(age_check("30"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(age_check("18"));
        assert!(age_check("99"));
    }

    #[test]
    fn test_value_outside_range_fails() {
        assert!(!age_check("17"));
        assert!(!age_check("100"));
    }

    #[test]
    fn test_non_numeric_fails() {
        assert!(!age_check("thirty"));
    }

    #[test]
    fn test_empty_value_passes() {
        assert!(age_check(""));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert!(age_check(" 42 "));
    }
}
