//! Captcha constraint delegating to an injected challenge verifier

use super::{Constraint, ValidationContext};
use crate::elements::FieldValue;
use crate::services::ChallengeVerifier;
use std::fmt;
use std::rc::Rc;

/// Asks an external challenge/response service whether the supplied answer
/// matches the challenge shown to the user
pub struct Captcha {
    message: Option<String>,
    verifier: Rc<dyn ChallengeVerifier>,
}

impl Captcha {
    pub fn new(message: impl Into<String>, verifier: Rc<dyn ChallengeVerifier>) -> Self {
        Self {
            message: Some(message.into()),
            verifier,
        }
    }
}

impl Constraint for Captcha {
    fn is_valid(&self, value: &FieldValue, _ctx: &ValidationContext<'_>) -> bool {
        self.verifier.check(value.as_text())
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Debug for Captcha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Captcha")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
