//! Trait abstractions for external collaborators to enable mocking in tests

use crate::elements::FieldValue;
use serde_json::Value;

/// Storage lifetime for persisted search criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScope {
    /// Survives across sessions for a logged-in user
    User,
    /// Lives only as long as the anonymous session
    Session,
}

/// Session store for persisting search-form clause lists across requests
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read a stored value
    fn get(&self, scope: SessionScope, key: &str) -> Option<Value>;

    /// Store a value (last write wins)
    fn set(&mut self, scope: SessionScope, key: &str, value: Value);
}

/// Opaque challenge/response check backing the captcha constraint
#[cfg_attr(test, mockall::automock)]
pub trait ChallengeVerifier {
    /// True if the user-supplied answer matches the challenge
    fn check(&self, value: &str) -> bool;
}

/// One-way hashing of sensitive values, applied only once a form validates
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher {
    fn hash(&self, plaintext: &str) -> String;
}

/// Bound-data sink: receives element values as they are set on the form
#[cfg_attr(test, mockall::automock)]
pub trait Entity {
    /// Push an element's value into the backing domain object
    fn update_property(&mut self, name: &str, value: &FieldValue);
}
