//! In-memory session store for tests and simple hosts

use super::{SessionScope, SessionStore};
use serde_json::Value;
use std::collections::HashMap;

/// A [`SessionStore`] backed by two in-process maps, one per scope
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: HashMap<String, Value>,
    session: HashMap<String, Value>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: SessionScope) -> &HashMap<String, Value> {
        match scope {
            SessionScope::User => &self.user,
            SessionScope::Session => &self.session,
        }
    }

    fn map_mut(&mut self, scope: SessionScope) -> &mut HashMap<String, Value> {
        match scope {
            SessionScope::User => &mut self.user,
            SessionScope::Session => &mut self.session,
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, scope: SessionScope, key: &str) -> Option<Value> {
        self.map(scope).get(key).cloned()
    }

    fn set(&mut self, scope: SessionScope, key: &str, value: Value) {
        self.map_mut(scope).insert(key.to_string(), value);
    }
}
