//! Search forms: clause building and session persistence

use super::{Clause, Form, FormMode};
use crate::services::{SessionScope, SessionStore};

impl Form {
    /// Search form. Prior criteria are loaded from the session immediately;
    /// call [`set_value_from_session`](Self::set_value_from_session) after
    /// adding elements to re-fill them.
    ///
    /// The scope decides the storage lifetime: `User` for logged-in users,
    /// `Session` otherwise.
    pub fn new_search(
        identifier: impl Into<String>,
        session: Box<dyn SessionStore>,
        scope: SessionScope,
    ) -> Self {
        let mut form = Self::build(
            identifier,
            FormMode::Search {
                session,
                scope,
                clauses: Vec::new(),
                store_in_session: true,
            },
        );
        form.load_criteria_from_session();
        form
    }

    /// Toggle session persistence of search criteria
    pub fn store_search_in_session(&mut self, store: bool) {
        if let FormMode::Search {
            store_in_session, ..
        } = &mut self.mode
        {
            *store_in_session = store;
        }
    }

    /// Current search clauses; empty for non-search forms
    pub fn clauses(&self) -> &[Clause] {
        match &self.mode {
            FormMode::Search { clauses, .. } => clauses,
            _ => &[],
        }
    }

    /// Recompute clauses from the searchable elements' current values
    pub fn refresh_clauses(&mut self) {
        let computed: Vec<Clause> = self
            .elements
            .iter()
            .filter(|e| e.is_searchable())
            .filter_map(|e| e.clause())
            .collect();
        if let FormMode::Search { clauses, .. } = &mut self.mode {
            *clauses = computed;
        }
    }

    fn session_key(&self) -> String {
        format!("form-{}-clauses", self.identifier)
    }

    /// Load the clause list persisted by an earlier request, if any
    pub fn load_criteria_from_session(&mut self) {
        let key = self.session_key();
        let FormMode::Search {
            session,
            scope,
            clauses,
            ..
        } = &mut self.mode
        else {
            return;
        };
        if let Some(stored) = session.get(*scope, &key) {
            match serde_json::from_value::<Vec<Clause>>(stored) {
                Ok(parsed) => {
                    tracing::debug!(key = %key, count = parsed.len(), "loaded search criteria");
                    *clauses = parsed;
                }
                Err(error) => {
                    tracing::warn!(key = %key, %error, "discarding unreadable search criteria");
                }
            }
        }
    }

    /// Persist the current clause list (last write wins)
    pub fn save_criteria_to_session(&mut self) {
        let key = self.session_key();
        let FormMode::Search {
            session,
            scope,
            clauses,
            store_in_session,
        } = &mut self.mode
        else {
            return;
        };
        if !*store_in_session {
            return;
        }
        match serde_json::to_value(&*clauses) {
            Ok(value) => {
                tracing::debug!(key = %key, count = clauses.len(), "saving search criteria");
                session.set(*scope, &key, value);
            }
            Err(error) => tracing::warn!(key = %key, %error, "failed to serialize search criteria"),
        }
    }

    /// Re-fill element values from the loaded clauses
    pub fn set_value_from_session(&mut self) {
        let restored: Vec<_> = self
            .clauses()
            .iter()
            .map(|c| (c.element_name.clone(), c.element_value.clone()))
            .collect();
        for (name, value) in restored {
            if self.element(&name).is_some() {
                self.set_value(&name, value);
            }
        }
    }
}
