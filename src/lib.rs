//! Formwork - form abstraction for CMS-style applications
//!
//! Builds form elements, attaches validation constraints, tracks submission
//! state, persists search criteria in a session store, and maps submitted
//! values onto domain models or raw data maps.
//!
//! The core is the element/constraint/error composition: an element owns an
//! ordered list of constraints, a constraint validates one value and reports
//! a message, and the form aggregates elements and a per-form error manager.
//! Error determination runs once per submission; validity queries only read
//! what that pass recorded.

pub mod config;
pub mod constraints;
pub mod elements;
pub mod error;
pub mod form;
pub mod services;
pub mod utility;

pub use config::Configuration;
pub use elements::{Element, ElementKind, FieldValue, RenderContext, UploadState};
pub use error::FormError;
pub use form::{Clause, ClauseKind, ErrorEntry, ErrorManager, Form, FormMode};
pub use services::{
    ChallengeVerifier, Entity, MemorySessionStore, PasswordHasher, SessionScope, SessionStore,
};
