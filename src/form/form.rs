//! Form orchestration: element collection, submission state, error determination

use super::{Clause, ErrorManager};
use crate::config::Configuration;
use crate::constraints::{Captcha, ValidationContext};
use crate::elements::{Element, ElementKind, FieldValue, RenderContext};
use crate::error::FormError;
use crate::services::{ChallengeVerifier, Entity, PasswordHasher, SessionScope, SessionStore};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// What the form binds its values to
pub enum FormMode {
    /// Raw associative record (classic CRUD)
    Classic { data: HashMap<String, FieldValue> },
    /// Domain model behind the [`Entity`] sink
    Entity { entity: Box<dyn Entity> },
    /// Search form: values become clauses, optionally persisted in session
    Search {
        session: Box<dyn SessionStore>,
        scope: SessionScope,
        clauses: Vec<Clause>,
        store_in_session: bool,
    },
}

impl fmt::Debug for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Classic { data } => f.debug_struct("Classic").field("data", data).finish(),
            FormMode::Entity { .. } => f.debug_struct("Entity").finish_non_exhaustive(),
            FormMode::Search {
                scope,
                clauses,
                store_in_session,
                ..
            } => f
                .debug_struct("Search")
                .field("scope", scope)
                .field("clauses", clauses)
                .field("store_in_session", store_in_session)
                .finish_non_exhaustive(),
        }
    }
}

type ValidatedHook = Box<dyn FnOnce(&mut Form)>;

/// A form: ordered element collection, submission state, and the error
/// manager all elements report into.
///
/// One form instance serves exactly one submission; nothing here is shared
/// across requests.
pub struct Form {
    pub(crate) identifier: String,
    pub(crate) elements: Vec<Element>,
    pub(crate) error_manager: ErrorManager,
    pub(crate) is_submitted: bool,
    pub(crate) mode: FormMode,
    pub(crate) hasher: Option<Rc<dyn PasswordHasher>>,
    pub(crate) validated_hooks: Vec<ValidatedHook>,
    pub(crate) hooks_fired: bool,
}

impl Form {
    /// CRUD form over a raw data map
    pub fn new(identifier: impl Into<String>) -> Self {
        Self::with_data(identifier, HashMap::new())
    }

    /// CRUD form over a pre-filled raw data map
    pub fn with_data(identifier: impl Into<String>, data: HashMap<String, FieldValue>) -> Self {
        Self::build(identifier, FormMode::Classic { data })
    }

    /// CRUD form bound to a domain model
    pub fn with_entity(identifier: impl Into<String>, entity: Box<dyn Entity>) -> Self {
        Self::build(identifier, FormMode::Entity { entity })
    }

    pub(crate) fn build(identifier: impl Into<String>, mode: FormMode) -> Self {
        Self {
            identifier: identifier.into(),
            elements: Vec::new(),
            error_manager: ErrorManager::new(),
            is_submitted: false,
            mode,
            hasher: None,
            validated_hooks: Vec::new(),
            hooks_fired: false,
        }
    }

    /// Attach the hashing capability used by apply-on-success hashing
    pub fn with_hasher(mut self, hasher: Rc<dyn PasswordHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// All elements, in insertion (rendering) order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.name() == name)
    }

    pub fn error_manager(&self) -> &ErrorManager {
        &self.error_manager
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// Submission is a boundary fact the host injects
    pub fn set_submitted(&mut self, submitted: bool) {
        self.is_submitted = submitted;
    }

    /// Add an element by type tag. Unknown tags and duplicate names fail.
    pub fn add(
        &mut self,
        name: &str,
        type_tag: &str,
        configuration: Configuration,
    ) -> Result<&mut Element, FormError> {
        let kind = ElementKind::from_tag(type_tag)?;
        self.add_element(name, kind, configuration)
    }

    /// Add an element with an explicit kind
    pub fn add_element(
        &mut self,
        name: &str,
        kind: ElementKind,
        configuration: Configuration,
    ) -> Result<&mut Element, FormError> {
        if self.element(name).is_some() {
            return Err(FormError::DuplicateElement(name.to_string()));
        }
        let absolute_name = format!("{}[{}]", self.identifier, name);
        let element = Element::new(absolute_name, name, kind, configuration)?;
        self.elements.push(element);
        let index = self.elements.len() - 1;
        Ok(&mut self.elements[index])
    }

    /// Add a captcha element; the matching constraint is attached here
    /// because it needs the injected verifier.
    pub fn add_captcha(
        &mut self,
        name: &str,
        configuration: Configuration,
        verifier: Rc<dyn ChallengeVerifier>,
    ) -> Result<&mut Element, FormError> {
        let message = configuration
            .get_str("errormessage")
            .unwrap_or("Captcha is not valid")
            .to_string();
        let element = self.add_element(name, ElementKind::Captcha, configuration)?;
        element.add_constraint(Captcha::new(message, verifier));
        Ok(element)
    }

    /// Set an element's value and push it into the bound data.
    ///
    /// For password elements with `encrypt` enabled this also registers the
    /// apply-on-success hashing hook; the plaintext stays in place until the
    /// form as a whole validates.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        let raw = value.into();
        let Some(element) = self.element(name) else {
            tracing::warn!(form = %self.identifier, element = name, "set_value on unknown element");
            return;
        };
        let bound = element.kind().bind(raw, element.configuration());
        if element.kind().defers_hashing(element.configuration(), &bound) {
            if self.hasher.is_some() {
                let plaintext = bound.as_text().to_string();
                let target = name.to_string();
                self.on_validated(move |form| {
                    if let Some(hasher) = form.hasher.clone() {
                        let hashed = hasher.hash(&plaintext);
                        form.write_value(&target, FieldValue::Text(hashed));
                    }
                });
            } else {
                tracing::warn!(
                    form = %self.identifier,
                    element = name,
                    "encrypt requested but no hasher configured; value stays in clear"
                );
            }
        }
        self.write_value(name, bound);
    }

    /// Store the value on the element and sync the bound data, without any
    /// deferred side effects
    pub(crate) fn write_value(&mut self, name: &str, value: FieldValue) {
        let Some(element) = self.elements.iter_mut().find(|e| e.name() == name) else {
            return;
        };
        element.store_value(value.clone());
        match &mut self.mode {
            FormMode::Classic { data } => {
                data.insert(name.to_string(), value);
            }
            FormMode::Entity { entity } => entity.update_property(name, &value),
            FormMode::Search { .. } => {}
        }
    }

    /// Bind a whole submitted request: marks the form submitted, sets every
    /// known value, and for search forms recomputes and persists clauses.
    pub fn bind_request(&mut self, values: Vec<(String, FieldValue)>) {
        tracing::debug!(form = %self.identifier, count = values.len(), "binding submitted values");
        self.is_submitted = true;
        for (name, value) in values {
            self.set_value(&name, value);
        }
        if matches!(self.mode, FormMode::Search { .. }) {
            self.refresh_clauses();
            self.save_criteria_to_session();
        }
    }

    /// Bound data of a classic CRUD form
    pub fn data(&self) -> Option<&HashMap<String, FieldValue>> {
        match &self.mode {
            FormMode::Classic { data } => Some(data),
            _ => None,
        }
    }

    pub fn has_data(&self, name: &str) -> bool {
        self.data().is_some_and(|d| d.contains_key(name))
    }

    /// Bound domain model, when this form has one
    pub fn entity(&self) -> Option<&dyn Entity> {
        match &self.mode {
            FormMode::Entity { entity } => Some(entity.as_ref()),
            _ => None,
        }
    }

    /// Register a post-validation hook, run once the whole form is confirmed
    /// valid, in registration order, no dedup.
    pub fn on_validated(&mut self, hook: impl FnOnce(&mut Form) + 'static) {
        self.validated_hooks.push(Box::new(hook));
    }

    /// Run every unverified element's constraints into the error manager.
    ///
    /// No-op on an unsubmitted form: a form shown for the first time has no
    /// errors to determine. Idempotent per submission; each element verifies
    /// at most once.
    pub fn determine_errors(&mut self) {
        if !self.is_submitted {
            return;
        }
        for i in 0..self.elements.len() {
            if self.elements[i].is_verified() {
                continue;
            }
            let failures = {
                let ctx = ValidationContext::new(&self.elements);
                self.elements[i].failed_messages(&ctx)
            };
            let name = self.elements[i].name().to_string();
            if !failures.is_empty() {
                tracing::debug!(form = %self.identifier, element = %name, failures = failures.len(), "element failed validation");
            }
            for message in failures {
                self.error_manager.add(message, &name);
            }
            self.elements[i].mark_verified();
        }
    }

    /// True iff, after error determination on every element, the error
    /// manager holds zero errors. On a valid submission the registered
    /// post-validation hooks fire, exactly once.
    pub fn is_valid(&mut self) -> bool {
        self.determine_errors();
        let valid = self.error_manager.is_empty();
        if valid && self.is_submitted {
            self.fire_validated_hooks();
        }
        valid
    }

    fn fire_validated_hooks(&mut self) {
        if self.hooks_fired {
            return;
        }
        self.hooks_fired = true;
        let hooks = std::mem::take(&mut self.validated_hooks);
        if !hooks.is_empty() {
            tracing::debug!(form = %self.identifier, hooks = hooks.len(), "form valid, firing hooks");
        }
        for hook in hooks {
            hook(self);
        }
    }

    /// Markup for one element, with validity context filled in
    pub fn render(&self, name: &str) -> Option<String> {
        let element = self.element(name)?;
        Some(element.render(self.render_context(element)))
    }

    /// Template data for one element
    pub fn rendering_information(&self, name: &str) -> Option<serde_json::Value> {
        let element = self.element(name)?;
        Some(element.rendering_information(self.render_context(element), &self.error_manager))
    }

    fn render_context(&self, element: &Element) -> RenderContext {
        RenderContext {
            submitted: self.is_submitted,
            valid: element.is_valid(&self.error_manager),
            form_valid: self.error_manager.is_empty(),
        }
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("identifier", &self.identifier)
            .field("elements", &self.elements)
            .field("is_submitted", &self.is_submitted)
            .field("error_manager", &self.error_manager)
            .field("mode", &self.mode)
            .field("hooks_fired", &self.hooks_fired)
            .finish_non_exhaustive()
    }
}
