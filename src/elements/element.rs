//! One form field: value, configuration, and validation rules

use super::{ElementKind, FieldValue, RenderContext, UploadState};
use crate::config::Configuration;
use crate::constraints::{Constraint, ValidationContext};
use crate::error::FormError;
use crate::form::{Clause, ClauseKind, ErrorManager};
use std::fmt;
use uuid::Uuid;

/// Override hook replacing the default LIKE clause of a search element
pub type ClauseOverride = Box<dyn Fn(&FieldValue, &Element) -> Clause>;

/// A single form element, owned by exactly one [`Form`](crate::form::Form).
///
/// The element stores its value and constraints; it never reaches back into
/// the form. Error determination gets the submission flag, a read-only peer
/// view, and the form's error manager handed in by the owning form.
pub struct Element {
    name: String,
    absolute_name: String,
    kind: ElementKind,
    configuration: Configuration,
    value: Option<FieldValue>,
    constraints: Vec<Box<dyn Constraint>>,
    system_errors: Vec<Option<String>>,
    is_verified: bool,
    searchable: bool,
    upload_state: UploadState,
    override_clause: Option<ClauseOverride>,
}

impl Element {
    /// Build an element; fails if mandatory configuration is missing
    pub fn new(
        absolute_name: impl Into<String>,
        name: impl Into<String>,
        kind: ElementKind,
        configuration: Configuration,
    ) -> Result<Self, FormError> {
        let name = name.into();
        let mut configuration = configuration;
        configuration.merge_defaults(kind.default_configuration());
        kind.validate_configuration(&name, &configuration)?;
        Ok(Self {
            absolute_name: absolute_name.into(),
            name,
            kind,
            searchable: kind.searchable(),
            configuration,
            value: None,
            constraints: Vec::new(),
            system_errors: Vec::new(),
            is_verified: false,
            upload_state: UploadState::default(),
            override_clause: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn absolute_name(&self) -> &str {
        &self.absolute_name
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// One configuration setting, if present
    pub fn configuration_item(&self, key: &str) -> Option<&serde_json::Value> {
        self.configuration.get(key)
    }

    /// Add a configuration setting after construction
    pub fn with(&mut self, key: &str, value: impl Into<serde_json::Value>) -> &mut Self {
        self.configuration.set(key, value);
        self
    }

    /// The current value, or the configured `defaultValue` when no value has
    /// ever been set. An explicitly set empty value is NOT replaced by the
    /// default.
    pub fn value(&self) -> FieldValue {
        match &self.value {
            Some(v) => v.clone(),
            None => self
                .configuration
                .get("defaultValue")
                .and_then(FieldValue::from_json)
                .unwrap_or_default(),
        }
    }

    /// True once a value was explicitly set, even an empty one
    pub fn value_was_set(&self) -> bool {
        self.value.is_some()
    }

    /// Store a value directly. Hosts should go through
    /// [`Form::set_value`](crate::form::Form::set_value) so the form's bound
    /// data stays in sync.
    pub fn store_value(&mut self, value: FieldValue) {
        self.value = Some(value);
    }

    /// Append a constraint; insertion order is reporting order, no dedup
    pub fn add_constraint(&mut self, constraint: impl Constraint + 'static) -> &mut Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Attach an out-of-band failure detected outside the constraint model.
    /// A `None` message marks the element invalid without user-visible text.
    pub fn add_system_error(&mut self, message: Option<String>) {
        self.system_errors.push(message);
    }

    /// True iff a required-ness constraint is attached
    pub fn is_required(&self) -> bool {
        self.constraints.iter().any(|c| c.marks_required())
    }

    pub(crate) fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub(crate) fn mark_verified(&mut self) {
        self.is_verified = true;
    }

    /// Evaluate all constraints against the current value and collect the
    /// messages to record: non-null constraint failures first, then every
    /// system error.
    pub(crate) fn failed_messages(&self, ctx: &ValidationContext<'_>) -> Vec<Option<String>> {
        let value = self.value();
        let mut messages = Vec::new();
        for constraint in &self.constraints {
            if !constraint.is_valid(&value, ctx) {
                if let Some(message) = constraint.message() {
                    messages.push(Some(message.to_string()));
                }
            }
        }
        messages.extend(self.system_errors.iter().cloned());
        messages
    }

    /// Validity as recorded so far; never re-runs constraints
    pub fn is_valid(&self, errors: &ErrorManager) -> bool {
        errors.element_is_valid(self)
    }

    /// Recorded error messages for this element
    pub fn errors(&self, errors: &ErrorManager) -> Vec<String> {
        errors.errors_for(self)
    }

    // --- search support ---

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn set_searchable(&mut self, searchable: bool) {
        self.searchable = searchable;
    }

    /// Column the search clause targets; defaults to the element name
    pub fn search_field(&self) -> &str {
        self.configuration.get_str("searchfield").unwrap_or(&self.name)
    }

    /// Replace the default LIKE clause with a host-supplied one
    pub fn set_override_clause(
        &mut self,
        override_clause: impl Fn(&FieldValue, &Element) -> Clause + 'static,
    ) {
        self.override_clause = Some(Box::new(override_clause));
    }

    /// Search clause for the current value; `None` when the value is empty
    pub fn clause(&self) -> Option<Clause> {
        let value = self.value();
        if value.is_empty() {
            return None;
        }
        match &self.override_clause {
            Some(build) => {
                let mut clause = build(&value, self);
                clause.element_name = self.name.clone();
                clause.element_value = value;
                Some(clause)
            }
            None => Some(Clause {
                element_name: self.name.clone(),
                element_value: value.clone(),
                field: self.search_field().to_string(),
                kind: ClauseKind::Like,
                value: format!("%{}%", value.as_text()),
            }),
        }
    }

    // --- upload support ---

    pub fn upload_state(&self) -> UploadState {
        self.upload_state
    }

    pub fn set_upload_state(&mut self, state: UploadState) {
        self.upload_state = state;
    }

    /// Drop one file name from an upload value
    pub fn remove_file_from_value(&mut self, file_name: &str) {
        if let Some(FieldValue::Files(files)) = &mut self.value {
            files.retain(|f| f != file_name);
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.configuration.get_bool_or("multiple", false)
    }

    pub fn can_overwrite(&self) -> bool {
        self.configuration.get_bool_or("canoverwrite", false)
    }

    pub fn show_link(&self) -> bool {
        self.configuration.get_bool_or("show_link", true)
    }

    /// Target directory, normalized with a trailing slash
    pub fn upload_directory(&self) -> String {
        let dir = self.configuration.get_str("directory").unwrap_or("");
        format!("{}/", dir.trim_matches('/'))
    }

    /// Forced final file name, if configured
    pub fn forced_filename(&self) -> Option<&str> {
        self.configuration.get_str("filename")
    }

    /// Collision-free name for the temporary upload directory
    pub fn temporary_name(&self, file_name: &str) -> String {
        format!("{}_{}", Uuid::new_v4().simple(), file_name)
    }

    // --- rendering support ---

    /// Identifier usable in markup, derived from the absolute name
    pub fn html_id(&self) -> String {
        self.absolute_name
            .replace(['.', '['], "_")
            .replace(']', "")
    }

    /// Markup for this element
    pub fn render(&self, ctx: RenderContext) -> String {
        self.kind.render(self, ctx)
    }

    /// Shared attribute string assembled from configuration
    pub fn attributes(&self, ctx: RenderContext) -> String {
        let mut output = String::new();
        for key in ["placeholder", "style", "title"] {
            if let Some(value) = self.configuration.get_str(key) {
                output.push_str(&format!(" {key}=\"{value}\""));
            }
        }
        if self.configuration.get_bool_or("disabled", false) {
            output.push_str(" disabled");
        }
        let mut css = self.configuration.get_str("class").unwrap_or("").to_string();
        if !ctx.valid {
            if let Some(errorclass) = self.configuration.get_str("errorclass") {
                if !css.is_empty() {
                    css.push(' ');
                }
                css.push_str(errorclass);
            }
        }
        if !css.is_empty() {
            output.push_str(&format!(" class=\"{css}\""));
        }
        if let Some(custom) = self.configuration.get_str("custom") {
            output.push_str(&format!(" {custom}"));
        }
        output
    }

    /// Everything a template needs to render this element
    pub fn rendering_information(
        &self,
        ctx: RenderContext,
        errors: &ErrorManager,
    ) -> serde_json::Value {
        let is_valid = self.is_valid(errors);
        serde_json::json!({
            "name": self.name,
            "absolutename": self.absolute_name,
            "htmlid": self.html_id(),
            "value": self.value(),
            "errors": self.errors(errors),
            "isvalid": is_valid,
            "hasError": !is_valid,
            "required": self.is_required(),
            "__compiled": self.render(ctx),
        })
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("absolute_name", &self.absolute_name)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("constraints", &self.constraints.len())
            .field("system_errors", &self.system_errors)
            .field("is_verified", &self.is_verified)
            .field("upload_state", &self.upload_state)
            .finish_non_exhaustive()
    }
}
