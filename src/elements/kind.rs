//! Element variants behind one capability surface

use super::{Element, FieldValue};
use crate::config::Configuration;
use crate::error::FormError;
use uuid::Uuid;

/// Lifecycle of an upload element's file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    /// No file submitted yet
    #[default]
    Empty,
    /// Files sit in the temporary directory, waiting for the form to validate
    Pending,
    /// Files moved to their final directory
    Done,
}

/// Context a renderer needs beyond the element itself.
///
/// `valid` is the element's own validity (drives the error class);
/// `form_valid` is the whole form's (drives the password refill).
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub submitted: bool,
    pub valid: bool,
    pub form_valid: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            submitted: false,
            valid: true,
            form_valid: true,
        }
    }
}

/// The concrete kind of a form element.
///
/// One `Element` type carries the shared state; the kind decides how input
/// binds, what configuration is mandatory, and what markup comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Hidden,
    Password,
    Textdate,
    Upload,
    Captcha,
}

impl ElementKind {
    /// Resolve a type tag used by [`Form::add`](crate::form::Form::add).
    ///
    /// Captcha is not reachable by tag: it needs a verifier and is added
    /// through `Form::add_captcha`.
    pub fn from_tag(tag: &str) -> Result<Self, FormError> {
        match tag {
            "text" => Ok(ElementKind::Text),
            "hidden" => Ok(ElementKind::Hidden),
            "password" => Ok(ElementKind::Password),
            "textdate" => Ok(ElementKind::Textdate),
            "upload" => Ok(ElementKind::Upload),
            other => Err(FormError::UnknownElementType(other.to_string())),
        }
    }

    /// Settings every element of this kind starts with
    pub fn default_configuration(&self) -> Configuration {
        match self {
            ElementKind::Password => Configuration::new()
                .with("encrypt", true)
                .with("fill_value", false)
                .with("fill_value_iferror", true),
            ElementKind::Textdate => Configuration::new().with("format", "%Y-%m-%d"),
            _ => Configuration::new(),
        }
    }

    /// Construction-time configuration check
    pub fn validate_configuration(
        &self,
        name: &str,
        configuration: &Configuration,
    ) -> Result<(), FormError> {
        if *self == ElementKind::Upload && !configuration.contains("directory") {
            return Err(FormError::BadConfiguration {
                element: name.to_string(),
                setting: "directory".to_string(),
            });
        }
        Ok(())
    }

    /// Whether elements of this kind take part in search clauses
    pub fn searchable(&self) -> bool {
        !matches!(self, ElementKind::Password | ElementKind::Upload)
    }

    /// True when a freshly set value must be hashed once the form validates
    pub fn defers_hashing(&self, configuration: &Configuration, value: &FieldValue) -> bool {
        *self == ElementKind::Password
            && configuration.get_bool_or("encrypt", true)
            && !value.is_empty()
    }

    /// Normalize a submitted raw value for this kind
    pub fn bind(&self, raw: FieldValue, configuration: &Configuration) -> FieldValue {
        match self {
            ElementKind::Upload => match raw {
                FieldValue::Text(s) if s.is_empty() => FieldValue::Files(vec![]),
                FieldValue::Text(s) => FieldValue::Files(vec![s]),
                files => files,
            },
            ElementKind::Textdate => {
                let format = configuration.get_str("format").unwrap_or("%Y-%m-%d");
                let text = raw.as_text();
                if !text.is_empty()
                    && chrono::NaiveDate::parse_from_str(text, format).is_err()
                {
                    tracing::debug!(value = text, format, "date input does not match format");
                }
                raw
            }
            _ => raw,
        }
    }

    /// Minimal markup for this element
    pub fn render(&self, element: &Element, ctx: RenderContext) -> String {
        match self {
            ElementKind::Text => format!(
                "<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\"{} />",
                element.html_id(),
                element.absolute_name(),
                element.value().as_text(),
                element.attributes(ctx),
            ),
            ElementKind::Hidden => format!(
                "<input type=\"hidden\" id=\"{}\" name=\"{}\" value=\"{}\" />",
                element.html_id(),
                element.absolute_name(),
                element.value().as_text(),
            ),
            ElementKind::Password => {
                let fill = element.configuration().get_bool_or("fill_value", false)
                    || (ctx.submitted
                        && !ctx.form_valid
                        && element
                            .configuration()
                            .get_bool_or("fill_value_iferror", true));
                let value_attr = if fill {
                    format!(" value=\"{}\"", element.value().as_text())
                } else {
                    String::new()
                };
                format!(
                    "<input type=\"password\" id=\"{}\" name=\"{}\"{}{} />",
                    element.html_id(),
                    element.absolute_name(),
                    element.attributes(ctx),
                    value_attr,
                )
            }
            ElementKind::Textdate => format!(
                "<input type=\"date\" id=\"{}\" name=\"{}\" value=\"{}\"{} />",
                element.html_id(),
                element.absolute_name(),
                element.value().as_text(),
                element.attributes(ctx),
            ),
            ElementKind::Upload => render_upload(element, ctx),
            ElementKind::Captcha => {
                let sid = Uuid::new_v4().simple().to_string();
                format!(
                    "<img id=\"{id}-image\" src=\"/captcha/show?sid={sid}\" alt=\"CAPTCHA Image\" />\
                     <input type=\"text\" id=\"{id}\" name=\"{name}\" value=\"{value}\"{attrs} />",
                    id = element.html_id(),
                    sid = sid,
                    name = element.absolute_name(),
                    value = element.value().as_text(),
                    attrs = element.attributes(ctx),
                )
            }
        }
    }
}

fn render_upload(element: &Element, ctx: RenderContext) -> String {
    let mut output = String::new();
    let value = element.value();
    match element.upload_state() {
        UploadState::Pending => {
            for file in value.files() {
                output.push_str(&format!(
                    "<input type=\"hidden\" id=\"{id}-temporary-{file}\" \
                     name=\"{name}[temporary][]\" value=\"{file}\" />",
                    id = element.html_id(),
                    name = element.absolute_name(),
                    file = file,
                ));
            }
        }
        UploadState::Done | UploadState::Empty => {
            if element.show_link() {
                for file in value.files() {
                    output.push_str(&format!(
                        "<a target=\"_blank\" href=\"{dir}{file}\">{file}</a> ",
                        dir = element.upload_directory(),
                        file = file,
                    ));
                }
            }
        }
    }
    let multiple = if element.is_multiple() {
        " multiple=\"multiple\""
    } else {
        ""
    };
    output.push_str(&format!(
        "<input type=\"file\"{multiple} id=\"{id}-upload\" name=\"{name}[upload][]\"{attrs} />",
        multiple = multiple,
        id = element.html_id(),
        name = element.absolute_name(),
        attrs = element.attributes(ctx),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tag_dispatch {
        use super::*;

        #[test]
        fn test_known_tags_resolve() {
            assert_eq!(ElementKind::from_tag("text").unwrap(), ElementKind::Text);
            assert_eq!(ElementKind::from_tag("hidden").unwrap(), ElementKind::Hidden);
            assert_eq!(
                ElementKind::from_tag("password").unwrap(),
                ElementKind::Password
            );
            assert_eq!(
                ElementKind::from_tag("textdate").unwrap(),
                ElementKind::Textdate
            );
            assert_eq!(ElementKind::from_tag("upload").unwrap(), ElementKind::Upload);
        }

        #[test]
        fn test_unknown_tag_is_dispatch_error() {
            let err = ElementKind::from_tag("wysiwyg").unwrap_err();
            assert!(matches!(err, FormError::UnknownElementType(t) if t == "wysiwyg"));
        }

        #[test]
        fn test_captcha_is_not_reachable_by_tag() {
            assert!(ElementKind::from_tag("captcha").is_err());
        }
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_password_defaults() {
            let defaults = ElementKind::Password.default_configuration();
            assert_eq!(defaults.get_bool("encrypt"), Some(true));
            assert_eq!(defaults.get_bool("fill_value"), Some(false));
            assert_eq!(defaults.get_bool("fill_value_iferror"), Some(true));
        }

        #[test]
        fn test_text_has_no_defaults() {
            let defaults = ElementKind::Text.default_configuration();
            assert_eq!(defaults, Configuration::new());
        }
    }

    mod configuration_check {
        use super::*;

        #[test]
        fn test_upload_requires_directory() {
            let err = ElementKind::Upload
                .validate_configuration("avatar", &Configuration::new())
                .unwrap_err();
            assert!(matches!(
                err,
                FormError::BadConfiguration { element, setting }
                    if element == "avatar" && setting == "directory"
            ));
        }

        #[test]
        fn test_upload_with_directory_is_fine() {
            let config = Configuration::new().with("directory", "uploads/avatars");
            assert!(ElementKind::Upload
                .validate_configuration("avatar", &config)
                .is_ok());
        }
    }

    mod searchable {
        use super::*;

        #[test]
        fn test_password_and_upload_are_not_searchable() {
            assert!(!ElementKind::Password.searchable());
            assert!(!ElementKind::Upload.searchable());
            assert!(ElementKind::Text.searchable());
            assert!(ElementKind::Textdate.searchable());
        }
    }

    mod deferred_hashing {
        use super::*;

        #[test]
        fn test_password_with_encrypt_defers() {
            let config = ElementKind::Password.default_configuration();
            assert!(ElementKind::Password.defers_hashing(&config, &"secret".into()));
        }

        #[test]
        fn test_empty_value_does_not_defer() {
            let config = ElementKind::Password.default_configuration();
            assert!(!ElementKind::Password.defers_hashing(&config, &"".into()));
        }

        #[test]
        fn test_encrypt_false_does_not_defer() {
            let config = Configuration::new().with("encrypt", false);
            assert!(!ElementKind::Password.defers_hashing(&config, &"secret".into()));
        }

        #[test]
        fn test_other_kinds_never_defer() {
            let config = Configuration::new();
            assert!(!ElementKind::Text.defers_hashing(&config, &"secret".into()));
        }
    }

    mod binding {
        use super::*;

        #[test]
        fn test_upload_wraps_single_file_name() {
            let bound = ElementKind::Upload.bind("photo.png".into(), &Configuration::new());
            assert_eq!(bound, FieldValue::Files(vec!["photo.png".to_string()]));
        }

        #[test]
        fn test_upload_empty_text_is_empty_list() {
            let bound = ElementKind::Upload.bind("".into(), &Configuration::new());
            assert_eq!(bound, FieldValue::Files(vec![]));
        }

        #[test]
        fn test_upload_keeps_file_lists() {
            let files = FieldValue::Files(vec!["a.png".to_string(), "b.png".to_string()]);
            let bound = ElementKind::Upload.bind(files.clone(), &Configuration::new());
            assert_eq!(bound, files);
        }

        #[test]
        fn test_text_passes_through() {
            let bound = ElementKind::Text.bind("hello".into(), &Configuration::new());
            assert_eq!(bound, FieldValue::Text("hello".to_string()));
        }

        #[test]
        fn test_textdate_keeps_raw_value() {
            let config = ElementKind::Textdate.default_configuration();
            let bound = ElementKind::Textdate.bind("2026-01-31".into(), &config);
            assert_eq!(bound, FieldValue::Text("2026-01-31".to_string()));
        }
    }
}
