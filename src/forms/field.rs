//! A single form input with its validation rules and interaction state.

use regex::Regex;
use std::fmt;

const BASE_INPUT_CLASSES: &str = "appearance-none relative block w-full px-3 py-2 border placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:z-10 sm:text-sm";
const INVALID_INPUT_CLASSES: &str = "border-red-500 focus:ring-red-500 focus:border-red-500";
const VALID_INPUT_CLASSES: &str = "border-gray-300 focus:ring-indigo-500 focus:border-indigo-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

/// A rule violation. Messages need the field label, see [`FieldError::message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("value is required")]
    Required,
    #[error("value is not a valid email")]
    Email,
    #[error("value is shorter than {required} characters")]
    MinLength { required: usize, actual: usize },
    #[error("value is longer than {required} characters")]
    MaxLength { required: usize, actual: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl FieldError {
    #[must_use]
    pub fn message(&self, label: &str) -> String {
        match self {
            Self::Required => format!("{label} is required"),
            Self::Email => format!("{label} must be a valid email"),
            Self::MinLength { required, .. } => {
                format!("{label} must be at least {required} characters")
            }
            Self::MaxLength { required, .. } => {
                format!("{label} must be at most {required} characters")
            }
            Self::PasswordMismatch => "Passwords do not match".to_string(),
        }
    }
}

/// Basic email shape check; empty input is left to [`Rule::Required`].
#[must_use]
pub fn valid_email(value: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(value))
}

impl Rule {
    fn check(self, value: &str) -> Option<FieldError> {
        let length = value.chars().count();
        match self {
            Self::Required if value.is_empty() => Some(FieldError::Required),
            Self::Email if !value.is_empty() && !valid_email(value) => Some(FieldError::Email),
            Self::MinLength(required) if length > 0 && length < required => {
                Some(FieldError::MinLength {
                    required,
                    actual: length,
                })
            }
            Self::MaxLength(required) if length > required => Some(FieldError::MaxLength {
                required,
                actual: length,
            }),
            _ => None,
        }
    }

    // Order in which violations are reported.
    const fn rank(self) -> u8 {
        match self {
            Self::Required => 0,
            Self::Email => 1,
            Self::MinLength(_) => 2,
            Self::MaxLength(_) => 3,
        }
    }
}

#[derive(Clone)]
pub struct Field {
    id: &'static str,
    label: &'static str,
    input_type: InputType,
    rules: Vec<Rule>,
    value: String,
    touched: bool,
    dirty: bool,
    cross_field: Option<FieldError>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.input_type == InputType::Password {
            "[REDACTED]"
        } else {
            self.value.as_str()
        };
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("input_type", &self.input_type)
            .field("rules", &self.rules)
            .field("value", &value)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .field("cross_field", &self.cross_field)
            .finish()
    }
}

impl Field {
    #[must_use]
    pub fn new(id: &'static str, label: &'static str, input_type: InputType) -> Self {
        Self {
            id,
            label,
            input_type,
            rules: Vec::new(),
            value: String::new(),
            touched: false,
            dirty: false,
            cross_field: None,
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self.rules.sort_by_key(|rule| rule.rank());
        self
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    #[must_use]
    pub fn touched(&self) -> bool {
        self.touched
    }

    #[must_use]
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// User typed into the field.
    pub fn input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
    }

    /// Field lost focus.
    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Sets or clears an error owned by a form-level validator.
    pub fn set_cross_field_error(&mut self, error: Option<FieldError>) {
        self.cross_field = error;
    }

    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(&self.value))
            .chain(self.cross_field.clone())
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Errors are only surfaced once the user interacted with the field.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.is_valid() && (self.touched || self.dirty)
    }

    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors()
            .iter()
            .map(|error| error.message(self.label))
            .collect()
    }

    #[must_use]
    pub fn input_classes(&self) -> String {
        let state = if self.has_errors() {
            INVALID_INPUT_CLASSES
        } else {
            VALID_INPUT_CLASSES
        };
        format!("{BASE_INPUT_CLASSES} {state}")
    }
}
