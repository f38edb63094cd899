//! Error types for adf-builder

use std::fmt;
use thiserror::Error;

/// Broad classification used by callers to decide who is at fault
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required constructor argument was missing (integration bug)
    Argument,
    /// The document content violates the ADF schema
    Schema,
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArgument {
        element: String,
        argument: String,
    },
    InvalidValue {
        attribute: String,
        value: String,
        allowed: String,
    },
    MissingElement {
        element: String,
        parent: String,
    },
    InvalidContent {
        element: String,
        value: String,
        allowed: String,
    },
    InvalidDate {
        element: String,
        value: String,
    },
    InvalidCountry {
        value: String,
    },
    OutOfRange {
        field: String,
        value: String,
        min: i64,
        max: i64,
    },
    Constraint {
        element: String,
        reason: String,
    },
    MaxDepthExceeded {
        max: u16,
    },
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::Argument,
            _ => ErrorCategory::Schema,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { element, argument } => {
                write!(f, "{argument} is required for {element}")
            }
            Self::InvalidValue {
                attribute,
                value,
                allowed,
            } => write!(f, "Invalid value for {attribute}: {value}. Allowed: {allowed}"),
            Self::MissingElement { element, parent } => {
                write!(f, "Missing required Element: {element} in {parent}")
            }
            Self::InvalidContent {
                element,
                value,
                allowed,
            } => write!(f, "Invalid {element}: {value}. Allowed: {allowed}"),
            Self::InvalidDate { element, value } => {
                write!(f, "Invalid ISO 8601 date for {element}: {value}")
            }
            Self::InvalidCountry { value } => write!(f, "Invalid country code: {value}"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be between {min} and {max}, got {value}"),
            Self::Constraint { reason, .. } => f.write_str(reason),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
        }
    }
}

/// Main error type for adf-builder
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    path: Option<String>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            path: None,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: None,
            message: message.into(),
        }
    }

    /// Shorthand for a missing constructor argument
    pub fn missing_argument(element: &str, argument: &str) -> Self {
        Self::new(ErrorKind::MissingArgument {
            element: element.to_owned(),
            argument: argument.to_owned(),
        })
    }

    /// Shorthand for a bespoke cross-field rule violation
    pub fn constraint(element: &str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Constraint {
            element: element.to_owned(),
            reason: reason.into(),
        })
    }

    /// Attach the element path of the node that failed
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn is_argument_error(&self) -> bool {
        self.category() == ErrorCategory::Argument
    }

    pub fn is_schema_error(&self) -> bool {
        self.category() == ErrorCategory::Schema
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} (at {path})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Result type alias for adf-builder
pub type Result<T> = std::result::Result<T, Error>;
