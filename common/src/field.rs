//! # Field Errors
//!
//! Structured validation errors addressed by the path of the offending field.
//!
//! Errors render the way Kubernetes reports problems with API objects, e.g.
//! `podCIDR: Invalid value: "10.0.0.0": invalid CIDR address`.

use std::fmt;

/// A list of validation errors, in the order they were detected.
pub type ErrorList = Vec<FieldError>;

/// Dotted path to a field inside a configuration document (e.g. `calico.mode`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn new(root: &str) -> Self {
        Self {
            segments: vec![root.to_string()],
        }
    }

    /// Returns a new path with `name` appended.
    pub fn child(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.segments.push(name.to_string());
        next
    }

    /// Returns a new path pointing at element `idx` of a list field.
    pub fn index(&self, idx: usize) -> Self {
        let mut next = self.clone();
        match next.segments.last_mut() {
            Some(last) => last.push_str(&format!("[{idx}]")),
            None => next.segments.push(format!("[{idx}]")),
        }
        next
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// The category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A mandatory field is missing or empty.
    Required,
    /// The value is present but malformed.
    Invalid,
    /// The value is well-formed but not one of the allowed values.
    NotSupported,
    /// The value is fine on its own but not allowed in this combination.
    Forbidden,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::Required => "Required value",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::NotSupported => "Unsupported value",
            ErrorKind::Forbidden => "Forbidden",
        };
        f.write_str(text)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub path: FieldPath,
    /// The offending value, for kinds that report one.
    pub value: Option<String>,
    /// Human readable explanation.
    pub detail: String,
}

impl FieldError {
    pub fn required(path: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Required,
            path,
            value: None,
            detail: detail.into(),
        }
    }

    pub fn invalid(path: FieldPath, value: impl fmt::Display, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            path,
            value: Some(value.to_string()),
            detail: detail.into(),
        }
    }

    /// Builds an error listing every value that would have been accepted.
    pub fn not_supported(path: FieldPath, value: impl fmt::Display, supported: &[&str]) -> Self {
        let quoted: Vec<String> = supported.iter().map(|s| format!("{s:?}")).collect();
        Self {
            kind: ErrorKind::NotSupported,
            path,
            value: Some(value.to_string()),
            detail: format!("supported values: {}", quoted.join(", ")),
        }
    }

    pub fn forbidden(path: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Forbidden,
            path,
            value: None,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)?;
        if let Some(value) = &self.value {
            write!(f, ": {value:?}")?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
