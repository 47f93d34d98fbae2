//! Error types for the template store

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for template store operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while managing user templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Another user template already uses this name
    #[error("A template named '{0}' already exists")]
    DuplicateName(String),

    /// No user template has this id
    #[error("Template not found: {0}")]
    NotFound(String),

    /// A field failed validation
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// An import source is not a template collection
    #[error("Invalid template file: {0}")]
    InvalidFormat(String),

    /// Filesystem failure
    #[error("Failed to {operation} {target}: {source}")]
    Io {
        target: IoTarget,
        operation: IoOperation,
        source: std::io::Error,
    },

    /// The templates file is not a readable collection
    #[error("Templates file could not be parsed: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serializing a collection failed
    #[error("Failed to serialize templates: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The in-memory change was applied but writing it to disk failed
    #[error("Change kept for this session but not saved: {source}")]
    Persist { source: Box<TemplateError> },
}

/// What a filesystem operation was acting on.
///
/// Only user-chosen paths are rendered in messages; the storage directory
/// and the store's own file are described by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoTarget {
    StorageDir(PathBuf),
    StoreFile(PathBuf),
    External(PathBuf),
}

impl IoTarget {
    /// Get the underlying path
    pub fn path(&self) -> &Path {
        match self {
            IoTarget::StorageDir(path) | IoTarget::StoreFile(path) | IoTarget::External(path) => {
                path
            }
        }
    }
}

impl fmt::Display for IoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoTarget::StorageDir(_) => write!(f, "storage directory"),
            IoTarget::StoreFile(_) => write!(f, "templates file"),
            IoTarget::External(path) => write!(f, "{}", path.display()),
        }
    }
}

/// IO operation type for error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
    Create,
    Rename,
    Backup,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOperation::Read => write!(f, "read"),
            IoOperation::Write => write!(f, "write"),
            IoOperation::Create => write!(f, "create"),
            IoOperation::Rename => write!(f, "replace"),
            IoOperation::Backup => write!(f, "back up"),
        }
    }
}

impl TemplateError {
    /// Create an IO error
    pub fn io_error(target: IoTarget, operation: IoOperation, source: std::io::Error) -> Self {
        TemplateError::Io {
            target,
            operation,
            source,
        }
    }

    /// Create a field validation error
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        TemplateError::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        TemplateError::InvalidFormat(message.into())
    }

    /// Wrap a write failure that happened after an in-memory mutation
    pub fn persist(source: TemplateError) -> Self {
        TemplateError::Persist {
            source: Box::new(source),
        }
    }

    /// Whether the in-memory collection changed despite the error
    pub fn is_persist_failure(&self) -> bool {
        matches!(self, TemplateError::Persist { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths_are_not_rendered() {
        let err = TemplateError::io_error(
            IoTarget::StoreFile(PathBuf::from("/secret/storage/user-templates.json")),
            IoOperation::Write,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("write templates file"));
        assert!(!message.contains("/secret"));
    }

    #[test]
    fn test_external_paths_are_rendered() {
        let err = TemplateError::io_error(
            IoTarget::External(PathBuf::from("my-snippets.json")),
            IoOperation::Read,
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("my-snippets.json"));
    }

    #[test]
    fn test_persist_wraps_cause() {
        let cause = TemplateError::io_error(
            IoTarget::StoreFile(PathBuf::from("user-templates.json")),
            IoOperation::Rename,
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        let err = TemplateError::persist(cause);
        assert!(err.is_persist_failure());
        assert!(err.to_string().contains("disk full"));
    }
}
