//! Error taxonomy for catalog persistence
//!
//! Two kinds of failure exist: a caller passed no usable path, or the file
//! system / JSON layer failed. The second kind is a single variant; whether the
//! file was unreadable or its content unparseable is only visible through the
//! wrapped cause.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to {action} catalog file {}: {source}", .path.display())]
    Storage {
        action: StorageAction,
        path: PathBuf,
        #[source]
        source: StorageCause,
    },
}

/// Underlying cause of a storage failure
#[derive(Error, Debug)]
pub enum StorageCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Read,
    Write,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAction::Read => write!(f, "read"),
            StorageAction::Write => write!(f, "write"),
        }
    }
}

impl CatalogError {
    pub(crate) fn storage(
        action: StorageAction,
        path: impl Into<PathBuf>,
        source: impl Into<StorageCause>,
    ) -> Self {
        CatalogError::Storage {
            action,
            path: path.into(),
            source: source.into(),
        }
    }

    /// True for failures that are meant to be propagated, not handled
    pub fn is_fatal(&self) -> bool {
        matches!(self, CatalogError::Storage { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message_names_action_and_path() {
        let err = CatalogError::storage(
            StorageAction::Write,
            "missing/catalog.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );

        let msg = err.to_string();
        assert!(msg.contains("write"));
        assert!(msg.contains("missing/catalog.json"));
        assert!(msg.contains("no such directory"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_argument_is_not_fatal() {
        let err = CatalogError::InvalidArgument("path cannot be empty".to_string());
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Invalid argument: path cannot be empty");
    }

    #[test]
    fn test_storage_error_exposes_cause() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::storage(StorageAction::Read, "bad.json", json_err);

        let source = err.source().expect("storage errors carry a cause");
        assert!(source.to_string().contains("EOF"));
        assert!(matches!(
            err,
            CatalogError::Storage { source: StorageCause::Json(_), .. }
        ));
    }
}
