//! Error taxonomy shared across the workspace.

use thiserror::Error;

/// Storage layer errors.
///
/// Absence of a record is not an error at this level; gateways signal it
/// with `Option`. `NotFound` exists for operations that require the
/// record to be present (update).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Playbook not found: {id}")]
    NotFound { id: String },

    #[error("I/O failure on {key}: {reason}")]
    Io { key: String, reason: String },

    #[error("Malformed record at {key}: {reason}")]
    Malformed { key: String, reason: String },
}

/// Authoring validation errors.
///
/// Enforced by the authoring surface only; storage and the API accept
/// any record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be at least {min} characters")]
    TitleTooShort { min: usize },

    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },
}

/// Master error type for VETBOOK operations.
#[derive(Debug, Clone, Error)]
pub enum VetbookError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for VETBOOK operations.
pub type VetbookResult<T> = Result<T, VetbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::NotFound {
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Playbook not found: abc");
    }

    #[test]
    fn test_master_error_wraps_validation() {
        let err: VetbookError = ValidationError::TitleTooShort { min: 3 }.into();
        assert!(matches!(
            err,
            VetbookError::Validation(ValidationError::TitleTooShort { min: 3 })
        ));
    }
}
