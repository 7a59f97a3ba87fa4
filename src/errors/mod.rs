//! Error handling utilities for the moodcal application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a journal form refuses to submit.
///
/// Both the capture form and the calendar's modal form return these instead of
/// dropping the submission, so a front end can show what is missing.
///
/// # Examples
///
/// ```
/// use moodcal::errors::ValidationError;
///
/// let error = ValidationError::SentenceTooLong { len: 300, max: 280 };
/// assert!(format!("{}", error).contains("300"));
/// assert!(format!("{}", error).contains("280"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The sentence is empty or only whitespace.
    #[error("Please write a sentence about your day.")]
    EmptySentence,

    /// No mood was picked.
    #[error("Please pick a mood (terrible, bad, okay, good or great).")]
    MissingMood,

    /// The sentence exceeds the character limit.
    #[error("Sentence is {len} characters long; keep it to {max} or fewer.")]
    SentenceTooLong {
        /// Length of the submitted sentence in characters
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// Errors raised when an operation does not fit the current form state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The day form is not open for editing.
    #[error("The day form is not open for editing. Select a day without an entry first.")]
    NotEditing,
}

/// Represents errors that can occur when attempting to lock the entry store.
///
/// # Examples
///
/// ```
/// use moodcal::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/entries.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the store is already locked by another process.
    #[error("Entry store is being written by another process: {path}. Please retry once the other moodcal command finishes.")]
    FileBusy {
        /// The path to the lock file that is held
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors reading or writing the entry document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("Entry document {path} could not be parsed: {source}")]
    Parse {
        /// Path of the document
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// The document was written by an incompatible version.
    #[error("Entry document version {found} is not supported (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the document
        found: u32,
        /// Version this build reads and writes
        expected: u32,
    },

    /// An entry key is not a `YYYY-MM-DD` date.
    #[error("Entry key '{key}' is not a YYYY-MM-DD date")]
    InvalidDate {
        /// The offending key
        key: String,
    },

    /// An entry names a mood outside the fixed set.
    #[error("Entry for {date} has unknown mood '{label}'")]
    UnknownMood {
        /// Date key of the entry
        date: String,
        /// The unrecognized mood label
        label: String,
    },

    /// An entry failed validation on load.
    #[error("Entry for {date} is invalid: {source}")]
    InvalidEntry {
        /// Date key of the entry
        date: String,
        /// The validation failure
        #[source]
        source: ValidationError,
    },

    /// The document could not be serialized.
    #[error("Failed to serialize entries: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents all possible errors that can occur in the moodcal application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// ```
/// use moodcal::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic (e.g., invalid date formats).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// A form submission was rejected.
    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    /// An operation did not fit the current form state.
    #[error("Form state error: {0}")]
    Flow(#[from] FlowError),

    /// Errors related to locking the entry store.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors related to the entry document.
    #[error("Entry store error: {0}")]
    Store(#[from] StoreError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let journal_error = AppError::Journal("Invalid date".to_string());
        assert_eq!(
            format!("{}", journal_error),
            "Journal logic error: Invalid date"
        );

        let app_error = AppError::Validation(ValidationError::MissingMood);
        assert!(format!("{}", app_error).contains("Invalid entry"));
        assert!(format!("{}", app_error).contains("pick a mood"));

        let lock_error = LockError::FileBusy {
            path: PathBuf::from("/path/to/entries.lock"),
        };
        let app_error = AppError::Lock(lock_error);
        assert!(format!("{}", app_error).contains("File locking error"));
        assert!(format!("{}", app_error).contains("/path/to/entries.lock"));
    }

    #[test]
    fn test_validation_error_messages() {
        assert!(ValidationError::EmptySentence
            .to_string()
            .contains("write a sentence"));
        assert!(ValidationError::MissingMood.to_string().contains("mood"));

        let message = ValidationError::SentenceTooLong { len: 301, max: 280 }.to_string();
        assert!(message.contains("301"));
        assert!(message.contains("280"));
    }

    #[test]
    fn test_store_error_messages() {
        let error = StoreError::UnknownMood {
            date: "2025-05-22".to_string(),
            label: "Ecstatic".to_string(),
        };
        assert!(error.to_string().contains("2025-05-22"));
        assert!(error.to_string().contains("Ecstatic"));

        let error = StoreError::UnsupportedVersion {
            found: 9,
            expected: 1,
        };
        assert!(error.to_string().contains('9'));

        let error = StoreError::InvalidDate {
            key: "tomorrow".to_string(),
        };
        assert!(error.to_string().contains("tomorrow"));
    }

    #[test]
    fn test_lock_error_source_chaining() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = LockError::AcquisitionFailed {
            path: PathBuf::from("/path/to/entries.lock"),
            source: io_error,
        };

        let source = error
            .source()
            .expect("AcquisitionFailed should have a source");
        let source_io_error = source
            .downcast_ref::<io::Error>()
            .expect("Source should be an io::Error");
        assert_eq!(source_io_error.kind(), io::ErrorKind::PermissionDenied);

        let busy = LockError::FileBusy {
            path: PathBuf::from("/path/to/entries.lock"),
        };
        assert!(busy.source().is_none());
    }

    #[test]
    fn test_store_error_source_chaining() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = StoreError::Parse {
            path: PathBuf::from("/journal/entries.json"),
            source: parse_error,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("/journal/entries.json"));

        let error = StoreError::InvalidEntry {
            date: "2025-06-01".to_string(),
            source: ValidationError::EmptySentence,
        };
        let source = error.source().expect("InvalidEntry should have a source");
        assert!(source.downcast_ref::<ValidationError>().is_some());
    }

    #[test]
    fn test_conversions_to_app_error() {
        let app_error: AppError = ValidationError::EmptySentence.into();
        assert!(matches!(
            app_error,
            AppError::Validation(ValidationError::EmptySentence)
        ));

        let app_error: AppError = FlowError::NotEditing.into();
        assert!(matches!(app_error, AppError::Flow(FlowError::NotEditing)));

        let app_error: AppError = StoreError::UnsupportedVersion {
            found: 2,
            expected: 1,
        }
        .into();
        assert!(matches!(app_error, AppError::Store(_)));
    }

    #[test]
    fn test_result_combinators() {
        let io_result: Result<(), io::Error> = Err(io::Error::other("test error"));
        let app_result: AppResult<()> = io_result.map_err(AppError::Io);

        match app_result {
            Err(AppError::Io(inner)) => {
                assert_eq!(inner.kind(), io::ErrorKind::Other);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }
}
