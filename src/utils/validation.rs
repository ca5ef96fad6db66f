//! Command-line argument validation.
//!
//! These functions are used as clap `value_parser`s, so a failure is reported
//! as a usage error before any input is read.

use std::path::PathBuf;

/// Maximum length of an output file prefix
pub const MAX_PREFIX_LENGTH: usize = 200;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("'{0}' does not exist or is not a regular file")]
    NotAFile(String),
    #[error("'{0}' exists and is not a directory")]
    NotADirectory(String),
    #[error("Empty prefix provided")]
    EmptyPrefix,
    #[error("Prefix too long: exceeds {MAX_PREFIX_LENGTH} characters")]
    PrefixTooLong,
    #[error("Invalid prefix '{0}': contains path separators or control characters")]
    InvalidPrefix(String),
}

/// Accept a path only if it names an existing regular file.
///
/// # Errors
///
/// Returns `UsageError::NotAFile` otherwise.
pub fn existing_file(value: &str) -> Result<PathBuf, UsageError> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(UsageError::NotAFile(value.to_string()))
    }
}

/// Accept a path that is either a directory or does not exist yet.
///
/// # Errors
///
/// Returns `UsageError::NotADirectory` if something other than a directory
/// already lives at the path.
pub fn output_dir(value: &str) -> Result<PathBuf, UsageError> {
    let path = PathBuf::from(value);
    if path.exists() && !path.is_dir() {
        return Err(UsageError::NotADirectory(value.to_string()));
    }
    Ok(path)
}

/// Validate an output file prefix.
///
/// The prefix becomes the start of every report file name, so it must be a
/// single path component.
///
/// # Examples
///
/// ```
/// use hap_groups::utils::validation::{output_prefix, UsageError};
///
/// assert_eq!(output_prefix("run-1").unwrap(), "run-1");
/// assert_eq!(output_prefix(""), Err(UsageError::EmptyPrefix));
/// assert!(output_prefix("../run").is_err());
/// ```
///
/// # Errors
///
/// Returns `UsageError::EmptyPrefix`, `UsageError::PrefixTooLong` or
/// `UsageError::InvalidPrefix`.
pub fn output_prefix(value: &str) -> Result<String, UsageError> {
    if value.trim().is_empty() {
        return Err(UsageError::EmptyPrefix);
    }

    if value.chars().count() > MAX_PREFIX_LENGTH {
        return Err(UsageError::PrefixTooLong);
    }

    if value.contains('/') || value.contains('\\') || value.chars().any(char::is_control) {
        return Err(UsageError::InvalidPrefix(value.to_string()));
    }

    Ok(value.to_string())
}
