//! Recoverable errors: configuration I/O, YAML parsing, and invalid values.
//!
//! Broken table invariants are not represented here; those are programming
//! errors and panic at the point of use.

use std::fmt;
use std::io;

/// Errors surfaced to the caller or CLI user.
#[derive(Debug)]
pub enum AdsrError {
    /// Reading a config file or writing the report failed.
    Io(io::Error),
    /// The config file is not valid YAML for [`crate::config::ReportConfig`].
    Yaml(serde_yaml::Error),
    /// A value is outside its allowed range.
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl AdsrError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        AdsrError::Invalid {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for AdsrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdsrError::Io(e) => write!(f, "I/O error: {e}"),
            AdsrError::Yaml(e) => write!(f, "config error: {e}"),
            AdsrError::Invalid { field, message } => write!(f, "invalid {field}: {message}"),
        }
    }
}

impl std::error::Error for AdsrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdsrError::Io(e) => Some(e),
            AdsrError::Yaml(e) => Some(e),
            AdsrError::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for AdsrError {
    fn from(e: io::Error) -> Self {
        AdsrError::Io(e)
    }
}

impl From<serde_yaml::Error> for AdsrError {
    fn from(e: serde_yaml::Error) -> Self {
        AdsrError::Yaml(e)
    }
}
