use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while setting up lookups.
///
/// These never appear inside a [`LookupResult`](super::LookupResult); a query
/// that fails carries a [`LookupError`] instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SondaError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Lookup configuration is unusable (zero timeout, empty provider list).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Classification of a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Fails static structural checks before any lookup.
    InvalidFormat,
    /// Well-formed, but the check digits do not match.
    ChecksumMismatch,
    /// Every remote provider failed, timed out or had no data.
    LookupUnavailable,
    /// No classification rule matched.
    Unclassifiable,
    /// A batch task panicked or was cancelled.
    TaskFailed,
}

impl ErrorKind {
    /// Stable snake_case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::LookupUnavailable => "lookup_unavailable",
            Self::Unclassifiable => "unclassifiable",
            Self::TaskFailed => "task_failed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-query failure with its kind and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct LookupError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl LookupError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Structural check failed.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    /// Check digits did not match.
    pub fn checksum_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ChecksumMismatch, message)
    }

    /// All providers exhausted.
    pub fn lookup_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LookupUnavailable, message)
    }

    /// No rule matched the query.
    pub fn unclassifiable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unclassifiable, message)
    }

    /// A batch task died before producing a result.
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TaskFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = LookupError::invalid_format("CPF must have 11 digits");
        assert_eq!(err.to_string(), "invalid_format: CPF must have 11 digits");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::LookupUnavailable).unwrap();
        assert_eq!(json, "\"lookup_unavailable\"");
    }
}
