//! Error type shared by the registry, the assembler, and the I/O layer.

use std::fmt::{Display, Formatter};
use std::io;

use crate::models::LoadId;

/// Errors raised while reading loads or building routes.
#[derive(Debug)]
pub enum DispatchError {
    /// The load file could not be opened or a read failed part way through.
    Io(io::Error),
    /// A line of the load file could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// Name of the offending field (`loadNumber`, `start`, `end`, ...).
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// No load with this identifier is registered.
    LoadNotFound(LoadId),
    /// A load with this identifier is already registered.
    DuplicateLoad(LoadId),
    /// Routes could not be rendered as JSON.
    Serialize(serde_json::Error),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Io(err) => write!(f, "I/O error: {err}"),
            DispatchError::Parse {
                line,
                field,
                reason,
            } => write!(f, "line {line}: invalid {field}: {reason}"),
            DispatchError::LoadNotFound(id) => write!(f, "load {id} not found"),
            DispatchError::DuplicateLoad(id) => write!(f, "load {id} is already registered"),
            DispatchError::Serialize(err) => write!(f, "cannot serialize routes: {err}"),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Io(err) => Some(err),
            DispatchError::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        DispatchError::Io(err)
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Serialize(err)
    }
}

/// Result alias used throughout the crate.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_names_line_and_field() {
        let err = DispatchError::Parse {
            line: 4,
            field: "startX",
            reason: "expected a number".to_string(),
        };
        assert_eq!(err.to_string(), "line 4: invalid startX: expected a number");
    }

    #[test]
    fn test_io_error_has_source() {
        let err = DispatchError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(DispatchError::LoadNotFound(7).to_string(), "load 7 not found");
        assert!(DispatchError::DuplicateLoad(3).source().is_none());
    }
}
