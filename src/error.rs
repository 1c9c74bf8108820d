//! Error types for the portray CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for portray operations.
///
/// Each variant maps to a specific exit code so scripts can distinguish
/// user mistakes from schema defects and I/O failures.
#[derive(Error, Debug)]
pub enum PortrayError {
    /// User provided invalid arguments, an unknown field key, or a value
    /// that cannot be coerced to the field's kind.
    #[error("{0}")]
    UserError(String),

    /// The field registry is internally inconsistent (duplicate or
    /// prefix-colliding keys).
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// A values file or output file could not be read or written.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl PortrayError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PortrayError::UserError(_) => exit_codes::USER_ERROR,
            PortrayError::SchemaError(_) => exit_codes::SCHEMA_ERROR,
            PortrayError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for portray operations.
pub type Result<T> = std::result::Result<T, PortrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PortrayError::UserError("unknown field".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn schema_error_has_correct_exit_code() {
        let err = PortrayError::SchemaError("duplicate key".to_string());
        assert_eq!(err.exit_code(), exit_codes::SCHEMA_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PortrayError::IoError("write failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PortrayError::UserError("unknown field key 'skin.tones'".to_string());
        assert_eq!(err.to_string(), "unknown field key 'skin.tones'");

        let err = PortrayError::SchemaError("key 'a' is a prefix of 'a.b'".to_string());
        assert_eq!(err.to_string(), "Schema error: key 'a' is a prefix of 'a.b'");
    }
}
