//! Error types for the review-inputs CLI.
//!
//! Rendering itself cannot fail; these errors come from reading context
//! files and templates, parsing flags, and writing output.

use crate::exit_codes;
use crate::prompt::FieldParseError;
use thiserror::Error;

/// Main error type for review-inputs operations.
#[derive(Error, Debug)]
pub enum InputsError {
    /// User provided invalid arguments or an unreadable input.
    #[error("{0}")]
    UserError(String),

    /// A context file could not be parsed.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// Output could not be written.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl InputsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputsError::UserError(_) => exit_codes::USER_ERROR,
            InputsError::ParseError(_) => exit_codes::PARSE_FAILURE,
            InputsError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

impl From<FieldParseError> for InputsError {
    fn from(err: FieldParseError) -> Self {
        InputsError::UserError(err.to_string())
    }
}

/// Result type alias for review-inputs operations.
pub type Result<T> = std::result::Result<T, InputsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = InputsError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = InputsError::ParseError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = InputsError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn field_parse_error_is_user_error() {
        let err: InputsError = "author".parse::<crate::prompt::Field>().unwrap_err().into();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().starts_with("unknown field 'author'"));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = InputsError::ParseError("invalid type".to_string());
        assert_eq!(err.to_string(), "Parse failed: invalid type");

        let err = InputsError::IoError("permission denied".to_string());
        assert_eq!(err.to_string(), "I/O failed: permission denied");
    }
}
