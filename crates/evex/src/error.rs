use std::result::Result as StdResult;

use thiserror::Error;

/// Failure reported by a provider.
///
/// The contract defines a single failure shape: human-readable text. Input
/// validation errors, evaluation-time errors, and internal provider faults
/// all collapse into it; callers inspect the discriminant of the returned
/// [`Result`], not a category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EvalError {
    /// Human-readable description of the failure.
    message: String,
}

impl EvalError {
    /// Create a failure from a text description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and return its text.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for EvalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for EvalError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Result alias using the contract failure type.
pub type Result<T> = StdResult<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let err = EvalError::new("division by zero");
        assert_eq!(err.to_string(), "division by zero");
        assert_eq!(err.message(), "division by zero");
    }

    #[test]
    fn test_from_conversions() {
        let from_str: EvalError = "bad input".into();
        let from_string: EvalError = String::from("bad input").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.into_message(), "bad input");
    }
}
