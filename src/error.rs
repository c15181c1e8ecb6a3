//! Error types for network construction, prediction and training.

use std::fmt;

/// Result type alias for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The caller broke the input contract: a vector of the wrong length,
    /// a non-binary target, or an empty example set.
    InvalidInput { context: String, reason: String },

    /// A layer size or training hyperparameter is out of range.
    InvalidConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl NetworkError {
    pub(crate) fn invalid_input(context: impl Into<String>, reason: impl Into<String>) -> Self {
        NetworkError::InvalidInput {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Length mismatch between a supplied vector and the configured layer size.
    pub(crate) fn dimension(context: impl Into<String>, what: &str, expected: usize, got: usize) -> Self {
        NetworkError::invalid_input(context, format!("expected {expected} {what}, got {got}"))
    }

    pub(crate) fn invalid_config(
        parameter: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        NetworkError::InvalidConfiguration {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NetworkError::InvalidInput { .. })
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidInput { context, reason } => {
                write!(f, "Invalid input ({context}): {reason}")
            }
            NetworkError::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => write!(
                f,
                "Invalid configuration: {parameter} = {value} ({reason})"
            ),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_message_names_both_lengths() {
        let err = NetworkError::dimension("predict", "inputs", 3, 2);
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input (predict): expected 3 inputs, got 2");
    }

    #[test]
    fn configuration_errors_are_not_input_errors() {
        let err = NetworkError::invalid_config("learning_rate", -1.0, "must be positive");
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: learning_rate = -1 (must be positive)"
        );
    }
}
