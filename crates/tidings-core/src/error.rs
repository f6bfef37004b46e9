//! Contract error types.

use thiserror::Error;

/// Errors raised when a caller violates an argument contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A required value was absent.
    #[error("{}", null_message(.name.as_deref()))]
    NullArgument {
        /// Name of the missing argument, when the caller supplied one.
        name: Option<String>,
    },

    /// An argument failed a boolean requirement.
    #[error("{0}")]
    InvalidArgument(String),
}

fn null_message(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{name} cannot be null"),
        None => "unexpected null argument".to_string(),
    }
}

impl ContractError {
    /// Create a null-argument error for a named argument.
    #[must_use]
    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument {
            name: Some(name.into()),
        }
    }

    /// Check if this error reports an absent value.
    #[must_use]
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }
}

/// Result type for contract checks.
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_argument_display() {
        let unnamed = ContractError::NullArgument { name: None };
        assert_eq!(unnamed.to_string(), "unexpected null argument");

        let named = ContractError::null_argument("listener");
        assert_eq!(named.to_string(), "listener cannot be null");
        assert!(named.is_null_argument());
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ContractError::InvalidArgument("level cannot be empty".into());
        assert_eq!(err.to_string(), "level cannot be empty");
        assert!(!err.is_null_argument());
    }
}
