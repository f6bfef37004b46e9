//! Argument contract checks.
//!
//! Each check returns the validated value (or `()`) on success so it can be
//! used inline with `?`. Absent values are modelled as `Option::None`.

use crate::error::{ContractError, ContractResult};

const CONTRACT_VIOLATED: &str = "contract violated";

/// Unwrap a required value.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] if `value` is `None`.
pub fn non_null<T>(value: Option<T>) -> ContractResult<T> {
    value.ok_or(ContractError::NullArgument { name: None })
}

/// Unwrap a required value, naming it in the error.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] carrying `name` if `value` is `None`.
pub fn non_null_named<T>(value: Option<T>, name: &str) -> ContractResult<T> {
    value.ok_or_else(|| ContractError::null_argument(name))
}

/// Unwrap every value in `values`, stopping at the first absent one.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] if any value is `None`.
pub fn non_nulls<T, I>(values: I) -> ContractResult<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().map(non_null).collect()
}

/// Check a boolean requirement.
///
/// # Errors
///
/// Returns [`ContractError::InvalidArgument`] if `predicate` is false.
pub fn require(predicate: bool) -> ContractResult<()> {
    require_that(predicate, CONTRACT_VIOLATED)
}

/// Check a boolean requirement with a caller-supplied message.
///
/// # Errors
///
/// Returns [`ContractError::InvalidArgument`] carrying `message` if
/// `predicate` is false.
pub fn require_that(predicate: bool, message: impl Into<String>) -> ContractResult<()> {
    if predicate {
        Ok(())
    } else {
        Err(ContractError::InvalidArgument(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_null_returns_value() {
        assert_eq!(non_null(Some("key")).unwrap(), "key");
    }

    #[test]
    fn test_non_null_rejects_none() {
        let err = non_null(None::<u8>).unwrap_err();
        assert_eq!(err, ContractError::NullArgument { name: None });
    }

    #[test]
    fn test_non_null_named_carries_name() {
        let err = non_null_named(None::<String>, "predicate").unwrap_err();
        assert_eq!(err.to_string(), "predicate cannot be null");

        let value = non_null_named(Some(3), "count").unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_non_nulls() {
        let values = non_nulls([Some(1), Some(2), Some(3)]).unwrap();
        assert_eq!(values, vec![1, 2, 3]);

        let err = non_nulls([Some(1), None, Some(3)]).unwrap_err();
        assert!(err.is_null_argument());

        let empty: Vec<u8> = non_nulls(Vec::<Option<u8>>::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_require() {
        assert!(require(true).is_ok());

        let err = require(false).unwrap_err();
        assert_eq!(err, ContractError::InvalidArgument(CONTRACT_VIOLATED.into()));
    }

    #[test]
    fn test_require_that_message() {
        assert!(require_that(1 < 2, "unused").is_ok());

        let err = require_that(false, "name cannot be blank").unwrap_err();
        assert_eq!(err.to_string(), "name cannot be blank");
    }
}
