//! The single boolean check shared by `<If>` blocks and the `If` native.

use crate::errors::{mismatched_type, EvalError};
use crate::value::{EvalValue, ValueType};

/// Name of the parameter that carries a condition.
pub const CONDITION_PARAM: &str = "condition";

/// Interpret an evaluated condition.
///
/// Only booleans are accepted; there is no truthiness coercion.
pub fn expect_boolean(value: &EvalValue) -> Result<bool, EvalError> {
    match value.resolved() {
        EvalValue::Boolean(b) => Ok(*b),
        other => Err(mismatched_type(ValueType::Boolean, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn booleans_pass_through() {
        assert_eq!(expect_boolean(&EvalValue::Boolean(true)), Ok(true));
        assert_eq!(expect_boolean(&EvalValue::Boolean(false)), Ok(false));
    }

    #[test]
    fn identifier_wrapped_boolean_is_accepted() {
        let value = EvalValue::identifier(EvalValue::Boolean(true));
        assert_eq!(expect_boolean(&value), Ok(true));
    }

    #[test]
    fn no_truthiness_for_numbers_or_strings() {
        for value in [EvalValue::Number(1), EvalValue::string("true"), EvalValue::Undefined] {
            let found = value.value_type();
            let err = expect_boolean(&value).unwrap_err();
            assert_eq!(
                err.kind(),
                &EvalErrorKind::MismatchedType {
                    expected: ValueType::Boolean,
                    found,
                }
            );
        }
    }
}
