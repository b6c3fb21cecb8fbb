//! Error types and centralized error constructors for the evaluator.
//!
//! Every failure the evaluator can report is an `EvalError` carrying a typed
//! `EvalErrorKind`. Callers match on the kind; the `Display` impl produces the
//! human-readable message the driver prints after `[RuntimeError]`.
//!
//! # Usage
//!
//! ```ignore
//! use ht_eval::errors::{undefined_identifier, division_by_zero};
//! ```

use ht_ir::BinaryOp;

use crate::value::{EvalValue, ValueType};

/// Result of evaluating a statement.
pub type EvalResult = Result<EvalValue, EvalError>;

/// Typed error category.
///
/// All of these are fatal: the run stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Lookup
    #[error("'{name}' is undefined")]
    UndefinedIdentifier { name: String },
    #[error("'{name}' is already declared")]
    DuplicateVariable { name: String },

    // Parameters
    #[error("expect '{param}' param for {tag}")]
    MissingParameter { tag: String, param: String },
    #[error("expect '{expected}' param for {tag} found '{found}'")]
    UnexpectedParameter {
        tag: String,
        expected: String,
        found: String,
    },

    // Types
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    TypeMismatch {
        op: BinaryOp,
        left: ValueType,
        right: ValueType,
    },
    #[error("expected {expected} found {found}")]
    MismatchedType {
        expected: ValueType,
        found: ValueType,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Expression engine
    #[error("operand stack underflow")]
    StackUnderflow,

    // Calls
    #[error("cannot resolve call to '{name}'")]
    UnresolvedCall { name: String },
    #[error("'{name}' is {found}, not a native function")]
    NotCallable { name: String, found: ValueType },

    /// The statement tree does not have the shape the evaluator requires.
    #[error("malformed program: {message}")]
    Structural { message: String },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// Structured error category.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// Consume the error, returning its category.
    pub fn into_kind(self) -> EvalErrorKind {
        self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Lookup Errors

#[cold]
pub fn undefined_identifier(name: &str) -> EvalError {
    EvalErrorKind::UndefinedIdentifier {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn duplicate_variable(name: &str) -> EvalError {
    EvalErrorKind::DuplicateVariable {
        name: name.to_string(),
    }
    .into()
}

// Parameter Errors

#[cold]
pub fn missing_parameter(tag: &str, param: &str) -> EvalError {
    EvalErrorKind::MissingParameter {
        tag: tag.to_string(),
        param: param.to_string(),
    }
    .into()
}

#[cold]
pub fn unexpected_parameter(tag: &str, expected: &str, found: &str) -> EvalError {
    EvalErrorKind::UnexpectedParameter {
        tag: tag.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
    .into()
}

// Type Errors

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &EvalValue, right: &EvalValue) -> EvalError {
    EvalErrorKind::TypeMismatch {
        op,
        left: left.value_type(),
        right: right.value_type(),
    }
    .into()
}

#[cold]
pub fn mismatched_type(expected: ValueType, found: &EvalValue) -> EvalError {
    EvalErrorKind::MismatchedType {
        expected,
        found: found.value_type(),
    }
    .into()
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

// Expression Engine Errors

#[cold]
pub fn stack_underflow() -> EvalError {
    EvalErrorKind::StackUnderflow.into()
}

// Call Errors

#[cold]
pub fn unresolved_call(name: &str) -> EvalError {
    EvalErrorKind::UnresolvedCall {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn not_callable(name: &str, found: &EvalValue) -> EvalError {
    EvalErrorKind::NotCallable {
        name: name.to_string(),
        found: found.value_type(),
    }
    .into()
}

// Structural Errors

#[cold]
pub fn structural(message: impl Into<String>) -> EvalError {
    EvalErrorKind::Structural {
        message: message.into(),
    }
    .into()
}
