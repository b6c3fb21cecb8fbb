//! Runtime values.
//!
//! `EvalValue` is a closed sum type: the payload always matches the type tag,
//! and every consumer pattern-matches instead of casting.

use std::fmt;

use ht_ir::Statement;

use crate::native::NativeFunctionValue;

/// Runtime type tag of an `EvalValue`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Undefined,
    String,
    Identifier,
    Number,
    Boolean,
    Function,
    NativeFunction,
    Array,
    Object,
}

impl ValueType {
    /// Name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::String => "string",
            Self::Identifier => "id",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::NativeFunction => "n-function",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-defined function.
///
/// Reserved: no construct in the language creates one yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
}

/// The value produced by evaluating any statement.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum EvalValue {
    #[default]
    Undefined,
    String(String),
    Number(i64),
    Boolean(bool),
    /// A call argument written as a bare name, holding the value it resolved to.
    Identifier(Box<EvalValue>),
    Function(FunctionValue),
    NativeFunction(NativeFunctionValue),
    Array(Vec<EvalValue>),
    Object(Vec<(String, EvalValue)>),
}

impl EvalValue {
    pub fn string(value: impl Into<String>) -> Self {
        EvalValue::String(value.into())
    }

    pub fn identifier(resolved: EvalValue) -> Self {
        EvalValue::Identifier(Box::new(resolved))
    }

    /// Returns the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Undefined => ValueType::Undefined,
            Self::String(_) => ValueType::String,
            Self::Number(_) => ValueType::Number,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Identifier(_) => ValueType::Identifier,
            Self::Function(_) => ValueType::Function,
            Self::NativeFunction(_) => ValueType::NativeFunction,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Look through `Identifier` wrappers to the underlying value.
    pub fn resolved(&self) -> &EvalValue {
        let mut value = self;
        while let Self::Identifier(inner) = value {
            value = inner;
        }
        value
    }

    /// Owned variant of [`EvalValue::resolved`].
    pub fn into_resolved(self) -> EvalValue {
        let mut value = self;
        loop {
            match value {
                Self::Identifier(inner) => value = *inner,
                other => return other,
            }
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for EvalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Identifier(inner) => write!(f, "{inner}"),
            Self::Function(func) => write!(f, "<function {}>", func.name),
            Self::NativeFunction(native) => write!(f, "<native {}>", native.name()),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A named binding owned by exactly one scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: EvalValue,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: EvalValue) -> Self {
        Variable {
            name: name.into(),
            value,
        }
    }

    /// Type tag of the bound value.
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}
