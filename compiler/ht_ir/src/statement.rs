//! Statement Types
//!
//! A `Program` is a flat sequence of `Statement`s. Each statement is one
//! variant of a closed sum type, so an evaluator matching on `Statement` is
//! exhaustive and an "unknown kind" cannot be represented.

use std::fmt;

use crate::BinaryOp;

/// Discriminant of a `Statement`, used for diagnostics and logging.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StatementKind {
    OpenTag,
    CloseTag,
    Identifier,
    Number,
    String,
    Expression,
    IfStatement,
    ParameterValue,
    Operator,
    End,
}

impl StatementKind {
    /// Name of this kind as written by the parser.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenTag => "OpenTag",
            Self::CloseTag => "CloseTag",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::String => "String",
            Self::Expression => "Expression",
            Self::IfStatement => "IfStatement",
            Self::ParameterValue => "ParameterValue",
            Self::Operator => "Operator",
            Self::End => "End",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "body")
)]
pub enum Statement {
    /// Block construct with children: `<Name params> children </Name>`.
    OpenTag(OpenTag),
    /// Single-shot invocation: `<Name params />`.
    CloseTag(CloseTag),
    /// Bare name reference.
    Identifier(String),
    /// Integer literal.
    Number(i64),
    /// String literal.
    String(String),
    /// Operand/operator sequence reduced by the expression stack machine.
    Expression(Expression),
    /// `<If condition=...> children </If>`.
    IfStatement(OpenTag),
    /// A parameter's value, wrapping the statement it was parsed from.
    ParameterValue(Box<Statement>),
    /// Operator token; only meaningful inside an `Expression`.
    Operator(BinaryOp),
    /// End-of-program sentinel.
    End,
}

impl Statement {
    /// Returns the kind of this statement.
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::OpenTag(_) => StatementKind::OpenTag,
            Self::CloseTag(_) => StatementKind::CloseTag,
            Self::Identifier(_) => StatementKind::Identifier,
            Self::Number(_) => StatementKind::Number,
            Self::String(_) => StatementKind::String,
            Self::Expression(_) => StatementKind::Expression,
            Self::IfStatement(_) => StatementKind::IfStatement,
            Self::ParameterValue(_) => StatementKind::ParameterValue,
            Self::Operator(_) => StatementKind::Operator,
            Self::End => StatementKind::End,
        }
    }

    /// Strip any number of `ParameterValue` wrappers.
    pub fn unwrap_parameter_value(&self) -> &Statement {
        let mut statement = self;
        while let Self::ParameterValue(inner) = statement {
            statement = inner;
        }
        statement
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn operator(op: BinaryOp) -> Self {
        Self::Operator(op)
    }

    pub fn expression(statements: Vec<Statement>) -> Self {
        Self::Expression(Expression::new(statements))
    }

    /// Build the postfix expression `left right op`.
    pub fn binary(left: Statement, op: BinaryOp, right: Statement) -> Self {
        Self::expression(vec![left, right, Self::Operator(op)])
    }

    pub fn parameter_value(inner: Statement) -> Self {
        Self::ParameterValue(Box::new(inner))
    }

    pub fn close_tag(name: impl Into<String>, params: Vec<Parameter>) -> Self {
        Self::CloseTag(CloseTag::new(name, params))
    }

    pub fn open_tag(
        name: impl Into<String>,
        params: Vec<Parameter>,
        children: Vec<Statement>,
    ) -> Self {
        Self::OpenTag(OpenTag::new(name, params, children))
    }

    /// Build `<If condition=...> children </If>`.
    pub fn if_statement(condition: Statement, children: Vec<Statement>) -> Self {
        Self::IfStatement(OpenTag::new(
            crate::keywords::IF,
            vec![Parameter::new("condition", condition)],
            children,
        ))
    }
}

/// A named argument. The value stays unevaluated until the call site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub key: String,
    pub value: Statement,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: Statement) -> Self {
        Parameter {
            key: key.into(),
            value,
        }
    }
}

/// Block tag with children.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenTag {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Parameter>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Statement>,
}

impl OpenTag {
    pub fn new(name: impl Into<String>, params: Vec<Parameter>, children: Vec<Statement>) -> Self {
        OpenTag {
            name: name.into(),
            params,
            children,
        }
    }
}

/// Self-closing tag: a declaration or a function call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseTag {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Parameter>,
}

impl CloseTag {
    pub fn new(name: impl Into<String>, params: Vec<Parameter>) -> Self {
        CloseTag {
            name: name.into(),
            params,
        }
    }
}

/// Operands and operator tokens in the order the parser emitted them.
///
/// Each operator applies to the two operands pushed most recently, so
/// `5 + 3` arrives as `[5, 3, +]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    pub statements: Vec<Statement>,
}

impl Expression {
    pub fn new(statements: Vec<Statement>) -> Self {
        Expression { statements }
    }
}

/// The complete parser output. Never mutated after construction.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests;
