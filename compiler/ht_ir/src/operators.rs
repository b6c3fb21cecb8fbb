//! Binary operators usable inside an `Expression`.

use std::fmt;

/// Binary operators.
///
/// Comparison operators are spelled as words in source (`greater`, `smaller`)
/// because `<` and `>` delimit tags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Sub,
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Mul,
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Div,

    // Comparison
    #[cfg_attr(feature = "serde", serde(rename = "greater"))]
    Greater,
    #[cfg_attr(feature = "serde", serde(rename = "smaller"))]
    Smaller,

    // Equality
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Eq,
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    NotEq,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 8] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Greater,
        Self::Smaller,
        Self::Eq,
        Self::NotEq,
    ];

    /// Returns the source-level spelling of this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Greater => "greater",
            Self::Smaller => "smaller",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Parse an operator from its source spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }

    /// Whether this operator produces a boolean.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Greater | Self::Smaller | Self::Eq | Self::NotEq)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
