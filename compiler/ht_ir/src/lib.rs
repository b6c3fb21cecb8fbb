//! ht IR - statement tree types for the ht tag notation.
//!
//! This crate is the contract between the external lexer/parser and the
//! evaluator (`ht_eval`):
//! - `Program`: the ordered, immutable top-level statement sequence
//! - `Statement`: one closed variant per node kind
//! - `OpenTag` / `CloseTag` / `Parameter` / `Expression` payloads
//! - `BinaryOp`: the fixed operator set used inside expressions
//!
//! # Serialization
//!
//! With the `serde` feature enabled every type is (de)serializable and
//! statements use the adjacently-tagged form `{"kind": "...", "body": ...}`,
//! so trees built by a parser in another process can be handed to the
//! evaluator as JSON.

pub mod keywords;
mod operators;
mod statement;

pub use operators::BinaryOp;
pub use statement::{CloseTag, Expression, OpenTag, Parameter, Program, Statement, StatementKind};
