#![deny(clippy::arithmetic_side_effects)]
//! ht Eval - tree-walking evaluator for the ht tag notation.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a global scope plus a stack of block scopes, each with
//!   its own operand stack
//! - `Interpreter`: exhaustive dispatch over `ht_ir::Statement`
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `NativeRegistry`: built-in callables installed into the global scope
//! - `PrintHandlerImpl`: where `Print` writes (stdout or a buffer)
//!
//! # Usage
//!
//! ```text
//! let handler = buffer_handler();
//! let mut interpreter = Interpreter::builder()
//!     .print_handler(handler.clone())
//!     .build();
//! interpreter.run(&program)?;
//! ```

mod condition;
mod environment;
pub mod errors;
pub mod interpreter;
mod native;
mod operators;
mod print_handler;
mod scoping;
mod stack;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};

pub use condition::{expect_boolean, CONDITION_PARAM};
pub use environment::{Environment, Scope};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use native::{
    ConditionFunction, NativeFunction, NativeFunctionValue, NativeRegistry, Parameters,
    PrintFunction,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use scoping::ScopingMode;
pub use stack::ensure_sufficient_stack;
pub use value::{EvalValue, FunctionValue, ValueType, Variable};

#[cfg(test)]
mod tests;
