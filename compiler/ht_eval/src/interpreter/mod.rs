//! Tree-walking interpreter for ht programs.
//!
//! # Architecture
//!
//! `Interpreter::evaluate` is the single dispatcher. It matches exhaustively on
//! `Statement` and hands each variant to a helper module:
//!
//! - `tags` - `OpenTag` blocks, `CloseTag` calls and `Let` declarations
//! - `conditional` - `<If>` blocks
//! - `expression` - the operand-stack machine behind `Expression`
//!
//! # Scopes
//!
//! The interpreter owns its `Environment`. Block scopes are pushed through
//! [`ScopedInterpreter`] and popped when the guard drops, so a child scope
//! never outlives the tag that opened it, even when evaluation fails.

mod builder;
mod conditional;
mod expression;
mod scope_guard;
mod tags;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use ht_ir::{Parameter, Program, Statement};

use crate::environment::Environment;
use crate::errors::{structural, undefined_identifier, EvalError, EvalResult};
use crate::native::Parameters;
use crate::print_handler::SharedPrintHandler;
use crate::scoping::ScopingMode;
use crate::stack::ensure_sufficient_stack;
use crate::value::EvalValue;

/// Tree-walking interpreter.
pub struct Interpreter {
    /// Global scope plus the stack of live block scopes.
    pub(crate) env: Environment,
    /// Destination of `Print` output.
    pub(crate) print_handler: SharedPrintHandler,
    /// Visibility rule for newly opened block scopes.
    pub(crate) scoping: ScopingMode,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with the built-in natives, lexical scoping and
    /// stdout output.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a program: evaluate each top-level statement in order against the
    /// global scope, stopping at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for statement in &program.statements {
            self.evaluate(statement)?;
        }
        Ok(())
    }

    /// Evaluate a single statement in the current scope.
    pub fn evaluate(&mut self, statement: &Statement) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(statement))
    }

    fn evaluate_inner(&mut self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::OpenTag(tag) => self.eval_open_tag(tag),
            Statement::CloseTag(tag) => self.eval_close_tag(tag),
            Statement::ParameterValue(inner) => self.evaluate(inner),
            Statement::Identifier(name) => self.eval_identifier(name),
            Statement::IfStatement(tag) => self.eval_if(tag),
            Statement::Expression(expr) => self.eval_expression(expr),
            Statement::Number(n) => Ok(EvalValue::Number(*n)),
            Statement::String(s) => Ok(EvalValue::String(s.clone())),
            Statement::Operator(op) => Err(structural(format!(
                "operator `{op}` outside an expression"
            ))),
            Statement::End => Ok(EvalValue::Undefined),
        }
    }

    /// Read a variable visible from the current scope.
    fn eval_identifier(&self, name: &str) -> EvalResult {
        self.env
            .lookup(name)
            .map(|variable| variable.value.clone())
            .ok_or_else(|| undefined_identifier(name))
    }

    /// Evaluate call arguments in declaration order.
    ///
    /// An argument written as a bare name is resolved and wrapped in
    /// `EvalValue::Identifier` so the callee can tell it was passed by name.
    fn eval_parameters(&mut self, params: &[Parameter]) -> Result<Parameters, EvalError> {
        let mut evaluated = Parameters::new();
        for param in params {
            let value = self.eval_argument(&param.value)?;
            evaluated.insert(param.key.as_str(), value);
        }
        Ok(evaluated)
    }

    /// Evaluate one argument, wrapping a bare name as `EvalValue::Identifier`.
    fn eval_argument(&mut self, value: &Statement) -> EvalResult {
        match value.unwrap_parameter_value() {
            Statement::Identifier(name) => Ok(EvalValue::identifier(self.eval_identifier(name)?)),
            other => self.evaluate(other),
        }
    }

    /// Get all output captured by a buffer print handler.
    ///
    /// Always empty when printing to stdout.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}
