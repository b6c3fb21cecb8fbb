//! Operand-stack machine for `Expression` statements.
//!
//! Operands are pushed onto the current scope's operand stack; an operator
//! pops the two most recent (the earlier one is the left operand) and pushes
//! the result. Each expression records the stack height it started at and may
//! only consume what it pushed itself, so nested expressions cannot steal
//! operands from the one that contains them.

use ht_ir::{BinaryOp, Expression, Statement};

use super::Interpreter;
use crate::errors::{stack_underflow, structural, EvalResult};
use crate::operators::evaluate_binary;

impl Interpreter {
    /// Reduce an expression to a single value.
    ///
    /// On error the operand stack is restored to its height before the
    /// expression started.
    pub(super) fn eval_expression(&mut self, expr: &Expression) -> EvalResult {
        let base = self.env.current().operand_depth();
        let result = self.reduce_expression(expr, base);
        if result.is_err() {
            self.env.current_mut().truncate_operands(base);
        }
        result
    }

    fn reduce_expression(&mut self, expr: &Expression, base: usize) -> EvalResult {
        for statement in &expr.statements {
            let value = match statement {
                Statement::Operator(op) => self.apply_operator(*op, base)?,
                operand => self.evaluate(operand)?,
            };
            self.env.current_mut().push(value);
        }

        match self.env.current().operand_depth().saturating_sub(base) {
            1 => self.env.current_mut().pop(),
            0 => Err(structural("expression produced no value")),
            remaining => Err(structural(format!(
                "expression left {remaining} values on the operand stack"
            ))),
        }
    }

    /// Pop `right` then `left` and apply `left op right`.
    fn apply_operator(&mut self, op: BinaryOp, base: usize) -> EvalResult {
        let scope = self.env.current_mut();
        if scope.operand_depth() < base.saturating_add(2) {
            return Err(stack_underflow());
        }
        let right = scope.pop()?;
        let left = scope.pop()?;
        tracing::trace!(%left, %op, %right, "apply operator");
        evaluate_binary(&left, &right, op)
    }
}
