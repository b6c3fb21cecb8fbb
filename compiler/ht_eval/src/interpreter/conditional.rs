//! `<If condition=...>` blocks.

use ht_ir::{keywords, OpenTag};

use super::Interpreter;
use crate::condition::{expect_boolean, CONDITION_PARAM};
use crate::errors::{missing_parameter, unexpected_parameter, EvalResult};
use crate::value::EvalValue;

impl Interpreter {
    /// Evaluate an `<If>` block.
    ///
    /// The first parameter must be `condition`. When it holds, the children
    /// run in the scope the `If` itself is in; no block scope is opened.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_if(&mut self, tag: &OpenTag) -> EvalResult {
        let param = tag
            .params
            .first()
            .ok_or_else(|| missing_parameter(keywords::IF, CONDITION_PARAM))?;
        if param.key != CONDITION_PARAM {
            return Err(unexpected_parameter(keywords::IF, CONDITION_PARAM, &param.key));
        }

        let condition = self.evaluate(&param.value)?;
        if !expect_boolean(&condition)? {
            tracing::trace!("condition false; skipping body");
            return Ok(EvalValue::Undefined);
        }

        for child in &tag.children {
            self.evaluate(child)?;
        }
        Ok(EvalValue::Undefined)
    }
}
