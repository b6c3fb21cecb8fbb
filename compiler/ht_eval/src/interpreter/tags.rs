//! Tag evaluation: blocks, calls and declarations.

use ht_ir::{keywords, CloseTag, OpenTag, Statement};

use super::Interpreter;
use crate::errors::{
    duplicate_variable, missing_parameter, mismatched_type, not_callable, unresolved_call,
    EvalResult,
};
use crate::native::Parameters;
use crate::value::{EvalValue, ValueType, Variable};

const ID_PARAM: &str = "id";
const VALUE_PARAM: &str = "value";

impl Interpreter {
    /// Evaluate a block's children in a new block scope.
    ///
    /// The first `<If>` child is evaluated and its result returned at once;
    /// siblings after it are never reached. Children that are not tags have
    /// no effect in block position and are skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(tag = %tag.name))]
    pub(super) fn eval_open_tag(&mut self, tag: &OpenTag) -> EvalResult {
        self.with_block_scope(|scoped| {
            for child in &tag.children {
                match child {
                    Statement::IfStatement(_) => return scoped.evaluate(child),
                    Statement::OpenTag(_) | Statement::CloseTag(_) => {
                        scoped.evaluate(child)?;
                    }
                    other => {
                        tracing::warn!(kind = %other.kind(), "skipping non-tag child of block");
                    }
                }
            }
            Ok(EvalValue::Undefined)
        })
    }

    /// Evaluate a self-closing tag: `Let` or a native call.
    #[tracing::instrument(level = "debug", skip_all, fields(tag = %tag.name))]
    pub(super) fn eval_close_tag(&mut self, tag: &CloseTag) -> EvalResult {
        if tag.name == keywords::LET {
            return self.eval_let(tag);
        }

        let function = match self.env.lookup_callable(&tag.name) {
            Some(variable) => match &variable.value {
                EvalValue::NativeFunction(function) => function.clone(),
                other => return Err(not_callable(&tag.name, other)),
            },
            None => return Err(unresolved_call(&tag.name)),
        };

        let params = self.eval_parameters(&tag.params)?;
        tracing::debug!(function = function.name(), args = params.len(), "native call");
        function.call(&params)
    }

    /// `<Let id=... value=... />`: declare a variable in the current scope.
    ///
    /// Every parameter is evaluated in declaration order, like call
    /// arguments. A bare identifier given as `id` is the name itself and is
    /// not looked up.
    fn eval_let(&mut self, tag: &CloseTag) -> EvalResult {
        let mut params = Parameters::new();
        for param in &tag.params {
            let value = match (param.key.as_str(), param.value.unwrap_parameter_value()) {
                (ID_PARAM, Statement::Identifier(name)) => EvalValue::string(name.as_str()),
                (_, statement) => self.eval_argument(statement)?,
            };
            params.insert(param.key.as_str(), value);
        }

        let value = params
            .get(VALUE_PARAM)
            .ok_or_else(|| missing_parameter(keywords::LET, VALUE_PARAM))?
            .resolved()
            .clone();
        let name = match params
            .get(ID_PARAM)
            .ok_or_else(|| missing_parameter(keywords::LET, ID_PARAM))?
            .resolved()
        {
            EvalValue::String(name) => name.clone(),
            found => return Err(mismatched_type(ValueType::String, found)),
        };

        tracing::debug!(%name, %value, "declare");
        if !self.env.declare(Variable::new(name.as_str(), value)) {
            return Err(duplicate_variable(&name));
        }
        Ok(EvalValue::Undefined)
    }
}
