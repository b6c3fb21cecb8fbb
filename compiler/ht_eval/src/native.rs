//! Native function registry.
//!
//! Built-in callables implement [`NativeFunction`] and are installed into the
//! global scope as `NativeFunction` values before the program runs. Embedders
//! add their own through `InterpreterBuilder::native` without touching the
//! evaluator.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::condition::{expect_boolean, CONDITION_PARAM};
use crate::environment::Scope;
use crate::errors::{missing_parameter, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::value::{EvalValue, Variable};

/// Evaluated call arguments, in declaration order.
///
/// Stored as an ordered sequence so natives that iterate their arguments
/// (`Print`) produce deterministic output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, EvalValue)>,
}

impl Parameters {
    pub fn new() -> Self {
        Parameters::default()
    }

    /// Insert an argument.
    ///
    /// A repeated key replaces the earlier value but keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: EvalValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&EvalValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Arguments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EvalValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, EvalValue)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, EvalValue)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// A built-in callable.
pub trait NativeFunction {
    /// Name the function is bound to in the global scope.
    fn name(&self) -> &str;

    /// Invoke the function with already-evaluated arguments.
    fn call(&self, params: &Parameters) -> EvalResult;
}

/// Shared handle to a native function, stored inside `EvalValue`.
#[derive(Clone)]
pub struct NativeFunctionValue(Arc<dyn NativeFunction>);

impl NativeFunctionValue {
    pub fn new(function: impl NativeFunction + 'static) -> Self {
        NativeFunctionValue(Arc::new(function))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn call(&self, params: &Parameters) -> EvalResult {
        self.0.call(params)
    }
}

/// Two handles are equal when they point at the same registration.
impl PartialEq for NativeFunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeFunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunctionValue")
            .field(&self.name())
            .finish()
    }
}

/// `Print`: writes the string and by-name arguments on one line.
///
/// Arguments are joined with a single space in declaration order. Literal
/// arguments of other types are skipped.
pub struct PrintFunction {
    handler: SharedPrintHandler,
}

impl PrintFunction {
    pub const NAME: &'static str = "Print";

    pub fn new(handler: SharedPrintHandler) -> Self {
        PrintFunction { handler }
    }
}

impl NativeFunction for PrintFunction {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, params: &Parameters) -> EvalResult {
        let line = params
            .iter()
            .filter_map(|(_, value)| match value {
                EvalValue::String(s) => Some(s.clone()),
                EvalValue::Identifier(inner) => Some(inner.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.handler.println(&line);
        Ok(EvalValue::Undefined)
    }
}

/// `If` in call form: evaluates to the boolean value of `condition`.
pub struct ConditionFunction;

impl ConditionFunction {
    pub const NAME: &'static str = ht_ir::keywords::IF;
}

impl NativeFunction for ConditionFunction {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, params: &Parameters) -> EvalResult {
        let condition = params
            .get(CONDITION_PARAM)
            .ok_or_else(|| missing_parameter(Self::NAME, CONDITION_PARAM))?;
        expect_boolean(condition).map(EvalValue::Boolean)
    }
}

/// Name-keyed table of native functions.
#[derive(Default)]
pub struct NativeRegistry {
    functions: FxHashMap<String, NativeFunctionValue>,
}

impl NativeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        NativeRegistry::default()
    }

    /// Create a registry holding the built-ins (`Print`, `If`).
    pub fn with_builtins(print_handler: SharedPrintHandler) -> Self {
        let mut registry = NativeRegistry::new();
        registry.register(PrintFunction::new(print_handler));
        registry.register(ConditionFunction);
        registry
    }

    /// Register a function, replacing any earlier one with the same name.
    pub fn register(&mut self, function: impl NativeFunction + 'static) -> &mut Self {
        let value = NativeFunctionValue::new(function);
        self.functions.insert(value.name().to_string(), value);
        self
    }

    /// Move every function of `other` into this registry, replacing
    /// same-named entries.
    pub fn merge(&mut self, other: NativeRegistry) -> &mut Self {
        self.functions.extend(other.functions);
        self
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunctionValue> {
        self.functions.get(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bind every registered function in `scope`.
    ///
    /// Names already bound in `scope` keep their existing binding.
    pub fn install(&self, scope: &mut Scope) {
        for (name, function) in &self.functions {
            let variable = Variable::new(name.clone(), EvalValue::NativeFunction(function.clone()));
            if !scope.define_variable(variable) {
                tracing::warn!(%name, "native function name already bound; keeping existing binding");
            }
        }
    }
}
