//! Environment for variable scoping in the interpreter.
//!
//! The global scope lives for the whole run; block scopes form a stack above
//! it and are pushed/popped around `OpenTag` bodies. Each scope also owns the
//! operand stack the expression engine works on while that scope is current.

use rustc_hash::FxHashMap;

use crate::errors::{stack_underflow, EvalError};
use crate::scoping::ScopingMode;
use crate::value::{EvalValue, Variable};

/// A single scope: named variables plus an operand stack.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Variable bindings. A name is defined at most once per scope.
    variables: FxHashMap<String, Variable>,
    /// Transient operands of the expression currently being reduced.
    operands: Vec<EvalValue>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Define a variable in this scope.
    ///
    /// Returns `false`, leaving the existing binding untouched, if the name is
    /// already defined here.
    pub fn define_variable(&mut self, variable: Variable) -> bool {
        if self.variables.contains_key(&variable.name) {
            return false;
        }
        self.variables.insert(variable.name.clone(), variable);
        true
    }

    /// Look up a variable defined directly in this scope.
    #[inline]
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Number of variables defined directly in this scope.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Push an operand.
    #[inline]
    pub fn push(&mut self, value: EvalValue) {
        self.operands.push(value);
    }

    /// Pop the most recently pushed operand.
    #[inline]
    pub fn pop(&mut self) -> Result<EvalValue, EvalError> {
        self.operands.pop().ok_or_else(stack_underflow)
    }

    /// Current operand stack height.
    #[inline]
    pub fn operand_depth(&self) -> usize {
        self.operands.len()
    }

    /// Discard operands above `depth`.
    pub fn truncate_operands(&mut self, depth: usize) {
        self.operands.truncate(depth);
    }
}

/// A block scope on the environment stack.
#[derive(Debug)]
struct Block {
    scope: Scope,
    /// Whether lookups may continue into the enclosing scope.
    linked: bool,
}

/// Environment for the interpreter using a scope stack.
///
/// Block scopes are pushed and popped around `OpenTag` bodies; the global
/// scope is always at the bottom and is never popped.
#[derive(Debug, Default)]
pub struct Environment {
    /// Global scope (always at the bottom).
    global: Scope,
    /// Block scopes, innermost last.
    blocks: Vec<Block>,
}

impl Environment {
    /// Create a new environment with an empty global scope.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an environment around a pre-populated global scope.
    pub fn with_global(global: Scope) -> Self {
        Environment {
            global,
            blocks: Vec::new(),
        }
    }

    /// Number of live scopes, counting the global scope.
    pub fn depth(&self) -> usize {
        self.blocks.len().saturating_add(1)
    }

    /// Push a new block scope.
    pub fn push_scope(&mut self, mode: ScopingMode) {
        self.blocks.push(Block {
            scope: Scope::new(),
            linked: mode.links_parent(),
        });
    }

    /// Pop the innermost block scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        self.blocks.pop();
    }

    /// The scope declarations and operands currently go to.
    #[inline]
    pub fn current(&self) -> &Scope {
        self.blocks.last().map_or(&self.global, |block| &block.scope)
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Scope {
        match self.blocks.last_mut() {
            Some(block) => &mut block.scope,
            None => &mut self.global,
        }
    }

    pub fn global(&self) -> &Scope {
        &self.global
    }

    /// Look up a variable visible from the current scope.
    ///
    /// Walks outward from the innermost block and stops at the first block
    /// that is not linked to its parent.
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        for block in self.blocks.iter().rev() {
            if let Some(variable) = block.scope.get_variable(name) {
                return Some(variable);
            }
            if !block.linked {
                return None;
            }
        }
        self.global.get_variable(name)
    }

    /// Look up the target of a call.
    ///
    /// Same as [`Environment::lookup`], but always falls back to the global
    /// scope, where native functions are registered.
    pub fn lookup_callable(&self, name: &str) -> Option<&Variable> {
        self.lookup(name)
            .or_else(|| self.global.get_variable(name))
    }

    /// Define a variable in the current scope.
    ///
    /// Returns `false` if the name is already visible from the current scope.
    pub fn declare(&mut self, variable: Variable) -> bool {
        if self.lookup(&variable.name).is_some() {
            return false;
        }
        self.current_mut().define_variable(variable)
    }
}
