//! RAII scope guard for block evaluation.
//!
//! [`ScopedInterpreter`] pushes a block scope when created and pops it on
//! drop, including when a child statement returns an error or panics. It
//! derefs to `Interpreter`, so code inside the block calls the interpreter
//! methods directly.
//!
//! ```text
//! interpreter.with_block_scope(|scoped| {
//!     for child in &tag.children {
//!         scoped.evaluate(child)?;
//!     }
//!     Ok(EvalValue::Undefined)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard over a block scope. Dropping it pops the scope.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a block scope using the configured [`ScopingMode`].
    ///
    /// [`ScopingMode`]: crate::ScopingMode
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope(self.scoping);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a fresh block scope.
    pub fn with_block_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
