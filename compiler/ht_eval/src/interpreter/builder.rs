//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use super::Interpreter;
use crate::environment::{Environment, Scope};
use crate::native::{NativeFunction, NativeRegistry};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::scoping::ScopingMode;

/// Builder for creating `Interpreter` instances.
///
/// The built-in natives (`Print`, `If`) are always installed. Functions added
/// with [`InterpreterBuilder::native`] are registered on top of them and
/// replace a built-in of the same name.
#[derive(Default)]
pub struct InterpreterBuilder {
    scoping: ScopingMode,
    print_handler: Option<SharedPrintHandler>,
    natives: NativeRegistry,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Set how block scopes see enclosing bindings.
    #[must_use]
    pub fn scoping(mut self, scoping: ScopingMode) -> Self {
        self.scoping = scoping;
        self
    }

    /// Set where `Print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Register an extra native function in the global scope.
    #[must_use]
    pub fn native(mut self, function: impl NativeFunction + 'static) -> Self {
        self.natives.register(function);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);

        let mut registry = NativeRegistry::with_builtins(print_handler.clone());
        registry.merge(self.natives);

        let mut global = Scope::new();
        registry.install(&mut global);
        tracing::debug!(natives = registry.len(), scoping = ?self.scoping, "interpreter ready");

        Interpreter {
            env: Environment::with_global(global),
            print_handler,
            scoping: self.scoping,
        }
    }
}
