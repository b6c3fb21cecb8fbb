//! The `run` command: load a serialized program and evaluate it.

use ht_eval::{stdout_handler, EvalError, Interpreter, ScopingMode, SharedPrintHandler};

use super::read_file;
use crate::load_program;

/// Options accepted by `htc run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// How block scopes see enclosing bindings (`--isolated-scopes`).
    pub scoping: ScopingMode,
}

/// Load and evaluate a JSON program, sending `Print` output to `print_handler`.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
) -> Result<(), EvalError> {
    let program = load_program(source)?;
    let mut interpreter = Interpreter::builder()
        .scoping(options.scoping)
        .print_handler(print_handler)
        .build();
    interpreter.run(&program)
}

/// The line printed for a fatal error.
pub fn runtime_error_message(err: &EvalError) -> String {
    format!("[RuntimeError] {err}")
}

/// Run a program file, printing to stdout.
///
/// A fatal error is reported on stderr and ends the process with status 1.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    if let Err(err) = run_source(&source, options, stdout_handler()) {
        eprintln!("{}", runtime_error_message(&err));
        std::process::exit(1);
    }
}
