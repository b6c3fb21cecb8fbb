//! htc - driver for the ht evaluator.
//!
//! Loads a statement tree produced by an external parser (serialized as
//! JSON), runs it, and maps fatal errors to the `[RuntimeError]` output
//! contract.

pub mod commands;
mod load;
mod logging;

pub use commands::{run_source, runtime_error_message, RunOptions};
pub use load::load_program;
pub use logging::init_tracing;
