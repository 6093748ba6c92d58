//! Chileno Eval - tree-walking interpreter for Chileno programs.
//!
//! # Architecture
//!
//! - `Value`: closed runtime value (int, float, string, none)
//! - `Environment`: variables in shared cells, saved and restored per call
//! - `FunctionTable`: user functions by name, later definitions win
//! - `evaluate_binary`: direct operator dispatch with int narrowing
//! - `Interpreter`: evaluates an `Ast` node by node
//!
//! Output and input go through `SharedPrintHandler` and `SharedInputSource`
//! so tests can capture and feed them.

mod environment;
pub mod errors;
mod functions;
mod input;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{AlreadyDeclared, AssignError, EnvSnapshot, Environment, VarCell, Variable};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use functions::{FunctionDef, FunctionTable};
pub use input::{buffer_source, stdin_source, InputSource, SharedInputSource};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::Value;
