//! `InterpreterBuilder` for wiring an interpreter to its I/O.

use chileno_ir::Ast;

use super::Interpreter;
use crate::input::{stdin_source, SharedInputSource};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, FunctionTable};

/// Builder for [`Interpreter`]. Defaults to stdout, stdin and an empty
/// environment.
pub struct InterpreterBuilder<'a> {
    ast: &'a Ast,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    input: Option<SharedInputSource>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            env: None,
            print_handler: None,
            input: None,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `input` reads.
    #[must_use]
    pub fn input(mut self, input: SharedInputSource) -> Self {
        self.input = Some(input);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            ast: self.ast,
            env: self.env.unwrap_or_default(),
            functions: FunctionTable::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or_else(stdin_source),
        }
    }
}
