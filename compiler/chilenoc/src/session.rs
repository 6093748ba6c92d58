//! Running and emitting one program.

use chileno_codegen::{CodegenResult, CppCodegen};
use chileno_eval::{EvalResult, InterpreterBuilder};
use chileno_ir::{Ast, NodeId};

use crate::reporting::{report_error, ExitStatus};
use crate::SessionConfig;

/// One program plus the I/O it runs against.
pub struct Session<'a> {
    ast: &'a Ast,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    pub fn new(ast: &'a Ast, config: SessionConfig) -> Self {
        if config.tracing {
            crate::init_tracing();
        }
        Self { ast, config }
    }

    /// Evaluate the program and hand back its result.
    pub fn evaluate(&self, root: Option<NodeId>) -> EvalResult {
        let mut interpreter = InterpreterBuilder::new(self.ast)
            .print_handler(self.config.print_handler.clone())
            .input(self.config.input.clone())
            .build();
        let result = interpreter.evaluate(root);
        self.config.print_handler.flush();
        result
    }

    /// Evaluate the program, reporting a fatal error on stderr.
    pub fn run(&self, root: Option<NodeId>) -> ExitStatus {
        self.run_reporting(root, &mut std::io::stderr())
    }

    /// Like [`Session::run`], writing the diagnostic to `diagnostics`.
    pub fn run_reporting(
        &self,
        root: Option<NodeId>,
        diagnostics: &mut impl std::io::Write,
    ) -> ExitStatus {
        match self.evaluate(root) {
            Ok(_) => ExitStatus::Success,
            Err(err) => {
                tracing::debug!(category = %err.category(), "evaluation failed");
                // Nothing useful to do if stderr itself is gone.
                let _ = report_error(diagnostics, &err);
                ExitStatus::Failure
            }
        }
    }

    /// Evaluate the program and exit the process with a failure status if
    /// it reports a fatal error.
    pub fn run_or_exit(&self, root: Option<NodeId>) {
        let status = self.run(root);
        if !status.is_success() {
            std::process::exit(status.code());
        }
    }

    /// Render the program as C++.
    pub fn emit(&self, root: Option<NodeId>) -> CodegenResult {
        CppCodegen::new(self.ast).generate(root)
    }
}
