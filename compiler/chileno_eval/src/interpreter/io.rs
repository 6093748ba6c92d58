//! `print` and `input`.

use chileno_ir::NodeId;

use super::Interpreter;
use crate::errors::{malformed_input, undefined_variable, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_print(&mut self, expr: NodeId) -> EvalResult {
        let value = self.eval_node(expr)?;
        self.print_handler.println(&value.stringify());
        Ok(Value::None)
    }

    /// Read one line and store it in the target, parsed per its declared
    /// type. End of input reads as an empty line.
    pub(super) fn eval_input(&mut self, target: NodeId) -> EvalResult {
        let name = self.target_name(target, "an input target")?;
        let var = self
            .env
            .variable(name)
            .ok_or_else(|| undefined_variable(self.ast.name(name)))?;

        let line = self.input.read_line()?.unwrap_or_default();
        let ty = var.input_type();
        let value = Value::parse_input(ty, &line)
            .ok_or_else(|| malformed_input(self.ast.name(name), ty, &line))?;
        self.store(name, value)
    }
}
