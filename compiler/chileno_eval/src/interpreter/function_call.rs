//! Function definitions and calls.
//!
//! Calls are dynamically scoped: the body sees every variable visible at the
//! call site. See `crate::environment` for how the caller's bindings are
//! saved and restored.

use chileno_ir::{Name, NodeId};
use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{undefined_function, unexpected_node, EvalResult};
use crate::functions::FunctionDef;
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_func_def(
        &mut self,
        name: Name,
        params: NodeId,
        body: Option<NodeId>,
    ) -> EvalResult {
        let shadowed = self.functions.define(name, FunctionDef { params, body });
        tracing::debug!(
            name = self.ast.name(name),
            redefined = shadowed.is_some(),
            "defined function"
        );
        Ok(Value::None)
    }

    /// Evaluate a call.
    ///
    /// Arguments are evaluated left to right in the caller's environment.
    /// Missing arguments bind none; extra arguments are evaluated and
    /// dropped.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.ast.name(name)))]
    pub(super) fn eval_call(&mut self, name: Name, args: NodeId) -> EvalResult {
        let def = self
            .functions
            .get(name)
            .ok_or_else(|| undefined_function(self.ast.name(name)))?;

        let ast = self.ast;
        let arg_nodes = ast
            .arg_list(args)
            .ok_or_else(|| unexpected_node(ast.get(args).kind_name(), "an argument list"))?;
        let params = ast
            .param_list(def.params)
            .ok_or_else(|| unexpected_node(ast.get(def.params).kind_name(), "a parameter list"))?;

        let mut arg_values: SmallVec<[Value; 4]> = SmallVec::with_capacity(arg_nodes.len());
        for &arg in arg_nodes {
            arg_values.push(self.eval_node(arg)?);
        }

        let snapshot = self.env.enter_call();
        let mut arg_values = arg_values.into_iter();
        for &param in params {
            self.env.bind_param(param, arg_values.next().unwrap_or(Value::None));
        }
        let result = self.evaluate(def.body);
        self.env.restore(snapshot);
        result
    }
}
