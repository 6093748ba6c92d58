//! Declarations, identifier lookup and assignment.

use chileno_ir::{DeclaredType, Name, Node, NodeId};

use super::Interpreter;
use crate::environment::AssignError;
use crate::errors::{
    already_declared, incompatible_assignment, undefined_variable, unexpected_node, EvalError,
    EvalResult,
};
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_decl(&mut self, ty: DeclaredType, name: Name) -> EvalResult {
        self.env
            .declare(name, ty)
            .map_err(|_| already_declared(self.ast.name(name)))?;
        tracing::debug!(name = self.ast.name(name), %ty, "declared variable");
        Ok(Value::None)
    }

    pub(super) fn eval_ident(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_variable(self.ast.name(name)))
    }

    pub(super) fn eval_assign(&mut self, target: NodeId, value: NodeId) -> EvalResult {
        let name = self.target_name(target, "an assignment target")?;
        let value = self.eval_node(value)?;
        self.store(name, value)
    }

    /// Name of an identifier node used as a write target.
    pub(super) fn target_name(&self, target: NodeId, expected: &'static str) -> Result<Name, EvalError> {
        match self.ast.get(target) {
            Node::Ident(name) => Ok(*name),
            other => Err(unexpected_node(other.kind_name(), expected)),
        }
    }

    /// Store through the environment, mapping failures to evaluation errors.
    pub(super) fn store(&mut self, name: Name, value: Value) -> EvalResult {
        self.env.assign(name, value).map_err(|err| match err {
            AssignError::Undefined => undefined_variable(self.ast.name(name)),
            AssignError::Incompatible { declared, got } => {
                incompatible_assignment(self.ast.name(name), declared, got)
            }
        })
    }
}
