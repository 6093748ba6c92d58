//! Conditionals and loops.
//!
//! A condition holds when it evaluates to a non-zero number. Strings and
//! none never hold.

use chileno_ir::NodeId;

use super::Interpreter;
use crate::errors::EvalResult;
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_if(
        &mut self,
        cond: NodeId,
        then_branch: Option<NodeId>,
        else_branch: Option<NodeId>,
    ) -> EvalResult {
        if self.eval_node(cond)?.is_truthy() {
            self.evaluate(then_branch)
        } else {
            self.evaluate(else_branch)
        }
    }

    pub(super) fn eval_while(&mut self, cond: NodeId, body: Option<NodeId>) -> EvalResult {
        while self.eval_node(cond)?.is_truthy() {
            self.evaluate(body)?;
        }
        Ok(Value::None)
    }

    /// `init` runs once; an absent condition never holds.
    pub(super) fn eval_for(
        &mut self,
        init: Option<NodeId>,
        cond: Option<NodeId>,
        update: Option<NodeId>,
        body: Option<NodeId>,
    ) -> EvalResult {
        self.evaluate(init)?;
        while self.evaluate(cond)?.is_truthy() {
            self.evaluate(body)?;
            self.evaluate(update)?;
        }
        Ok(Value::None)
    }
}
