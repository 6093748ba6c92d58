//! Tree-walking interpreter for Chileno.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::evaluate`], which dispatches on
//! the node kind. The per-kind rules live in sibling modules:
//!
//! - `bindings` - declarations, identifiers, assignment
//! - `control` - `if`, `while`, `for`
//! - `io` - `print`, `input`
//! - `function_call` - definitions, calls, `return`
//!
//! The interpreter owns the environment and the function table, and borrows
//! the tree for its whole lifetime. Function bodies are evaluated from the
//! same tree, so a call never needs a second interpreter.

mod bindings;
mod builder;
mod control;
mod function_call;
mod io;

pub use builder::InterpreterBuilder;

use chileno_ir::{Ast, Node, NodeId};

use crate::errors::{unexpected_node, EvalResult};
use crate::input::SharedInputSource;
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, FunctionTable, Value};

/// Tree-walking interpreter over one [`Ast`].
pub struct Interpreter<'a> {
    /// Tree being evaluated; function bodies point into it too.
    pub(crate) ast: &'a Ast,
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: SharedInputSource,
}

impl<'a> Interpreter<'a> {
    /// Interpreter writing to stdout and reading from stdin.
    pub fn new(ast: &'a Ast) -> Self {
        InterpreterBuilder::new(ast).build()
    }

    /// Evaluate a (possibly absent) node. An absent node yields none.
    pub fn evaluate(&mut self, node: Option<NodeId>) -> EvalResult {
        match node {
            Some(id) => self.eval_node(id),
            None => Ok(Value::None),
        }
    }

    fn eval_node(&mut self, id: NodeId) -> EvalResult {
        let ast = self.ast;
        let node = ast.get(id);
        tracing::trace!(?id, kind = node.kind_name(), "eval");

        match *node {
            Node::Int(n) => Ok(Value::Int(n)),
            Node::Float(bits) => Ok(Value::Float(Node::float_value(bits))),
            Node::Str(text) => Ok(Value::string(ast.name(text))),
            Node::Ident(name) => self.eval_ident(name),

            Node::Decl { ty, name } => self.eval_decl(ty, name),
            Node::Assign { target, value } => self.eval_assign(target, value),
            Node::Print(expr) => self.eval_print(expr),
            Node::Input(target) => self.eval_input(target),

            Node::Binary { op, left, right } => {
                let left = self.eval_node(left)?;
                let right = self.eval_node(right)?;
                evaluate_binary(&left, &right, op)
            }

            Node::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch),
            Node::While { cond, body } => self.eval_while(cond, body),
            Node::For {
                init,
                cond,
                update,
                body,
            } => self.eval_for(init, cond, update, body),
            Node::Seq { first, second } => {
                self.eval_node(first)?;
                self.eval_node(second)
            }

            Node::FuncDef { name, params, body } => self.eval_func_def(name, params, body),
            Node::Call { name, args } => self.eval_call(name, args),
            Node::Return(expr) => self.eval_node(expr),

            Node::Args(_) | Node::Params(_) => Err(unexpected_node(
                node.kind_name(),
                "a statement or expression",
            )),
        }
    }

    /// Variable environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Registered functions.
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer print handler; empty for stdout.
    pub fn get_output(&self) -> String {
        self.print_handler.get_output()
    }
}
