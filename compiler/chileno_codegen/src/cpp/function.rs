//! Function Code Generation
//!
//! Renders every function definition reachable through sequence nodes.
//! Definitions nested in a function body are hoisted ahead of it.

use chileno_ir::{Node, NodeId};

use super::stmt::render_statements;
use crate::context::CodegenContext;

/// Emit `auto name(auto a, auto b) { ... }` for each reachable definition.
pub fn render_functions(ctx: &mut CodegenContext<'_>, node: Option<NodeId>) {
    let Some(id) = node else {
        return;
    };
    let ast = ctx.ast;

    match *ast.get(id) {
        Node::Seq { first, second } => {
            render_functions(ctx, Some(first));
            render_functions(ctx, Some(second));
        }
        Node::FuncDef { name, params, body } => {
            render_functions(ctx, body);

            let params = ast
                .param_list(params)
                .unwrap_or_default()
                .iter()
                .map(|&param| format!("auto {}", ast.name(param)))
                .collect::<Vec<_>>()
                .join(", ");
            ctx.writeln(&format!("auto {}({params}) {{", ast.name(name)));
            ctx.indent();
            render_statements(ctx, body, false);
            ctx.dedent();
            ctx.writeln("}");
            ctx.newline();
        }
        _ => {}
    }
}
