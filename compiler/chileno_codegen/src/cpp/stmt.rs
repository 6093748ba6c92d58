//! Statement Code Generation
//!
//! Generates C++ code for Chileno statements. Function definitions are
//! skipped here; they are rendered by the functions pass.

use chileno_ir::{Name, Node, NodeId};

use super::expr::{emit_call, emit_expr, print_terms, unimplemented_marker};
use crate::context::CodegenContext;

/// Render every statement reachable from `node`.
///
/// With `inside_for_header` set, statements are written bare: no
/// indentation, no terminator, no newline, and a sequence is joined with
/// commas.
pub fn render_statements(ctx: &mut CodegenContext<'_>, node: Option<NodeId>, inside_for_header: bool) {
    let Some(id) = node else {
        return;
    };
    let ast = ctx.ast;

    match *ast.get(id) {
        Node::Seq { first, second } => {
            if inside_for_header {
                render_statements(ctx, Some(first), true);
                ctx.write(", ");
                render_statements(ctx, Some(second), true);
            } else {
                render_statements(ctx, Some(first), false);
                render_statements(ctx, Some(second), false);
            }
        }

        Node::FuncDef { .. } => {}

        Node::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond = emit_expr(ctx, cond);
            ctx.writeln(&format!("if ({cond}) {{"));
            emit_block(ctx, then_branch);
            if else_branch.is_some() {
                ctx.writeln("} else {");
                emit_block(ctx, else_branch);
            }
            ctx.writeln("}");
        }

        Node::While { cond, body } => {
            let cond = emit_expr(ctx, cond);
            ctx.writeln(&format!("while ({cond}) {{"));
            emit_block(ctx, body);
            ctx.writeln("}");
        }

        Node::For {
            init,
            cond,
            update,
            body,
        } => emit_for(ctx, id, init, cond, update, body),

        _ => {
            let text = simple_statement(ctx, id);
            if inside_for_header {
                ctx.write(&text);
            } else {
                ctx.writeln(&format!("{text};"));
            }
        }
    }
}

/// Statement text without its terminator.
fn simple_statement(ctx: &CodegenContext<'_>, id: NodeId) -> String {
    let ast = ctx.ast;
    match *ast.get(id) {
        Node::Decl { ty, name } => format!("{} {}", ty.keyword(), ctx.resolve_name(name)),
        Node::Assign { target, value } => {
            format!("{} = {}", emit_expr(ctx, target), emit_expr(ctx, value))
        }
        Node::Print(expr) => {
            let mut text = String::from("cout");
            for term in print_terms(ctx, expr) {
                text.push_str(" << ");
                text.push_str(&term);
            }
            text.push_str(" << endl");
            text
        }
        Node::Input(target) => format!("cin >> {}", emit_expr(ctx, target)),
        Node::Call { name, args } => emit_call(ctx, ast.name(name), args),
        Node::Return(expr) => format!("return {}", emit_expr(ctx, expr)),
        Node::Int(_) | Node::Float(_) | Node::Str(_) | Node::Ident(_) | Node::Binary { .. } => {
            emit_expr(ctx, id)
        }
        ref other => unimplemented_marker(other),
    }
}

/// `int i = 0` for a declaration followed by an assignment to the same name.
fn initialized_decl(ctx: &CodegenContext<'_>, first: NodeId, second: NodeId) -> Option<String> {
    let ast = ctx.ast;
    let Node::Decl { ty, name } = *ast.get(first) else {
        return None;
    };
    let Node::Assign { target, value } = *ast.get(second) else {
        return None;
    };
    if !matches!(*ast.get(target), Node::Ident(t) if t == name) {
        return None;
    }
    Some(format!(
        "{} {} = {}",
        ty.keyword(),
        ctx.resolve_name(name),
        emit_expr(ctx, value)
    ))
}

/// Statements of a (possibly absent) sequence, in order.
fn statement_list(ctx: &CodegenContext<'_>, node: Option<NodeId>) -> Vec<NodeId> {
    let mut stmts = Vec::new();
    let mut pending: Vec<NodeId> = node.into_iter().collect();
    while let Some(id) = pending.pop() {
        match *ctx.ast.get(id) {
            Node::Seq { first, second } => pending.extend([second, first]),
            _ => stmts.push(id),
        }
    }
    stmts
}

fn is_simple(node: &Node) -> bool {
    !matches!(
        node,
        Node::If { .. }
            | Node::While { .. }
            | Node::For { .. }
            | Node::Seq { .. }
            | Node::FuncDef { .. }
    )
}

fn declared_name(ctx: &CodegenContext<'_>, id: NodeId) -> Option<Name> {
    match *ctx.ast.get(id) {
        Node::Decl { name, .. } => Some(name),
        _ => None,
    }
}

/// Where the statements of a `for` initializer go: `before` the loop, or
/// into the `header`.
struct InitPlacement<'s> {
    before: &'s [NodeId],
    header: &'s [NodeId],
}

/// Split an initializer between the header and the statements before it.
///
/// The header takes a declaration, a declaration plus its assignment, or a
/// single simple statement. A declared name that outlives the loop is
/// declared before it. Everything else runs before the loop.
fn place_init<'s>(
    ctx: &CodegenContext<'_>,
    stmts: &'s [NodeId],
    escapes: bool,
) -> InitPlacement<'s> {
    let ast = ctx.ast;
    let fits = |header: &[NodeId]| match *header {
        [] => true,
        [only] => is_simple(ast.get(only)),
        [first, second] => initialized_decl(ctx, first, second).is_some(),
        _ => false,
    };

    if !escapes && fits(stmts) {
        return InitPlacement {
            before: &[],
            header: stmts,
        };
    }
    if escapes {
        if let [decl, rest @ ..] = stmts {
            if declared_name(ctx, *decl).is_some()
                && rest.iter().all(|&id| declared_name(ctx, id).is_none())
                && rest.len() <= 1
                && fits(rest)
            {
                return InitPlacement {
                    before: &stmts[..1],
                    header: rest,
                };
            }
        }
    }
    InitPlacement {
        before: stmts,
        header: &[],
    }
}

/// Header text for the statements `place_init` left in the header.
fn header_init(ctx: &mut CodegenContext<'_>, header: &[NodeId]) -> String {
    match *header {
        [first, second] => initialized_decl(ctx, first, second).unwrap_or_default(),
        [only] => ctx.capture(|ctx| render_statements(ctx, Some(only), true)),
        _ => String::new(),
    }
}

/// `for (init; cond; update) { body }`
///
/// A counter declared in `init` is renamed for the whole loop, unless it is
/// used outside the loop: then it is declared before the loop under its own
/// name, since C++ scopes a header declaration to the loop. Initializer
/// statements that do not fit the header run before the loop, inside a
/// `{ }` block when nothing they declare is used after it. An absent
/// condition renders as `0`, since it never holds.
fn emit_for(
    ctx: &mut CodegenContext<'_>,
    id: NodeId,
    init: Option<NodeId>,
    cond: Option<NodeId>,
    update: Option<NodeId>,
    body: Option<NodeId>,
) {
    let ast = ctx.ast;
    let stmts = statement_list(ctx, init);
    let escapes = stmts
        .iter()
        .filter_map(|&stmt| declared_name(ctx, stmt))
        .any(|name| ctx.info.used_outside(ast, id, name));
    let counter = stmts.first().and_then(|&first| declared_name(ctx, first));
    let renamed = ctx.enter_loop(if escapes { None } else { counter });

    let placement = place_init(ctx, &stmts, escapes);
    let scoped = !escapes && !placement.before.is_empty();
    if scoped {
        ctx.writeln("{");
        ctx.indent();
    }
    for &stmt in placement.before {
        render_statements(ctx, Some(stmt), false);
    }

    let init_text = header_init(ctx, placement.header);
    let cond_text = cond.map_or_else(|| "0".to_string(), |cond| emit_expr(ctx, cond));
    let update_text = ctx.capture(|ctx| render_statements(ctx, update, true));

    ctx.writeln(&format!("for ({init_text}; {cond_text}; {update_text}) {{"));
    emit_block(ctx, body);
    ctx.writeln("}");

    if scoped {
        ctx.dedent();
        ctx.writeln("}");
    }
    ctx.exit_loop(renamed);
}

/// Indented statement block.
fn emit_block(ctx: &mut CodegenContext<'_>, body: Option<NodeId>) {
    ctx.indent();
    render_statements(ctx, body, false);
    ctx.dedent();
}
