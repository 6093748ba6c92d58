//! Expression Code Generation
//!
//! Generates C++ code for Chileno expressions.

use chileno_ir::{BinaryOp, Node, NodeId};

use crate::context::CodegenContext;

/// Generate C++ code for an expression.
///
/// Returns the expression text; nothing is written to the output.
pub fn emit_expr(ctx: &CodegenContext<'_>, id: NodeId) -> String {
    let node = ctx.ast.get(id);

    match node {
        Node::Int(n) => n.to_string(),
        Node::Float(bits) => emit_float_literal(Node::float_value(*bits)),
        Node::Str(text) => emit_string_literal(ctx.ast.name(*text)),
        Node::Ident(name) => ctx.resolve_name(*name).to_string(),
        Node::Binary {
            op: BinaryOp::Add,
            ..
        } if is_stringy(ctx, id) => emit_concat(ctx, id),
        Node::Binary { op, left, right } => {
            let left_expr = emit_expr(ctx, *left);
            let right_expr = emit_expr(ctx, *right);
            format!("({left_expr} {} {right_expr})", op.as_symbol())
        }
        Node::Call { name, args } => emit_call(ctx, ctx.ast.name(*name), *args),
        other => unimplemented_marker(other),
    }
}

/// `name(a, b)`
pub fn emit_call(ctx: &CodegenContext<'_>, name: &str, args: NodeId) -> String {
    let Some(arg_list) = ctx.ast.arg_list(args) else {
        return format!("{name}({})", unimplemented_marker(ctx.ast.get(args)));
    };
    let arg_exprs: Vec<String> = arg_list.iter().map(|&arg| emit_expr(ctx, arg)).collect();
    format!("{name}({})", arg_exprs.join(", "))
}

/// Insertion operands for `cout << ... << endl;`.
///
/// A `+` whose subtree is string-valued concatenates at run time, so each of
/// its additive terms becomes its own insertion. Numeric sums stay one term.
pub fn print_terms(ctx: &CodegenContext<'_>, id: NodeId) -> Vec<String> {
    additive_terms(ctx, id)
        .into_iter()
        .map(|term| emit_expr(ctx, term))
        .collect()
}

/// Operands of a string-valued `+` chain, left to right.
fn additive_terms(ctx: &CodegenContext<'_>, id: NodeId) -> Vec<NodeId> {
    let mut terms = Vec::new();
    collect_additive_terms(ctx, id, &mut terms);
    terms
}

fn collect_additive_terms(ctx: &CodegenContext<'_>, id: NodeId, terms: &mut Vec<NodeId>) {
    match ctx.ast.get(id) {
        Node::Binary {
            op: BinaryOp::Add,
            left,
            right,
        } if is_stringy(ctx, id) => {
            collect_additive_terms(ctx, *left, terms);
            collect_additive_terms(ctx, *right, terms);
        }
        _ => terms.push(id),
    }
}

/// String concatenation as an expression: `(string("x") + to_text(5))`.
///
/// Every operand is lifted to `std::string`; numbers go through the
/// preamble's `to_text` so they read the same as printed output.
fn emit_concat(ctx: &CodegenContext<'_>, id: NodeId) -> String {
    let operands: Vec<String> = additive_terms(ctx, id)
        .into_iter()
        .map(|term| match ctx.ast.get(term) {
            Node::Str(text) => format!("string({})", emit_string_literal(ctx.ast.name(*text))),
            Node::Ident(name) if ctx.info.is_string_var(*name) => {
                ctx.resolve_name(*name).to_string()
            }
            _ => format!("to_text({})", emit_expr(ctx, term)),
        })
        .collect();
    format!("({})", operands.join(" + "))
}

/// Whether `id` produces a string: a string literal, a variable declared
/// `string`, or a `+` with a string-valued operand.
pub fn is_stringy(ctx: &CodegenContext<'_>, id: NodeId) -> bool {
    match ctx.ast.get(id) {
        Node::Str(_) => true,
        Node::Ident(name) => ctx.info.is_string_var(*name),
        Node::Binary {
            op: BinaryOp::Add,
            left,
            right,
        } => is_stringy(ctx, *left) || is_stringy(ctx, *right),
        _ => false,
    }
}

/// Float literal that always reads as floating point in C++.
fn emit_float_literal(f: f32) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        let inf = if f.is_sign_positive() { "INFINITY" } else { "-INFINITY" };
        inf.to_string()
    } else {
        // Debug keeps a decimal point or exponent: `4.0`, `2.5`, `1e20`.
        format!("{f:?}")
    }
}

/// Quoted, escaped C++ string literal.
pub fn emit_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Placeholder for nodes with no rendering rule.
pub fn unimplemented_marker(node: &Node) -> String {
    format!("/* unimplemented: {} */", node.kind_name())
}
