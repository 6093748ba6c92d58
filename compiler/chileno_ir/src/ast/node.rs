//! Syntax tree node variants.
//!
//! Every child is a `NodeId` into the owning `Ast`. Children that may be an
//! empty statement list are `Option<NodeId>`; expression operands are always
//! present.

use crate::{BinaryOp, DeclaredType, Name, NameRange, NodeId, NodeRange};

/// Syntax tree node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    // ===== Literals =====
    /// Integer literal.
    Int(i32),

    /// Float literal (stored as bits for Hash).
    Float(u32),

    /// String literal (interned).
    Str(Name),

    /// Variable reference.
    Ident(Name),

    // ===== Statements =====
    /// Declaration: `int x;`
    Decl { ty: DeclaredType, name: Name },

    /// Assignment: `target = value`. The target is an `Ident` node.
    Assign { target: NodeId, value: NodeId },

    /// `print expr;`
    Print(NodeId),

    /// `input x;` The operand is an `Ident` node.
    Input(NodeId),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },

    /// `if (cond) then else`
    If {
        cond: NodeId,
        then_branch: Option<NodeId>,
        else_branch: Option<NodeId>,
    },

    /// `while (cond) body`
    While { cond: NodeId, body: Option<NodeId> },

    /// `for (init; cond; update) body`
    For {
        init: Option<NodeId>,
        cond: Option<NodeId>,
        update: Option<NodeId>,
        body: Option<NodeId>,
    },

    /// Statement list link. Neither side is ever empty.
    Seq { first: NodeId, second: NodeId },

    // ===== Functions =====
    /// `function name(params) { body }`. `params` is a `Params` node.
    FuncDef {
        name: Name,
        params: NodeId,
        body: Option<NodeId>,
    },

    /// `name(args)`. `args` is an `Args` node.
    Call { name: Name, args: NodeId },

    /// Argument expressions of a call.
    Args(NodeRange),

    /// Parameter names of a function definition.
    Params(NameRange),

    /// `return expr;`
    Return(NodeId),
}

impl Node {
    /// Float literal value.
    #[inline]
    pub fn float_value(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    /// Short human-readable name of the node kind, used in diagnostics and
    /// in the generator's unimplemented markers.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Int(_) => "integer literal",
            Node::Float(_) => "float literal",
            Node::Str(_) => "string literal",
            Node::Ident(_) => "identifier",
            Node::Decl { .. } => "declaration",
            Node::Assign { .. } => "assignment",
            Node::Print(_) => "print",
            Node::Input(_) => "input",
            Node::Binary { .. } => "binary operation",
            Node::If { .. } => "if",
            Node::While { .. } => "while",
            Node::For { .. } => "for",
            Node::Seq { .. } => "sequence",
            Node::FuncDef { .. } => "function definition",
            Node::Call { .. } => "function call",
            Node::Args(_) => "argument list",
            Node::Params(_) => "parameter list",
            Node::Return(_) => "return",
        }
    }
}
