//! Arena that owns the syntax tree.
//!
//! - Contiguous storage for all nodes
//! - Child references use `NodeId` indices
//! - Argument lists and parameter lists are ranges into side tables
//!
//! The `make_*` constructors are the whole contract with the external front
//! end: it calls them bottom-up with already-built children and hands the
//! finished `Ast` plus its root to the evaluator or the generator. Nothing
//! mutates a node once it is allocated.

use std::fmt;

use crate::{BinaryOp, DeclaredType, Name, NameRange, Node, NodeId, NodeRange, StringInterner};

/// Contiguous storage for every node of one program.
#[derive(Default)]
pub struct Ast {
    /// All nodes (indexed by `NodeId`).
    nodes: Vec<Node>,

    /// Flattened argument lists.
    node_lists: Vec<NodeId>,

    /// Flattened parameter-name lists.
    param_names: Vec<Name>,

    /// Identifiers and string literal contents.
    interner: StringInterner,
}

impl Ast {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Node allocation =====

    /// Allocate a node, return its ID.
    ///
    /// # Panics
    /// Panics if the arena grows past `u32::MAX` nodes.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("syntax tree exceeded u32::MAX nodes"));
        self.nodes.push(node);
        NodeId::new(index)
    }

    /// Get a node by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Names =====

    /// Intern an identifier or string literal.
    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Resolve a name to its text.
    #[inline]
    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// The interner backing this tree.
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    // ===== Lists =====

    /// Get the nodes in a range.
    #[inline]
    pub fn get_node_list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.node_lists[start..start + range.len()]
    }

    /// Get the names in a range.
    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        let start = range.start as usize;
        &self.param_names[start..start + range.len()]
    }

    /// Argument expressions of an `Args` node; `None` for any other kind.
    pub fn arg_list(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.get(id) {
            Node::Args(range) => Some(self.get_node_list(*range)),
            _ => None,
        }
    }

    /// Parameter names of a `Params` node; `None` for any other kind.
    pub fn param_list(&self, id: NodeId) -> Option<&[Name]> {
        match self.get(id) {
            Node::Params(range) => Some(self.get_names(*range)),
            _ => None,
        }
    }

    // ===== Tree construction =====

    pub fn make_int(&mut self, value: i32) -> NodeId {
        self.alloc(Node::Int(value))
    }

    pub fn make_float(&mut self, value: f32) -> NodeId {
        self.alloc(Node::Float(value.to_bits()))
    }

    pub fn make_string(&mut self, value: &str) -> NodeId {
        let name = self.intern(value);
        self.alloc(Node::Str(name))
    }

    pub fn make_ident(&mut self, name: &str) -> NodeId {
        let name = self.intern(name);
        self.alloc(Node::Ident(name))
    }

    pub fn make_decl(&mut self, ty: DeclaredType, name: &str) -> NodeId {
        let name = self.intern(name);
        self.alloc(Node::Decl { ty, name })
    }

    pub fn make_assign(&mut self, target: NodeId, value: NodeId) -> NodeId {
        self.alloc(Node::Assign { target, value })
    }

    pub fn make_print(&mut self, expr: NodeId) -> NodeId {
        self.alloc(Node::Print(expr))
    }

    pub fn make_input(&mut self, target: NodeId) -> NodeId {
        self.alloc(Node::Input(target))
    }

    pub fn make_binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(Node::Binary { op, left, right })
    }

    pub fn make_if(
        &mut self,
        cond: NodeId,
        then_branch: Option<NodeId>,
        else_branch: Option<NodeId>,
    ) -> NodeId {
        self.alloc(Node::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn make_while(&mut self, cond: NodeId, body: Option<NodeId>) -> NodeId {
        self.alloc(Node::While { cond, body })
    }

    pub fn make_for(
        &mut self,
        init: Option<NodeId>,
        cond: Option<NodeId>,
        update: Option<NodeId>,
        body: Option<NodeId>,
    ) -> NodeId {
        self.alloc(Node::For {
            init,
            cond,
            update,
            body,
        })
    }

    /// Link two statements. An absent side collapses to the other one, so a
    /// `Seq` node never has an empty half and zero statements stay absent.
    pub fn make_seq(&mut self, first: Option<NodeId>, second: Option<NodeId>) -> Option<NodeId> {
        match (first, second) {
            (None, other) | (other, None) => other,
            (Some(first), Some(second)) => Some(self.alloc(Node::Seq { first, second })),
        }
    }

    /// Build a right-leaning `Seq` chain from a statement list.
    pub fn make_block(&mut self, stmts: impl IntoIterator<Item = NodeId>) -> Option<NodeId> {
        let stmts: Vec<NodeId> = stmts.into_iter().collect();
        stmts
            .into_iter()
            .rev()
            .fold(None, |rest, stmt| self.make_seq(Some(stmt), rest))
    }

    pub fn make_func_def(&mut self, name: &str, params: NodeId, body: Option<NodeId>) -> NodeId {
        let name = self.intern(name);
        self.alloc(Node::FuncDef { name, params, body })
    }

    pub fn make_call(&mut self, name: &str, args: NodeId) -> NodeId {
        let name = self.intern(name);
        self.alloc(Node::Call { name, args })
    }

    /// # Panics
    /// Panics if the flattened list storage grows past `u32::MAX` entries.
    pub fn make_args(&mut self, args: impl IntoIterator<Item = NodeId>) -> NodeId {
        let start = list_index(self.node_lists.len());
        self.node_lists.extend(args);
        let len = list_index(self.node_lists.len()) - start;
        self.alloc(Node::Args(NodeRange::new(start, len)))
    }

    /// # Panics
    /// Panics if the flattened name storage grows past `u32::MAX` entries.
    pub fn make_params<'s>(&mut self, params: impl IntoIterator<Item = &'s str>) -> NodeId {
        let start = list_index(self.param_names.len());
        for param in params {
            let name = self.intern(param);
            self.param_names.push(name);
        }
        let len = list_index(self.param_names.len()) - start;
        self.alloc(Node::Params(NameRange::new(start, len)))
    }

    pub fn make_return(&mut self, expr: NodeId) -> NodeId {
        self.alloc(Node::Return(expr))
    }
}

fn list_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("syntax tree list storage exceeded u32::MAX"))
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ast {{ {} nodes, {} list entries, {} params }}",
            self.nodes.len(),
            self.node_lists.len(),
            self.param_names.len()
        )
    }
}
