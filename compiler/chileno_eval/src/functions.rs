//! User function table.

use rustc_hash::FxHashMap;

use chileno_ir::{Name, NodeId};

/// A registered function: its parameter list and body, both referring into
/// the tree the interpreter was built over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// A `Params` node.
    pub params: NodeId,
    /// Absent for an empty body.
    pub body: Option<NodeId>,
}

/// Name→definition map. Later definitions replace earlier ones.
#[derive(Default, Debug)]
pub struct FunctionTable {
    defs: FxHashMap<Name, FunctionDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under `name`, returning the definition it shadows.
    pub fn define(&mut self, name: Name, def: FunctionDef) -> Option<FunctionDef> {
        self.defs.insert(name, def)
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<FunctionDef> {
        self.defs.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
