//! C++ Code Generation for Chileno
//!
//! Renders a Chileno syntax tree as an equivalent C++ program.
//!
//! # Architecture
//!
//! ```text
//!   Ast + root
//!        ↓
//!   ProgramInfo        (identifier names and string-typed variables)
//!        ↓
//!   CppCodegen         (functions pass, then statements pass)
//!        ↓
//!   CodegenResult      (C++ source)
//! ```
//!
//! Generation never fails. Nodes without a rendering rule produce an
//! `/* unimplemented: <kind> */` marker in place.

pub mod analysis;
mod context;
pub mod cpp;

pub use context::CodegenContext;
pub use cpp::CppCodegen;

use chileno_ir::{Ast, NodeId};

/// Generated artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodegenResult {
    /// Complete C++ translation unit.
    pub code: String,
}

impl CodegenResult {
    pub fn new(code: String) -> Self {
        Self { code }
    }
}

/// Render the program rooted at `root` as C++.
pub fn generate(ast: &Ast, root: Option<NodeId>) -> CodegenResult {
    CppCodegen::new(ast).generate(root)
}
