//! Chileno IR - syntax tree types shared by the evaluator and the generator.
//!
//! This crate contains:
//! - `Name` and `StringInterner` for identifiers and string literals
//! - `NodeId` and ranges for the flat tree
//! - `Node`, `BinaryOp` and `DeclaredType`
//! - `Ast`, the arena that owns every node and exposes one constructor per
//!   node kind (the contract with the external front end)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Build Once**: nodes are never mutated after allocation
//!
//! Float literals are stored as `u32` bits so nodes keep `Eq` and `Hash`.

mod arena;
pub mod ast;
mod interner;
mod name;
mod node_id;

pub use arena::Ast;
pub use ast::{BinaryOp, DeclaredType, Node};
pub use interner::StringInterner;
pub use name::Name;
pub use node_id::{NameRange, NodeId, NodeRange};
