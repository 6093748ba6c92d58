//! Flat syntax tree types.
//!
//! - `node`: the closed `Node` sum type, one variant per syntactic form
//! - `operators`: binary operator tags
//! - `types`: declared variable types

mod node;
mod operators;
mod types;

pub use node::Node;
pub use operators::BinaryOp;
pub use types::DeclaredType;
