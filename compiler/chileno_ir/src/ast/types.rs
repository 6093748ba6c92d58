//! Declared variable types.

use std::fmt;

/// Type tag fixed at a variable's declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclaredType {
    Int,
    Float,
    String,
}

impl DeclaredType {
    /// Keyword used in source and in generated C++ declarations.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
