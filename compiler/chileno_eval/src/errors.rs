//! Evaluation errors and their constructors.
//!
//! Every error here is fatal: the driver reports it and ends the run with a
//! non-zero status. Division by zero is not an error: it yields 0.
//!
//! Constructors are free functions so call sites read as
//! `Err(undefined_variable(name))`.

use chileno_ir::DeclaredType;

/// Result of evaluation.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Broad error taxonomy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wrong node kind where another was required.
    Shape,
    /// Undefined variable or function, duplicate declaration.
    Binding,
    /// Incompatible assignment, unsupported operands, malformed input.
    Type,
    /// The input stream itself failed.
    Io,
}

impl ErrorCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Binding => "binding",
            Self::Type => "type",
            Self::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("{found} cannot be used as {expected}")]
    UnexpectedNode {
        found: &'static str,
        expected: &'static str,
    },

    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    #[error("variable already declared: {name}")]
    AlreadyDeclared { name: String },

    #[error("cannot assign {got} value to `{name}` declared as {declared}")]
    IncompatibleAssignment {
        name: String,
        declared: DeclaredType,
        got: &'static str,
    },

    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("malformed {declared} input for `{name}`: {input:?}")]
    MalformedInput {
        name: String,
        declared: DeclaredType,
        input: String,
    },

    #[error("failed to read input: {message}")]
    Io { message: String },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedNode { .. } => ErrorCategory::Shape,
            Self::UndefinedVariable { .. }
            | Self::UndefinedFunction { .. }
            | Self::AlreadyDeclared { .. } => ErrorCategory::Binding,
            Self::IncompatibleAssignment { .. }
            | Self::InvalidOperands { .. }
            | Self::MalformedInput { .. } => ErrorCategory::Type,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }
}

/// Fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        Self::new(EvalErrorKind::Io {
            message: err.to_string(),
        })
    }
}

// Shape errors

pub fn unexpected_node(found: &'static str, expected: &'static str) -> EvalError {
    EvalErrorKind::UnexpectedNode { found, expected }.into()
}

// Binding errors

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

pub fn undefined_function(name: &str) -> EvalError {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
    .into()
}

pub fn already_declared(name: &str) -> EvalError {
    EvalErrorKind::AlreadyDeclared {
        name: name.to_string(),
    }
    .into()
}

// Type errors

pub fn incompatible_assignment(name: &str, declared: DeclaredType, got: &'static str) -> EvalError {
    EvalErrorKind::IncompatibleAssignment {
        name: name.to_string(),
        declared,
        got,
    }
    .into()
}

pub fn invalid_operands(op: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalErrorKind::InvalidOperands { op, left, right }.into()
}

pub fn malformed_input(name: &str, declared: DeclaredType, input: &str) -> EvalError {
    EvalErrorKind::MalformedInput {
        name: name.to_string(),
        declared,
        input: input.to_string(),
    }
    .into()
}
