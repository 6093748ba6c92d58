//! Analysis passes that run before code generation.

mod program_info;

pub use program_info::ProgramInfo;
