//! C++ backend.
//!
//! Output layout:
//!
//! ```text
//! #include <iostream>
//! #include <sstream>
//! #include <string>
//! using namespace std;
//!
//! string to_text(...)   number text for concatenation
//!
//! auto f(auto a) {      functions pass
//!     ...
//! }
//!
//! int main() {          statements pass
//!     ...
//!     return 0;
//! }
//! ```

pub mod expr;
pub mod function;
pub mod stmt;

use chileno_ir::{Ast, NodeId};

use crate::analysis::ProgramInfo;
use crate::context::CodegenContext;
use crate::CodegenResult;

pub use function::render_functions;
pub use stmt::render_statements;

/// Headers plus `to_text`, which renders a number the way `cout` prints
/// it so string concatenation matches printed output.
const PREAMBLE: &str = "\
#include <iostream>
#include <sstream>
#include <string>
using namespace std;

template <typename T>
string to_text(const T& value) {
    ostringstream out;
    out << value;
    return out.str();
}
";

/// C++ code generator over one tree.
pub struct CppCodegen<'a> {
    ast: &'a Ast,
}

impl<'a> CppCodegen<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        Self { ast }
    }

    /// Render the program rooted at `root`.
    pub fn generate(&self, root: Option<NodeId>) -> CodegenResult {
        let info = ProgramInfo::collect(self.ast, root);
        tracing::debug!(
            identifiers = info.identifiers.len(),
            string_vars = info.string_vars.len(),
            "generating C++"
        );
        let mut ctx = CodegenContext::new(self.ast, info);

        ctx.write(PREAMBLE);
        ctx.newline();

        render_functions(&mut ctx, root);

        ctx.writeln("int main() {");
        ctx.indent();
        render_statements(&mut ctx, root, false);
        ctx.writeln("return 0;");
        ctx.dedent();
        ctx.writeln("}");

        CodegenResult::new(ctx.take_output())
    }
}
