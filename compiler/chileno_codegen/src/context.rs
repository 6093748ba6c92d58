//! Code generation context and state.
//!
//! The `CodegenContext` holds the output buffer, indentation, and the stack
//! of active loop-counter renames.

use chileno_ir::{Ast, Name};

use crate::analysis::ProgramInfo;

/// Code generation context.
pub struct CodegenContext<'a> {
    /// Tree being rendered.
    pub ast: &'a Ast,
    /// Whole-program facts.
    pub info: ProgramInfo,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
    /// Active counter renames, innermost last.
    renames: Vec<(Name, String)>,
    /// Number of enclosing `for` loops.
    loop_depth: u32,
}

impl<'a> CodegenContext<'a> {
    pub fn new(ast: &'a Ast, info: ProgramInfo) -> Self {
        Self {
            ast,
            info,
            indent: 0,
            output: String::with_capacity(4096),
            renames: Vec::new(),
            loop_depth: 0,
        }
    }

    /// Resolve a name to the text it renders as, honouring counter renames.
    pub fn resolve_name(&self, name: Name) -> &str {
        self.renames
            .iter()
            .rev()
            .find(|(original, _)| *original == name)
            .map_or_else(|| self.ast.name(name), |(_, canonical)| canonical.as_str())
    }

    /// Canonical counter name for the current loop depth: `i`, then `i1`,
    /// `i2`, ...
    pub fn counter_name(&self) -> String {
        if self.loop_depth == 0 {
            "i".to_string()
        } else {
            format!("i{}", self.loop_depth)
        }
    }

    /// Enter a `for` loop. When `counter` is given and its canonical name is
    /// not already taken by another identifier, the counter renders under the
    /// canonical name until [`CodegenContext::exit_loop`].
    ///
    /// Returns whether a rename was bound.
    pub fn enter_loop(&mut self, counter: Option<Name>) -> bool {
        let bound = counter.and_then(|original| {
            let canonical = self.counter_name();
            let taken = self
                .ast
                .interner()
                .get(&canonical)
                .is_some_and(|existing| existing != original && self.info.is_identifier(existing));
            (!taken).then_some((original, canonical))
        });
        self.loop_depth += 1;
        match bound {
            Some(rename) => {
                self.renames.push(rename);
                true
            }
            None => false,
        }
    }

    /// Leave the loop entered by the matching [`CodegenContext::enter_loop`].
    pub fn exit_loop(&mut self, renamed: bool) {
        debug_assert!(self.loop_depth > 0, "exit_loop called outside a loop");
        self.loop_depth = self.loop_depth.saturating_sub(1);
        if renamed {
            self.renames.pop();
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// Write a string to output.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Run `f` against an empty buffer and return what it wrote.
    pub fn capture(&mut self, f: impl FnOnce(&mut Self)) -> String {
        let saved = std::mem::take(&mut self.output);
        f(self);
        std::mem::replace(&mut self.output, saved)
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
