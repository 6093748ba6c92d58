//! Whole-program facts the emitters need.
//!
//! Collected in a single walk from the root:
//!
//! 1. **Identifiers** - every variable, parameter and function name, so a
//!    loop counter is only renamed to a name nothing else uses
//! 2. **String variables** - names declared `string` anywhere, so `+` chains
//!    over them are split into separate `<<` insertions
//! 3. **Variable uses** - how often each variable name occurs, so a `for`
//!    counter used outside its loop is declared before the loop

use rustc_hash::{FxHashMap, FxHashSet};

use chileno_ir::{Ast, DeclaredType, Name, Node, NodeId};

/// Facts gathered from one program.
#[derive(Clone, Debug, Default)]
pub struct ProgramInfo {
    /// Names used as identifiers anywhere in the program.
    pub identifiers: FxHashSet<Name>,
    /// Names with at least one `string` declaration.
    pub string_vars: FxHashSet<Name>,
    /// Occurrences of each variable name (references, declarations and
    /// parameters).
    pub uses: FxHashMap<Name, u32>,
}

impl ProgramInfo {
    /// Walk the tree rooted at `root`.
    pub fn collect(ast: &Ast, root: Option<NodeId>) -> Self {
        let mut info = ProgramInfo::default();

        walk(ast, root, |node| {
            for &name in variable_names(ast, node) {
                info.identifiers.insert(name);
                *info.uses.entry(name).or_default() += 1;
            }
            match node {
                Node::Decl {
                    ty: DeclaredType::String,
                    name,
                } => {
                    info.string_vars.insert(*name);
                }
                Node::FuncDef { name, .. } | Node::Call { name, .. } => {
                    info.identifiers.insert(*name);
                }
                _ => {}
            }
        });

        info
    }

    #[inline]
    pub fn is_string_var(&self, name: Name) -> bool {
        self.string_vars.contains(&name)
    }

    #[inline]
    pub fn is_identifier(&self, name: Name) -> bool {
        self.identifiers.contains(&name)
    }

    /// Occurrences of variable `name` in the whole program.
    pub fn uses(&self, name: Name) -> u32 {
        self.uses.get(&name).copied().unwrap_or(0)
    }

    /// Whether `name` occurs anywhere outside the subtree rooted at `within`.
    pub fn used_outside(&self, ast: &Ast, within: NodeId, name: Name) -> bool {
        let mut inside = 0;
        walk(ast, Some(within), |node| {
            inside += variable_names(ast, node)
                .iter()
                .filter(|&&n| n == name)
                .count();
        });
        usize::try_from(self.uses(name)).map_or(true, |total| total > inside)
    }
}

/// Variable names a single node mentions.
fn variable_names<'a>(ast: &'a Ast, node: &'a Node) -> &'a [Name] {
    match node {
        Node::Ident(name) | Node::Decl { name, .. } => std::slice::from_ref(name),
        Node::Params(range) => ast.get_names(*range),
        _ => &[],
    }
}

/// Visit every node reachable from `root`.
fn walk(ast: &Ast, root: Option<NodeId>, mut visit: impl FnMut(&Node)) {
    let mut stack: Vec<NodeId> = root.into_iter().collect();

    while let Some(id) = stack.pop() {
        let node = ast.get(id);
        visit(node);

        match node {
            Node::Int(_)
            | Node::Float(_)
            | Node::Str(_)
            | Node::Ident(_)
            | Node::Decl { .. }
            | Node::Params(_) => {}
            Node::Assign { target, value } => stack.extend([*target, *value]),
            Node::Print(expr) | Node::Input(expr) | Node::Return(expr) => stack.push(*expr),
            Node::Binary { left, right, .. } => stack.extend([*left, *right]),
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                stack.push(*cond);
                stack.extend(then_branch.iter().chain(else_branch));
            }
            Node::While { cond, body } => {
                stack.push(*cond);
                stack.extend(*body);
            }
            Node::For {
                init,
                cond,
                update,
                body,
            } => stack.extend([*init, *cond, *update, *body].into_iter().flatten()),
            Node::Seq { first, second } => stack.extend([*first, *second]),
            Node::FuncDef { params, body, .. } => {
                stack.push(*params);
                stack.extend(*body);
            }
            Node::Call { args, .. } => stack.push(*args),
            Node::Args(range) => stack.extend(ast.get_node_list(*range)),
        }
    }
}
