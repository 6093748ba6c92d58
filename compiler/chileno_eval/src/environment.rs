//! Variable environment with dynamic call scoping.
//!
//! Every variable lives in a shared cell. A call snapshots the name→cell map,
//! runs the body against the live map, then restores the snapshot. Cells
//! created inside the call (declarations, parameters) disappear with the
//! restore; writes through cells that existed before the call stay visible
//! to the caller because the snapshot holds the same cells.

use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chileno_ir::{DeclaredType, Name};

use crate::Value;

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found.
    Undefined,
    /// Value does not fit the declared type.
    Incompatible {
        declared: DeclaredType,
        got: &'static str,
    },
}

/// Error returned by [`Environment::declare`] when the name is already
/// declared in the current call frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyDeclared;

/// A declared variable: its type (absent for parameters bound to none) and
/// its current value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub ty: Option<DeclaredType>,
    pub value: Value,
}

impl Variable {
    /// Type used to parse an input line into this variable.
    ///
    /// Untyped variables follow their current value's tag and fall back to
    /// string when they hold none.
    pub fn input_type(&self) -> DeclaredType {
        self.ty
            .or_else(|| self.value.declared_type())
            .unwrap_or(DeclaredType::String)
    }
}

/// Single-threaded shared variable cell.
#[repr(transparent)]
pub struct VarCell(Rc<RefCell<Variable>>);

impl VarCell {
    #[inline]
    pub fn new(var: Variable) -> Self {
        VarCell(Rc::new(RefCell::new(var)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, Variable> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, Variable> {
        self.0.borrow_mut()
    }
}

impl Clone for VarCell {
    #[inline]
    fn clone(&self) -> Self {
        VarCell(Rc::clone(&self.0))
    }
}

impl fmt::Debug for VarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VarCell").field(&self.0.borrow()).finish()
    }
}

/// Saved environment state, produced by [`Environment::enter_call`].
#[derive(Debug)]
#[must_use = "a call snapshot must be handed back to Environment::restore"]
pub struct EnvSnapshot {
    vars: FxHashMap<Name, VarCell>,
    frame: FxHashSet<Name>,
}

/// Name→variable map plus the set of names declared in the current frame.
#[derive(Default, Debug)]
pub struct Environment {
    vars: FxHashMap<Name, VarCell>,
    /// Names declared or bound as parameters in the innermost call frame
    /// (or at top level when no call is active).
    frame: FxHashSet<Name>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with type `ty`; the value starts as none.
    ///
    /// A same-named variable from a calling frame is shadowed until the call
    /// returns.
    pub fn declare(&mut self, name: Name, ty: DeclaredType) -> Result<(), AlreadyDeclared> {
        if !self.frame.insert(name) {
            return Err(AlreadyDeclared);
        }
        self.vars.insert(
            name,
            VarCell::new(Variable {
                ty: Some(ty),
                value: Value::None,
            }),
        );
        Ok(())
    }

    /// Bind a call parameter. The declared type follows the value's tag;
    /// a none argument yields an untyped binding.
    pub fn bind_param(&mut self, name: Name, value: Value) {
        self.frame.insert(name);
        let ty = value.declared_type();
        self.vars.insert(name, VarCell::new(Variable { ty, value }));
    }

    /// Current value of `name`.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.vars.get(&name).map(|cell| cell.borrow().value.clone())
    }

    /// Full variable record of `name`.
    pub fn variable(&self, name: Name) -> Option<Variable> {
        self.vars.get(&name).map(|cell| cell.borrow().clone())
    }

    #[inline]
    pub fn is_declared(&self, name: Name) -> bool {
        self.vars.contains_key(&name)
    }

    /// Store `value` in `name`, converting it to the declared type.
    ///
    /// Returns the value actually stored.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<Value, AssignError> {
        let cell = self.vars.get(&name).ok_or(AssignError::Undefined)?;
        let mut var = cell.borrow_mut();
        let stored = match var.ty {
            Some(declared) => value.coerce_to(declared).map_err(|rejected| {
                AssignError::Incompatible {
                    declared,
                    got: rejected.type_name(),
                }
            })?,
            None => value,
        };
        var.value = stored.clone();
        Ok(stored)
    }

    /// Save the current bindings and start a fresh call frame.
    pub fn enter_call(&mut self) -> EnvSnapshot {
        EnvSnapshot {
            vars: self.vars.clone(),
            frame: std::mem::take(&mut self.frame),
        }
    }

    /// Put back the bindings saved by [`Environment::enter_call`].
    pub fn restore(&mut self, snapshot: EnvSnapshot) {
        self.vars = snapshot.vars;
        self.frame = snapshot.frame;
    }

    /// Number of visible variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
