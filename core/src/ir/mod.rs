//! Read-only program representation handed to the evaluator by its host.
//!
//! The host owns the tree: it resolves names, allocates identities and lowers
//! its own syntax into [`Node`]s. The evaluator only ever reads it.
//!
//! Nodes are arena-allocated and `Copy`, so sub-trees are shared by reference
//! and a whole program lives as long as the arena that holds it.
//!
//! ```ignore
//! use bumpalo::Bump;
//! use ceval_core::{evaluator::Builtin, ir::ProgramBuilder};
//!
//! let arena = Bump::new();
//! let b = ProgramBuilder::new(&arena);
//! let sum = b.call_builtin(Builtin::IntPlus, &[b.int(1), b.int(2)]);
//! ```

mod builder;
mod node;
mod program;


pub use builder::ProgramBuilder;
pub use node::{Branch, Call, Constant, Loop, LoopKind, Node, TypeOperator};
pub use program::{Body, Function, FunctionTable, Parameter, Program};

use core::fmt;

/// Identity of a local variable or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub u32);

/// Identity of a loop, targeted by `break` and `continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(pub u32);

/// Identity of a call target, as resolved by the host.
///
/// The same identity space covers user functions and built-in operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop{}", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym{}", self.0)
    }
}
