//! Function declarations and the lookup seam between host and evaluator.

use super::{Node, SymbolId, VariableId};
use hashbrown::HashMap;

/// A function declaration as resolved by the host.
///
/// `body` is `None` for functions whose implementation is not available to
/// the evaluator (intrinsics, external declarations, library functions).
#[derive(Debug, Clone, Copy)]
pub struct Function<'a> {
    pub symbol: SymbolId,
    pub name: &'a str,
    pub parameters: &'a [Parameter<'a>],
    pub body: Option<Body<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub variable: VariableId,
    pub default: Option<Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    /// `fun f() { ... }`
    Block(&'a [Node<'a>]),
    /// `fun f() = expr`
    Expression(&'a Node<'a>),
}

/// Resolves call targets to their declarations.
///
/// Implemented by the host over whatever dependency graph it keeps. Every
/// function transitively reachable from an evaluated call must resolve.
pub trait FunctionTable<'a> {
    fn function(&self, symbol: SymbolId) -> Option<&'a Function<'a>>;
}

/// A [`FunctionTable`] backed by a hash map.
#[derive(Debug, Default)]
pub struct Program<'a> {
    functions: HashMap<SymbolId, &'a Function<'a>>,
}

impl<'a> Program<'a> {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Insert a declaration, replacing any previous one with the same symbol.
    pub fn insert(&mut self, function: &'a Function<'a>) {
        self.functions.insert(function.symbol, function);
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look a declaration up by its source name.
    pub fn by_name(&self, name: &str) -> Option<&'a Function<'a>> {
        self.functions.values().copied().find(|f| f.name == name)
    }
}

impl<'a> FunctionTable<'a> for Program<'a> {
    fn function(&self, symbol: SymbolId) -> Option<&'a Function<'a>> {
        self.functions.get(&symbol).copied()
    }
}
