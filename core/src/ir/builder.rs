//! Arena-backed construction of programs.
//!
//! [`ProgramBuilder`] plays the host's part: it hands out identities,
//! allocates nodes in a `Bump` arena and collects function declarations into
//! a [`Program`]. Built-in operators get fixed symbols, so the builder can
//! also produce the matching [`OperatorTable`].
//!
//! All node constructors take `&self`, so trees can be written inline:
//!
//! ```ignore
//! let sum = b.call_builtin(Builtin::IntPlus, &[b.get(x), b.int(1)]);
//! let body = b.block(&[b.set(x, sum), b.ret(b.get(x))]);
//! ```

use super::{
    Body, Branch, Call, Constant, Function, Loop, LoopId, LoopKind, Node, Parameter, Program,
    SymbolId, TypeOperator, VariableId,
};
use crate::evaluator::{Builtin, OperatorTable};
use bumpalo::Bump;
use core::cell::Cell;

/// Builds nodes and functions in an arena.
///
/// Symbols `0..Builtin::ALL.len()` are reserved for the built-in operators.
pub struct ProgramBuilder<'a> {
    arena: &'a Bump,
    next_variable: Cell<u32>,
    next_loop: Cell<u32>,
    next_symbol: Cell<u32>,
    program: Program<'a>,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            next_variable: Cell::new(0),
            next_loop: Cell::new(0),
            next_symbol: Cell::new(Builtin::ALL.len() as u32),
            program: Program::new(),
        }
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    // ========================================================================
    // Identities
    // ========================================================================

    pub fn variable(&self) -> VariableId {
        VariableId(bump(&self.next_variable))
    }

    pub fn loop_id(&self) -> LoopId {
        LoopId(bump(&self.next_loop))
    }

    /// A fresh symbol for a user function.
    pub fn symbol(&self) -> SymbolId {
        SymbolId(bump(&self.next_symbol))
    }

    /// The symbol reserved for a built-in operator.
    pub fn builtin(&self, builtin: Builtin) -> SymbolId {
        SymbolId(builtin as u32)
    }

    /// An operator table covering every reserved built-in symbol.
    pub fn operator_table(&self) -> OperatorTable {
        let mut table = OperatorTable::builder();
        for builtin in Builtin::ALL {
            table.register(self.builtin(builtin), builtin);
        }
        table.build()
    }

    // ========================================================================
    // Literals
    // ========================================================================

    pub fn constant(&self, constant: Constant<'a>) -> Node<'a> {
        Node::Const(constant)
    }

    pub fn int(&self, value: i32) -> Node<'a> {
        Node::Const(Constant::Int(value))
    }

    pub fn bool(&self, value: bool) -> Node<'a> {
        Node::Const(Constant::Boolean(value))
    }

    pub fn str(&self, value: &str) -> Node<'a> {
        Node::Const(Constant::String(self.arena.alloc_str(value)))
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub fn get(&self, variable: VariableId) -> Node<'a> {
        Node::Get(variable)
    }

    pub fn set(&self, variable: VariableId, value: Node<'a>) -> Node<'a> {
        Node::Set {
            variable,
            value: self.arena.alloc(value),
        }
    }

    /// `val x = initializer`
    pub fn declare(&self, variable: VariableId, initializer: Node<'a>) -> Node<'a> {
        Node::Variable {
            variable,
            initializer: Some(self.arena.alloc(initializer)),
        }
    }

    /// `val x: T` without an initializer.
    pub fn declare_uninit(&self, variable: VariableId) -> Node<'a> {
        Node::Variable {
            variable,
            initializer: None,
        }
    }

    // ========================================================================
    // Structure and control flow
    // ========================================================================

    pub fn block(&self, statements: &[Node<'a>]) -> Node<'a> {
        Node::Block(self.arena.alloc_slice_copy(statements))
    }

    pub fn ret(&self, value: Node<'a>) -> Node<'a> {
        Node::Return(Some(self.arena.alloc(value)))
    }

    pub fn ret_unit(&self) -> Node<'a> {
        Node::Return(None)
    }

    /// `when { c1 -> r1; c2 -> r2; ... }`
    pub fn when(&self, branches: &[(Node<'a>, Node<'a>)]) -> Node<'a> {
        let branches = self
            .arena
            .alloc_slice_fill_iter(branches.iter().map(|&(condition, result)| Branch {
                condition,
                result,
            }));
        Node::When(branches)
    }

    /// `if (c) t` without an else branch.
    pub fn if_then(&self, condition: Node<'a>, then: Node<'a>) -> Node<'a> {
        self.when(&[(condition, then)])
    }

    /// `if (c) t else e`, lowered as a `when` whose last condition is `true`.
    pub fn if_else(&self, condition: Node<'a>, then: Node<'a>, otherwise: Node<'a>) -> Node<'a> {
        self.when(&[(condition, then), (self.bool(true), otherwise)])
    }

    /// `while (condition) body`
    pub fn while_loop(&self, id: LoopId, condition: Node<'a>, body: Option<Node<'a>>) -> Node<'a> {
        Node::Loop(self.arena.alloc(Loop {
            id,
            kind: LoopKind::PreTest,
            condition,
            body,
        }))
    }

    /// `do body while (condition)`
    pub fn do_while(&self, id: LoopId, body: Option<Node<'a>>, condition: Node<'a>) -> Node<'a> {
        Node::Loop(self.arena.alloc(Loop {
            id,
            kind: LoopKind::PostTest,
            condition,
            body,
        }))
    }

    pub fn break_to(&self, id: LoopId) -> Node<'a> {
        Node::Break(id)
    }

    pub fn continue_to(&self, id: LoopId) -> Node<'a> {
        Node::Continue(id)
    }

    pub fn type_operator(&self, operator: TypeOperator, argument: Node<'a>) -> Node<'a> {
        Node::TypeOperator {
            operator,
            argument: self.arena.alloc(argument),
        }
    }

    /// An expression statement whose value is discarded.
    pub fn coerce_to_unit(&self, argument: Node<'a>) -> Node<'a> {
        self.type_operator(TypeOperator::ImplicitCoercionToUnit, argument)
    }

    // ========================================================================
    // Calls
    // ========================================================================

    /// A call supplying every argument.
    pub fn call(&self, callee: SymbolId, arguments: &[Node<'a>]) -> Node<'a> {
        let arguments = self
            .arena
            .alloc_slice_fill_iter(arguments.iter().copied().map(Some));
        Node::Call(Call { callee, arguments })
    }

    /// A call where `None` slots fall back to the callee's defaults.
    pub fn call_with(&self, callee: SymbolId, arguments: &[Option<Node<'a>>]) -> Node<'a> {
        Node::Call(Call {
            callee,
            arguments: self.arena.alloc_slice_copy(arguments),
        })
    }

    pub fn call_builtin(&self, builtin: Builtin, arguments: &[Node<'a>]) -> Node<'a> {
        self.call(self.builtin(builtin), arguments)
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub fn parameter(&self, variable: VariableId) -> Parameter<'a> {
        Parameter {
            variable,
            default: None,
        }
    }

    pub fn parameter_with_default(&self, variable: VariableId, default: Node<'a>) -> Parameter<'a> {
        Parameter {
            variable,
            default: Some(default),
        }
    }

    pub fn block_body(&self, statements: &[Node<'a>]) -> Body<'a> {
        Body::Block(self.arena.alloc_slice_copy(statements))
    }

    pub fn expression_body(&self, expression: Node<'a>) -> Body<'a> {
        Body::Expression(self.arena.alloc(expression))
    }

    /// Declare a function under a symbol obtained from [`Self::symbol`].
    ///
    /// Allocating the symbol first lets the body call the function itself.
    pub fn function(
        &mut self,
        symbol: SymbolId,
        name: &str,
        parameters: &[Parameter<'a>],
        body: Option<Body<'a>>,
    ) -> &'a Function<'a> {
        let function: &'a Function<'a> = self.arena.alloc(Function {
            symbol,
            name: self.arena.alloc_str(name),
            parameters: self.arena.alloc_slice_copy(parameters),
            body,
        });
        self.program.insert(function);
        function
    }

    pub fn program(&self) -> &Program<'a> {
        &self.program
    }

    pub fn finish(self) -> Program<'a> {
        self.program
    }
}

fn bump(counter: &Cell<u32>) -> u32 {
    let id = counter.get();
    counter.set(id + 1);
    id
}
