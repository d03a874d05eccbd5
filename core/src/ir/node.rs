//! Node kinds of the evaluable tree.

use super::{LoopId, SymbolId, VariableId};

/// A node of the host's intermediate representation.
///
/// The set of kinds is closed: everything the host can lower that falls
/// outside it has no representation here, and the kinds that are represented
/// but unsupported (some literals, most type operators) fail closed during
/// evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A literal constant.
    Const(Constant<'a>),

    /// Read of a local variable or parameter.
    Get(VariableId),

    /// Assignment to an already declared variable.
    Set {
        variable: VariableId,
        value: &'a Node<'a>,
    },

    /// Local variable declaration, optionally initialized.
    Variable {
        variable: VariableId,
        initializer: Option<&'a Node<'a>>,
    },

    /// Ordered statements; the value of a block is the value of its last statement.
    Block(&'a [Node<'a>]),

    Call(Call<'a>),

    /// Explicit return from the enclosing function. `None` returns Unit.
    Return(Option<&'a Node<'a>>),

    /// Multi-branch conditional; the first branch whose condition holds wins.
    When(&'a [Branch<'a>]),

    Loop(&'a Loop<'a>),

    Break(LoopId),

    Continue(LoopId),

    /// Type operator applied to an argument (coercions, casts, type tests).
    TypeOperator {
        operator: TypeOperator,
        argument: &'a Node<'a>,
    },
}

/// Literal constants as the host represents them.
///
/// Only `Int`, `Boolean` and `String` are evaluable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant<'a> {
    Int(i32),
    Boolean(bool),
    String(&'a str),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Null,
}

impl Constant<'_> {
    /// Host-facing name of the literal kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Constant::Int(_) => "Int",
            Constant::Boolean(_) => "Boolean",
            Constant::String(_) => "String",
            Constant::Long(_) => "Long",
            Constant::Float(_) => "Float",
            Constant::Double(_) => "Double",
            Constant::Char(_) => "Char",
            Constant::Null => "Null",
        }
    }
}

/// A call site.
///
/// Each argument slot is `None` when the caller omitted it and the callee's
/// declared default applies.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    pub callee: SymbolId,
    pub arguments: &'a [Option<Node<'a>>],
}

/// One `condition -> result` arm of a [`Node::When`].
#[derive(Debug, Clone, Copy)]
pub struct Branch<'a> {
    pub condition: Node<'a>,
    pub result: Node<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// `while (cond) body`: the condition is checked before the first iteration.
    PreTest,
    /// `do body while (cond)`: the body runs once before the first check.
    PostTest,
}

#[derive(Debug, Clone, Copy)]
pub struct Loop<'a> {
    /// Unique within one program; `break`/`continue` resolve against it.
    pub id: LoopId,
    pub kind: LoopKind,
    pub condition: Node<'a>,
    pub body: Option<Node<'a>>,
}

/// Type operators the host may attach to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOperator {
    /// The value of the argument is discarded.
    ImplicitCoercionToUnit,
    Cast,
    SafeCast,
    InstanceOf,
    NotInstanceOf,
    ImplicitCast,
    ImplicitNotNull,
    IntegerWidening,
}

impl TypeOperator {
    pub fn name(self) -> &'static str {
        match self {
            TypeOperator::ImplicitCoercionToUnit => "implicit coercion to unit",
            TypeOperator::Cast => "cast",
            TypeOperator::SafeCast => "safe cast",
            TypeOperator::InstanceOf => "instance-of",
            TypeOperator::NotInstanceOf => "not-instance-of",
            TypeOperator::ImplicitCast => "implicit cast",
            TypeOperator::ImplicitNotNull => "implicit not-null",
            TypeOperator::IntegerWidening => "integer widening",
        }
    }
}
