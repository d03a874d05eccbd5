//! Failure and control-transfer signals.
//!
//! Evaluation of a node yields an [`Outcome`]: either a plain value, or an
//! [`Interrupt`] that unwinds enclosing constructs until something intercepts
//! it. Only loops intercept their own `Break`/`Continue`, and only calls
//! intercept `Return`. `Inapplicable` is never intercepted.
//!
//! # Failure categories
//!
//! All [`Inapplicable`] variants mean the same thing to a host: leave the call
//! site alone. The variants exist for diagnostics and tracing only.
//!
//! - **Resource exhaustion**: the step budget or the nesting limit ran out.
//! - **Everything else**: the fragment uses something outside the evaluable
//!   subset (unsupported node, wrong value kind, unknown callee, ...).

use crate::{
    ir::{LoopId, SymbolId, VariableId},
    values::{Value, ValueKind},
};

/// Result of evaluating one node.
pub type Outcome = Result<Value, Interrupt>;

/// Anything other than a plain value flowing out of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupt {
    /// An explicit `return` is in flight.
    Return(Value),
    /// A `break` targeting the given loop is in flight.
    Break(LoopId),
    /// A `continue` targeting the given loop is in flight.
    Continue(LoopId),
    /// Evaluation cannot proceed.
    Inapplicable(Inapplicable),
}

impl From<Inapplicable> for Interrupt {
    fn from(e: Inapplicable) -> Self {
        Interrupt::Inapplicable(e)
    }
}

/// Why a fragment could not be evaluated to a constant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Inapplicable {
    /// The node kind, literal kind or type operator is outside the subset.
    #[error("unsupported construct: {construct}")]
    Unsupported { construct: &'static str },

    /// The step budget was exhausted.
    #[error("evaluation exceeded the budget of {limit} steps")]
    StepsExhausted { limit: usize },

    /// Evaluation nested deeper than allowed.
    #[error("evaluation nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    /// A value of the wrong kind was supplied to an accessor or operator.
    #[error("expected a value of kind {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// Read of a variable that holds no constant value in the current frame.
    #[error("variable {0} has no constant value")]
    UnboundVariable(VariableId),

    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The callee has no available body and is not a known built-in.
    #[error("call target {0} is neither an evaluable function nor a built-in")]
    UnknownCallee(SymbolId),

    /// A parameter received no argument and declares no default.
    #[error("no argument or default for parameter {index} of {callee}")]
    MissingArgument { callee: SymbolId, index: usize },

    /// A built-in was called with the wrong number of arguments.
    #[error("built-in expects {expected} argument(s), got {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A function body was left by something other than `return` or fallthrough.
    #[error("function {0} exited abnormally")]
    AbnormalExit(SymbolId),

    /// The request evaluated to Unit, which has no literal form.
    #[error("result is not a literal")]
    NotALiteral,
}

impl Inapplicable {
    /// Whether this failure stems from an evaluation limit rather than the program.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(
            self,
            Inapplicable::StepsExhausted { .. } | Inapplicable::DepthExceeded { .. }
        )
    }
}

impl core::fmt::Display for Interrupt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Interrupt::Return(v) => write!(f, "return {}", v),
            Interrupt::Break(id) => write!(f, "break@{}", id),
            Interrupt::Continue(id) => write!(f, "continue@{}", id),
            Interrupt::Inapplicable(e) => write!(f, "{}", e),
        }
    }
}
