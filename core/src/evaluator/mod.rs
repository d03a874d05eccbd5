//! Bounded tree-walking evaluator for constant folding.
//!
//! The evaluator takes a call site from the host's program tree and either
//! reduces it to a [`Literal`] or reports that it is not evaluable. Nothing
//! else is observable: no panics, no partial results.
//!
//! ## Design Principles
//!
//! - **Fail closed**: anything outside the supported subset yields [`Inapplicable`]
//! - **Bounded**: a single [`StepBudget`] per request caps total work, across
//!   loops and recursive calls alike
//! - **Read-only**: the host's tree is never modified
//!
//! ## Example
//!
//! ```ignore
//! use bumpalo::Bump;
//! use ceval_core::{evaluator, ir::ProgramBuilder, evaluator::Builtin};
//!
//! let arena = Bump::new();
//! let mut b = ProgramBuilder::new(&arena);
//! let call = b.call_builtin(Builtin::IntPlus, &[b.int(1), b.int(2)]);
//! let operators = b.operator_table();
//! let program = b.finish();
//!
//! let result = evaluator::eval(&program, &operators, &call).unwrap();
//! assert_eq!(result.as_int(), Some(3));
//! ```

mod budget;
mod error;
mod eval;
mod operators;


pub use budget::StepBudget;
pub use error::{Inapplicable, Interrupt, Outcome};
pub use eval::Evaluator;
pub use operators::{Builtin, Combinator, OperatorEntry, OperatorTable, OperatorTableBuilder};

use crate::{
    ir::{FunctionTable, Node},
    values::Literal,
};

/// Step budget used when the host does not configure one.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Nesting limit used when the host does not configure one.
///
/// With `std` the evaluator grows its stack on demand, so nesting is bounded
/// by the step budget alone.
#[cfg(any(feature = "std", test))]
pub const DEFAULT_MAX_DEPTH: usize = usize::MAX;

/// Nesting limit used when the host does not configure one.
///
/// Without `std` the native stack cannot grow, so nesting is capped.
#[cfg(not(any(feature = "std", test)))]
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Limits for one evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Total number of evaluation steps one request may take, including all
    /// calls it inlines.
    ///
    /// Default: 10_000
    pub max_steps: usize,

    /// Maximum nesting of node evaluations, across inlined calls.
    ///
    /// Every nesting level costs at least one step, so this only binds when it
    /// is below `max_steps`.
    ///
    /// Default: unlimited with `std`, 512 without
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a call site with default limits.
///
/// ## Arguments
///
/// - `functions`: Declarations of every function reachable from `call`
/// - `operators`: Host symbols of the supported built-in operators
/// - `call`: The call site to fold
///
/// ## Returns
///
/// The literal the call reduces to, or the reason it does not.
pub fn eval<'a>(
    functions: &dyn FunctionTable<'a>,
    operators: &OperatorTable,
    call: &Node<'a>,
) -> Result<Literal, Inapplicable> {
    eval_with_options(EvaluatorOptions::default(), functions, operators, call)
}

/// Evaluate a call site with custom limits.
///
/// ## Example
///
/// ```ignore
/// let options = EvaluatorOptions {
///     max_steps: 1_000_000,
///     ..Default::default()
/// };
/// let result = eval_with_options(options, &program, &operators, &call)?;
/// ```
pub fn eval_with_options<'a>(
    options: EvaluatorOptions,
    functions: &dyn FunctionTable<'a>,
    operators: &OperatorTable,
    call: &Node<'a>,
) -> Result<Literal, Inapplicable> {
    Evaluator::new(options, functions, operators).eval(call)
}
