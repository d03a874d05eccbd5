//! ceval - bounded compile-time evaluation of pure call sites
//!
//! # Overview
//!
//! A compiler that has resolved and lowered a program hands ceval a call
//! site whose arguments are constants. ceval interprets the callee, inlining
//! further calls as it goes, and either produces a literal the compiler can
//! substitute for the call or reports that the call is not evaluable. It
//! never panics on a program and never runs longer than its step budget.
//!
//! # Quick Start
//!
//! ```ignore
//! use ceval::{Builtin, Bump, EvaluatorOptions, Literal, ProgramBuilder, Session};
//!
//! let arena = Bump::new();
//! let mut b = ProgramBuilder::new(&arena);
//!
//! // fun evalDouble(x: Int) = x + x
//! let double = b.symbol();
//! let x = b.variable();
//! let body = b.expression_body(b.call_builtin(Builtin::IntPlus, &[b.get(x), b.get(x)]));
//! b.function(double, "evalDouble", &[b.parameter(x)], Some(body));
//!
//! let call = b.call(double, &[b.int(21)]);
//! let operators = b.operator_table();
//! let session = Session::with_operators(EvaluatorOptions::default(), operators);
//!
//! assert_eq!(session.fold(b.program(), &call), Ok(Literal::Int(42)));
//! ```
//!
//! # Failing closed
//!
//! Every failure is an [`Inapplicable`]. Hosts should treat all of them the
//! same way and leave the call site untouched; the variants only say why.

pub use bumpalo::Bump;

pub use ceval_core::api::{EvaluatorOptions, Session};

pub use ceval_core::evaluator::{
    self, Builtin, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS, Evaluator, Inapplicable, OperatorTable,
    OperatorTableBuilder,
};

pub use ceval_core::ir::{
    self, Body, Constant, Function, FunctionTable, LoopId, Node, Parameter, Program,
    ProgramBuilder, SymbolId, TypeOperator, VariableId,
};

pub use ceval_core::values::{self, Literal, Value};
