//! Evaluation sessions.

use crate::{
    evaluator::{self, EvaluatorOptions, Inapplicable, OperatorTable, OperatorTableBuilder},
    ir::{FunctionTable, Node},
    values::Literal,
};
use static_assertions::assert_impl_all;

/// Operator table and default limits shared by many evaluation requests.
///
/// The table is built once when the session is created. Each call to
/// [`Session::fold`] is an independent request with its own step budget and
/// frames, so a session can be shared freely, including across threads.
///
/// # Example
///
/// ```ignore
/// use ceval_core::api::Session;
/// use ceval_core::evaluator::{Builtin, EvaluatorOptions};
///
/// let session = Session::new(EvaluatorOptions::default(), |ops| {
///     ops.register(int_plus_symbol, Builtin::IntPlus);
///     ops.register(string_plus_symbol, Builtin::MemberStringPlus);
/// });
///
/// match session.fold(&program, &call) {
///     Ok(literal) => replace_call_site(literal),
///     Err(_) => {} // leave the call site alone
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    operators: OperatorTable,
    options: EvaluatorOptions,
}

assert_impl_all!(Session: Send, Sync);

impl Session {
    /// Create a session, registering the host's operator symbols.
    ///
    /// The initialization closure receives the operator table builder.
    pub fn new(options: EvaluatorOptions, init: impl FnOnce(&mut OperatorTableBuilder)) -> Self {
        let mut builder = OperatorTable::builder();
        init(&mut builder);
        Self {
            operators: builder.build(),
            options,
        }
    }

    /// Create a session from an already built operator table.
    pub fn with_operators(options: EvaluatorOptions, operators: OperatorTable) -> Self {
        Self { operators, options }
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Default limits applied by [`Session::fold`].
    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate a call site with the session's default limits.
    pub fn fold<'a>(
        &self,
        functions: &dyn FunctionTable<'a>,
        call: &Node<'a>,
    ) -> Result<Literal, Inapplicable> {
        self.fold_with_options(self.options, functions, call)
    }

    /// Evaluate a call site, overriding the session's limits for this request.
    pub fn fold_with_options<'a>(
        &self,
        options: EvaluatorOptions,
        functions: &dyn FunctionTable<'a>,
        call: &Node<'a>,
    ) -> Result<Literal, Inapplicable> {
        evaluator::eval_with_options(options, functions, &self.operators, call)
    }
}
