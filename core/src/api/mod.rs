//! Public API for hosts folding call sites to constants.
//!
//! A host creates one [`Session`] per compilation, registering the symbols it
//! resolved for each supported built-in operator, then asks the session to
//! fold every candidate call site it finds. A successful fold yields a
//! [`Literal`](crate::values::Literal) to splice in; any failure means the
//! call site stays as it is.

pub mod session;

pub use crate::evaluator::EvaluatorOptions;
pub use session::Session;
