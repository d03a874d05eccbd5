//! Values produced by evaluation.
//!
//! [`Value`] is what any node evaluates to. [`Literal`] is the subset a host
//! can splice back into its program: everything except `Unit`.

mod value;


pub use value::{Literal, Value, ValueKind};
