//! Activation records for inlined function calls.
//!
//! A [`Frame`] is a flat mapping from variable identity to its current value.
//! Every call gets a fresh one; there is no parent link, since the evaluable
//! subset has no closures and a callee never sees its caller's locals.

use crate::{evaluator::Inapplicable, ir::VariableId, values::Value};
use hashbrown::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Frame {
    locals: HashMap<VariableId, Value>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            locals: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            locals: HashMap::with_capacity(capacity),
        }
    }

    /// Look up a variable.
    ///
    /// A missing binding means the variable never received a constant
    /// value, e.g. its initializer was not evaluable.
    pub fn get(&self, variable: VariableId) -> Result<&Value, Inapplicable> {
        self.locals
            .get(&variable)
            .ok_or(Inapplicable::UnboundVariable(variable))
    }

    /// Bind or rebind a variable.
    pub fn bind(&mut self, variable: VariableId, value: Value) {
        self.locals.insert(variable, value);
    }

    pub fn contains(&self, variable: VariableId) -> bool {
        self.locals.contains_key(&variable)
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}
