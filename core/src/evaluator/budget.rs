//! Step budget shared by every frame of one top-level request.

use crate::evaluator::Inapplicable;

/// Upper bound on the number of evaluation steps of one request.
///
/// One budget is created per top-level request and threaded by mutable
/// reference through every nested call, so recursion does not get a fresh
/// allowance. It only ever decreases.
#[derive(Debug, Clone)]
pub struct StepBudget {
    limit: usize,
    remaining: usize,
}

impl StepBudget {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Consume one step, or fail once the budget is spent.
    pub fn take(&mut self) -> Result<(), Inapplicable> {
        if self.remaining == 0 {
            return Err(Inapplicable::StepsExhausted { limit: self.limit });
        }
        self.remaining -= 1;
        Ok(())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn used(&self) -> usize {
        self.limit - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
