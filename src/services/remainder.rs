//! Remaining budget calculation
//!
//! Pure derived value: budget ceiling minus the sum of all expense
//! amounts. Never persisted; recomputed on read. An unset or non-numeric
//! budget yields an undefined (NaN) remainder, which propagates to the
//! caller instead of being coerced to zero.

use std::fmt;

use crate::models::{BudgetState, ExpenseRecord};

/// The remaining budget, with its undefined/overspent status explicit
#[derive(Debug, Clone, Copy)]
pub struct Remaining(f64);

impl Remaining {
    /// The raw remaining value; NaN when the budget is unset or
    /// non-numeric
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when no meaningful remainder exists (budget unset or
    /// non-numeric)
    pub fn is_undefined(&self) -> bool {
        self.0.is_nan()
    }

    /// True when spending exceeds the budget; always false when undefined
    pub fn is_overspent(&self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "n/a")
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// Compute the remaining budget from the current state
pub fn remaining(budget: &BudgetState, expenses: &[ExpenseRecord]) -> Remaining {
    let spent: f64 = expenses.iter().map(|e| e.amount).sum();
    Remaining(budget.to_number() - spent)
}
