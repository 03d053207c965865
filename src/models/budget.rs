//! Budget ceiling state
//!
//! The budget amount is kept as the raw text the user entered and is only
//! interpreted numerically when the remainder is computed. An empty or
//! non-numeric amount interprets to NaN, which is a displayable state of
//! the remainder rather than an error.

use std::fmt;

/// The budget ceiling and its lock state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetState {
    /// Raw budget amount as entered by the user; empty when unset
    amount: String,

    /// True once submitted; while locked the amount is immutable
    locked: bool,
}

impl BudgetState {
    /// Rehydrate a budget from its persisted raw amount
    ///
    /// A persisted amount means the budget was submitted, so it comes
    /// back locked.
    pub fn from_stored(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            locked: true,
        }
    }

    /// Get the raw amount text
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Check whether the budget is locked (set and awaiting a reset)
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Interpret the raw amount numerically
    ///
    /// Empty or non-numeric text yields NaN, never zero: an unset budget
    /// is an undefined remainder, not a zero baseline.
    pub fn to_number(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Set the amount and lock. Callers enforce the lock check first.
    pub(crate) fn lock_with(&mut self, amount: String) {
        self.amount = amount;
        self.locked = true;
    }

    /// Return to the initial state: empty amount, unlocked
    pub(crate) fn clear(&mut self) {
        self.amount.clear();
        self.locked = false;
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.is_empty() {
            write!(f, "(unset)")
        } else {
            write!(f, "{}", self.amount)
        }
    }
}
