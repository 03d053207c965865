//! Expense record model
//!
//! Represents a single expense in the ledger: an immutable ID plus a
//! description and amount that may only change through an edit.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// A single expense in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned at creation and never changed
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (non-negative; fractional currency amounts permitted)
    pub amount: f64,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }
}

/// Typed input for creating an expense or editing a draft
///
/// The description/amount pair travels as an explicit struct so the core
/// never reads fields off a UI event object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: f64,
}

impl ExpenseInput {
    /// Create a new expense input
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

impl From<&ExpenseRecord> for ExpenseInput {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount,
        }
    }
}
