//! Core data models for pocketbudget
//!
//! This module contains the data structures that represent the budget
//! tracking domain: the budget ceiling, expense records, and the typed
//! input used to create or edit them.

pub mod budget;
pub mod expense;
pub mod ids;

pub use budget::BudgetState;
pub use expense::{ExpenseInput, ExpenseRecord};
pub use ids::ExpenseId;
