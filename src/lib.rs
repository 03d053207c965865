//! pocketbudget - Personal budget tracker core
//!
//! This library implements the state machine behind a simple personal
//! budget tracker: a user sets a single budget ceiling, records expenses,
//! edits or deletes them, and reads a continuously recomputed remaining
//! balance. State persists across sessions through a string-keyed
//! key-value store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the on-disk store and audit log
//! - `error`: Custom error types
//! - `models`: Core data models (budget state, expense records, IDs)
//! - `storage`: Key-value storage contract and backends
//! - `services`: Budget setting, expense ledger, remainder calculation
//! - `session`: The enclosing session object exposing intent handlers
//! - `audit`: Append-only audit log of mutations
//!
//! # Example
//!
//! ```rust
//! use pocketbudget::models::ExpenseInput;
//! use pocketbudget::session::TrackerSession;
//! use pocketbudget::storage::MemoryStore;
//!
//! # fn main() -> pocketbudget::error::BudgetResult<()> {
//! let mut session = TrackerSession::open(MemoryStore::new())?;
//! session.set_budget("100")?;
//! session.add_expense(ExpenseInput::new("Groceries", 30.0))?;
//! assert_eq!(session.remaining().value(), 70.0);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use models::{BudgetState, ExpenseId, ExpenseInput, ExpenseRecord};
pub use services::{DraftField, EditSession, Remaining};
pub use session::TrackerSession;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
