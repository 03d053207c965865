//! Storage layer for pocketbudget
//!
//! The core talks to durable storage through a string-keyed, string-valued
//! key-value contract. The file-backed implementation keeps the whole map
//! in one JSON file and rewrites it atomically on every change.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::BudgetResult;

/// Storage key for the raw budget amount string
pub const BUDGET_KEY: &str = "budget";

/// Storage key for the serialized expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Durable key-value storage contract
///
/// Writes are full-replace per key; an absent key is `None`. Reads happen
/// once at session start to hydrate state, after which the store is only
/// written.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key` if present; removing an absent key is a no-op
    fn remove(&mut self, key: &str) -> BudgetResult<()>;
}
