//! Integer ID type for expense records
//!
//! Expense IDs are wall-clock derived (milliseconds since the Unix epoch
//! at creation time). The ledger bumps a candidate ID until it is unique
//! among live records, so IDs stay collision-free within a session even
//! when two expenses are created in the same millisecond.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an expense record
///
/// Immutable once assigned; survives persistence round trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an ID seeded from the current wall clock
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Create an ID from a raw integer value
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// The next candidate ID, used to step past collisions
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_wall_clock() {
        let id = ExpenseId::now();
        // Any plausible wall clock is well past the epoch
        assert!(id.as_i64() > 0);
    }

    #[test]
    fn test_id_next_increments() {
        let id = ExpenseId::from_raw(100);
        assert_eq!(id.next(), ExpenseId::from_raw(101));
        assert_ne!(id, id.next());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::from_raw(1700000000000);
        assert_eq!(format!("{}", id), "exp-1700000000000");
    }

    #[test]
    fn test_id_serializes_as_plain_integer() {
        let id = ExpenseId::from_raw(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
