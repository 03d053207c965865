//! Audit logging for pocketbudget
//!
//! Records every mutation in an append-only JSONL log. Audit writes are
//! best-effort: a failed append never fails the mutation it records.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
