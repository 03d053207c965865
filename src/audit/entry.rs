//! Audit entry data structures
//!
//! Defines the structure of audit log entries: operation types, entity
//! types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Budget,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable summary of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry
    pub fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            summary,
        }
    }

    /// Entry for a create operation
    pub fn created(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Create, entity_type, entity_id, Some(summary.into()))
    }

    /// Entry for an update operation
    pub fn updated(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Update, entity_type, entity_id, Some(summary.into()))
    }

    /// Entry for a delete operation
    pub fn deleted(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Delete, entity_type, entity_id, Some(summary.into()))
    }
}
