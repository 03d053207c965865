//! Tracker session
//!
//! The enclosing session object: owns the storage backend, the budget
//! setting, and the expense ledger. Hydrates both from storage once at
//! construction and exposes the intent handlers and read accessors the
//! presentation layer consumes. All operations are synchronous and run to
//! completion; mutation, persistence write, and derived recomputation
//! happen strictly in that order.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::TrackerPaths;
use crate::error::BudgetResult;
use crate::models::{BudgetState, ExpenseId, ExpenseInput, ExpenseRecord};
use crate::services::{remaining, BudgetSetting, DraftField, EditSession, ExpenseLedger, Remaining};
use crate::storage::{FileStore, KeyValueStore};

/// A single-user budget tracking session over a key-value store
pub struct TrackerSession<S: KeyValueStore> {
    store: S,
    budget: BudgetSetting,
    ledger: ExpenseLedger,
    audit: Option<AuditLogger>,
}

impl TrackerSession<FileStore> {
    /// Open a session backed by the default on-disk store
    ///
    /// Resolves paths via [`TrackerPaths`], creates the data directories,
    /// and attaches the audit log.
    pub fn open_default() -> BudgetResult<Self> {
        let paths = TrackerPaths::new()?;
        Self::open_at(&paths)
    }

    /// Open a session backed by an on-disk store at the given paths
    pub fn open_at(paths: &TrackerPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        let store = FileStore::open(paths.store_file())?;
        Ok(Self::open(store)?.with_audit(AuditLogger::new(paths.audit_log())))
    }
}

impl<S: KeyValueStore> TrackerSession<S> {
    /// Open a session over the given store, hydrating state from it
    ///
    /// Storage is read exactly once here; afterwards it is only written.
    pub fn open(store: S) -> BudgetResult<Self> {
        let budget = BudgetSetting::hydrate(&store)?;
        let ledger = ExpenseLedger::hydrate(&store)?;
        Ok(Self {
            store,
            budget,
            ledger,
            audit: None,
        })
    }

    /// Attach an audit logger recording every successful mutation
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    // ---- Read accessors ----------------------------------------------

    /// Current budget state
    pub fn budget(&self) -> &BudgetState {
        self.budget.state()
    }

    /// Ordered snapshot of the expenses
    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.ledger.list()
    }

    /// Current edit session state
    pub fn edit_session(&self) -> &EditSession {
        self.ledger.session()
    }

    /// The remaining budget, recomputed on every read
    pub fn remaining(&self) -> Remaining {
        remaining(self.budget.state(), self.ledger.list())
    }

    /// Consume the session, returning the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    // ---- Intent handlers ---------------------------------------------

    /// Set the budget ceiling from raw user text and lock it
    pub fn set_budget(&mut self, raw_amount: impl Into<String>) -> BudgetResult<()> {
        self.budget.set(raw_amount, &mut self.store)?;
        self.log(AuditEntry::created(
            EntityType::Budget,
            "budget",
            format!("set to {}", self.budget.state().amount()),
        ));
        Ok(())
    }

    /// Reset the budget to unset and unlocked
    pub fn reset_budget(&mut self) -> BudgetResult<()> {
        self.budget.reset(&mut self.store)?;
        self.log(AuditEntry::deleted(EntityType::Budget, "budget", "reset"));
        Ok(())
    }

    /// Add a new expense to the end of the ledger
    pub fn add_expense(&mut self, input: ExpenseInput) -> BudgetResult<ExpenseRecord> {
        let record = self.ledger.add(input, &mut self.store)?;
        self.log(AuditEntry::created(
            EntityType::Expense,
            record.id.to_string(),
            format!("{}: {}", record.description, record.amount),
        ));
        Ok(record)
    }

    /// Begin editing the expense with the given ID
    pub fn begin_edit(&mut self, id: ExpenseId) -> BudgetResult<()> {
        self.ledger.begin_edit(id)
    }

    /// Update one field of the working draft
    pub fn edit_draft_field(&mut self, field: DraftField) {
        self.ledger.update_draft(field);
    }

    /// Commit the working draft into its target record
    ///
    /// Returns `None` when there was nothing to commit (no open session,
    /// or the target was deleted in the meantime).
    pub fn commit_edit(&mut self) -> BudgetResult<Option<ExpenseRecord>> {
        let committed = self.ledger.commit_edit(&mut self.store)?;
        if let Some(record) = &committed {
            self.log(AuditEntry::updated(
                EntityType::Expense,
                record.id.to_string(),
                format!("{}: {}", record.description, record.amount),
            ));
        }
        Ok(committed)
    }

    /// Discard the working draft without touching the ledger
    pub fn cancel_edit(&mut self) {
        self.ledger.cancel_edit();
    }

    /// Delete the expense with the given ID (idempotent)
    pub fn delete_expense(&mut self, id: ExpenseId) -> BudgetResult<()> {
        let existed = self.ledger.get(id).is_some();
        self.ledger.delete(id, &mut self.store)?;
        if existed {
            self.log(AuditEntry::deleted(
                EntityType::Expense,
                id.to_string(),
                "deleted",
            ));
        }
        Ok(())
    }

    /// Best-effort audit write; a failed append never fails the mutation
    fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            let _ = logger.log(&entry);
        }
    }
}
