//! Expense ledger service
//!
//! Owns the ordered expense list, the CRUD operations over it, and the
//! transient edit session. Every mutation is followed by a write-through
//! persistence of the full list under the `"expenses"` key, so persisted
//! state never lags in-memory state observably.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseId, ExpenseInput, ExpenseRecord};
use crate::storage::{KeyValueStore, EXPENSES_KEY};

/// The transient in-place edit session: at most one active at a time
///
/// The target is referenced by ID, never by pointer, so deleting the
/// referenced record invalidates the session without dangling access.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    /// No edit in progress
    #[default]
    Idle,
    /// An expense is being edited; the draft is independent of the
    /// committed record until saved
    Editing {
        target: ExpenseId,
        draft: ExpenseInput,
    },
}

impl EditSession {
    /// ID of the record being edited, if any
    pub fn target(&self) -> Option<ExpenseId> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(*target),
        }
    }

    /// The working draft, if an edit is in progress
    pub fn draft(&self) -> Option<&ExpenseInput> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Check whether an edit is in progress
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// A single draft field update
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Description(String),
    Amount(f64),
}

/// Owns the ordered list of expense records and the active edit session
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    expenses: Vec<ExpenseRecord>,
    session: EditSession,
}

impl ExpenseLedger {
    /// Hydrate the ledger from storage
    ///
    /// An absent `"expenses"` key means an empty ledger. The edit session
    /// is transient and always starts idle.
    pub fn hydrate(store: &dyn KeyValueStore) -> BudgetResult<Self> {
        let expenses = match store.get(EXPENSES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(Self {
            expenses,
            session: EditSession::Idle,
        })
    }

    /// Read-only snapshot of the expenses, insertion order preserved
    pub fn list(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Current edit session state
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Add a new expense to the end of the ledger
    ///
    /// Requires a non-empty description and a finite amount >= 0. The new
    /// record gets a fresh wall-clock-derived ID, unique among live
    /// records.
    pub fn add(
        &mut self,
        input: ExpenseInput,
        store: &mut dyn KeyValueStore,
    ) -> BudgetResult<ExpenseRecord> {
        validate(&input)?;

        let record = ExpenseRecord::new(self.allocate_id(), input.description, input.amount);
        self.expenses.push(record.clone());
        self.persist(store)?;
        Ok(record)
    }

    /// Edit an expense in place, preserving its ID and list position
    ///
    /// Surfaces `NotFound` if no record has the given ID; the ledger is
    /// structurally unchanged in that case.
    pub fn edit(
        &mut self,
        id: ExpenseId,
        input: ExpenseInput,
        store: &mut dyn KeyValueStore,
    ) -> BudgetResult<ExpenseRecord> {
        validate(&input)?;

        let record = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        record.description = input.description;
        record.amount = input.amount;
        let updated = record.clone();

        self.persist(store)?;
        Ok(updated)
    }

    /// Delete the expense with the given ID
    ///
    /// Idempotent: deleting an absent ID is a no-op. If the deleted record
    /// was the active edit session's target, the session is cleared.
    pub fn delete(&mut self, id: ExpenseId, store: &mut dyn KeyValueStore) -> BudgetResult<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Ok(());
        }

        if self.session.target() == Some(id) {
            self.session = EditSession::Idle;
        }

        self.persist(store)
    }

    /// Begin editing the expense with the given ID
    ///
    /// Seeds the draft with the record's current values. Beginning an edit
    /// while one is already active replaces the current target and draft,
    /// equivalent to cancel-then-begin.
    pub fn begin_edit(&mut self, id: ExpenseId) -> BudgetResult<()> {
        let record = self
            .get(id)
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        self.session = EditSession::Editing {
            target: id,
            draft: ExpenseInput::from(record),
        };
        Ok(())
    }

    /// Update one field of the working draft
    ///
    /// Touches only the draft, never the committed record. Does nothing
    /// when no edit is in progress.
    pub fn update_draft(&mut self, field: DraftField) {
        if let EditSession::Editing { draft, .. } = &mut self.session {
            match field {
                DraftField::Description(description) => draft.description = description,
                DraftField::Amount(amount) => draft.amount = amount,
            }
        }
    }

    /// Commit the working draft into the target record and clear the session
    ///
    /// Returns the updated record, or `None` when there was nothing to
    /// commit: no session open, or the target vanished (a silent no-op,
    /// not an error). A validation failure leaves the session open so the
    /// draft can be corrected; a storage failure clears it, since the
    /// in-memory edit has already been applied and stays authoritative.
    pub fn commit_edit(
        &mut self,
        store: &mut dyn KeyValueStore,
    ) -> BudgetResult<Option<ExpenseRecord>> {
        let (target, draft) = match &self.session {
            EditSession::Idle => return Ok(None),
            EditSession::Editing { target, draft } => (*target, draft.clone()),
        };

        match self.edit(target, draft, store) {
            Ok(record) => {
                self.session = EditSession::Idle;
                Ok(Some(record))
            }
            Err(err) if err.is_not_found() => {
                self.session = EditSession::Idle;
                Ok(None)
            }
            Err(err) if err.is_validation() => Err(err),
            Err(err) => {
                self.session = EditSession::Idle;
                Err(err)
            }
        }
    }

    /// Discard the working draft and clear the session; no ledger mutation
    pub fn cancel_edit(&mut self) {
        self.session = EditSession::Idle;
    }

    /// Allocate a fresh ID, stepping past any collision with live records
    fn allocate_id(&self) -> ExpenseId {
        let mut id = ExpenseId::now();
        while self.expenses.iter().any(|e| e.id == id) {
            id = id.next();
        }
        id
    }

    /// Write the full list through to storage
    fn persist(&self, store: &mut dyn KeyValueStore) -> BudgetResult<()> {
        let payload = serde_json::to_string(&self.expenses)?;
        store.set(EXPENSES_KEY, &payload)
    }
}

/// Domain-level validation shared by add and edit
fn validate(input: &ExpenseInput) -> BudgetResult<()> {
    if input.description.trim().is_empty() {
        return Err(BudgetError::Validation(
            "description must not be empty".into(),
        ));
    }
    if !input.amount.is_finite() {
        return Err(BudgetError::Validation("amount must be a finite number".into()));
    }
    if input.amount < 0.0 {
        return Err(BudgetError::Validation("amount must not be negative".into()));
    }
    Ok(())
}
