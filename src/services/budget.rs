//! Budget setting service
//!
//! Owns the budget ceiling and its lock state. The raw amount text is
//! persisted under the `"budget"` key the moment it is submitted; a
//! persisted value rehydrates as a locked budget. The field is single-shot:
//! once locked, only a reset unlocks it.

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::storage::{KeyValueStore, BUDGET_KEY};

/// Owns the budget ceiling value and its lock state
#[derive(Debug, Default)]
pub struct BudgetSetting {
    state: BudgetState,
}

impl BudgetSetting {
    /// Hydrate the budget from storage
    ///
    /// An absent `"budget"` key means no budget has been set yet; a present
    /// key restores the amount locked.
    pub fn hydrate(store: &dyn KeyValueStore) -> BudgetResult<Self> {
        let state = match store.get(BUDGET_KEY)? {
            Some(raw) => BudgetState::from_stored(raw),
            None => BudgetState::default(),
        };
        Ok(Self { state })
    }

    /// Current budget state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Submit a budget amount
    ///
    /// The raw text is accepted as-is; numeric interpretation is deferred to
    /// the remainder computation. Rejected with `Locked` while a budget is
    /// already set. The in-memory state is updated before the persistence
    /// write, so it stays authoritative even if the write fails.
    pub fn set(
        &mut self,
        raw_amount: impl Into<String>,
        store: &mut dyn KeyValueStore,
    ) -> BudgetResult<()> {
        if self.state.is_locked() {
            return Err(BudgetError::Locked(
                "budget is already set; reset it before setting a new amount".into(),
            ));
        }

        self.state.lock_with(raw_amount.into());
        store.set(BUDGET_KEY, self.state.amount())
    }

    /// Reset the budget to its initial state and remove the persisted key
    ///
    /// Idempotent: resetting an already-reset budget is a no-op with the
    /// same observable end state.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> BudgetResult<()> {
        self.state.clear();
        store.remove(BUDGET_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_set_locks_and_persists() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        budget.set("100", &mut store).unwrap();

        assert_eq!(budget.state().amount(), "100");
        assert!(budget.state().is_locked());
        assert_eq!(store.get(BUDGET_KEY).unwrap(), Some("100".to_string()));
    }

    #[test]
    fn test_set_while_locked_is_rejected_without_state_change() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        budget.set("100", &mut store).unwrap();
        let err = budget.set("200", &mut store).unwrap_err();

        assert!(matches!(err, BudgetError::Locked(_)));
        assert_eq!(budget.state().amount(), "100");
        assert_eq!(store.get(BUDGET_KEY).unwrap(), Some("100".to_string()));
    }

    #[test]
    fn test_non_numeric_amount_is_accepted() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        // Content is not validated here; interpretation happens at the
        // remainder computation, where this becomes NaN.
        budget.set("a lot", &mut store).unwrap();
        assert!(budget.state().is_locked());
        assert!(budget.state().to_number().is_nan());
    }

    #[test]
    fn test_reset_clears_lock_and_removes_key() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        budget.set("100", &mut store).unwrap();
        budget.reset(&mut store).unwrap();

        assert_eq!(budget.state().amount(), "");
        assert!(!budget.state().is_locked());
        assert_eq!(store.get(BUDGET_KEY).unwrap(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        budget.reset(&mut store).unwrap();
        budget.reset(&mut store).unwrap();

        assert_eq!(budget.state(), &BudgetState::default());
        assert_eq!(store.get(BUDGET_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_after_reset_is_allowed() {
        let mut store = MemoryStore::new();
        let mut budget = BudgetSetting::default();

        budget.set("100", &mut store).unwrap();
        budget.reset(&mut store).unwrap();
        budget.set("200", &mut store).unwrap();

        assert_eq!(budget.state().amount(), "200");
    }

    #[test]
    fn test_hydrate_from_existing_key_is_locked() {
        let mut store = MemoryStore::new();
        store.set(BUDGET_KEY, "150").unwrap();

        let budget = BudgetSetting::hydrate(&store).unwrap();
        assert_eq!(budget.state().amount(), "150");
        assert!(budget.state().is_locked());
    }

    #[test]
    fn test_hydrate_from_empty_store_is_unset() {
        let store = MemoryStore::new();
        let budget = BudgetSetting::hydrate(&store).unwrap();
        assert_eq!(budget.state(), &BudgetState::default());
    }
}
