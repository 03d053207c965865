//! Service layer for pocketbudget
//!
//! The service layer provides the ledger state machine on top of the
//! storage contract: budget ceiling handling, expense CRUD with the edit
//! session, and the derived remainder.

pub mod budget;
pub mod ledger;
pub mod remainder;

pub use budget::BudgetSetting;
pub use ledger::{DraftField, EditSession, ExpenseLedger};
pub use remainder::{remaining, Remaining};
