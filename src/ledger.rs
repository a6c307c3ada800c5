use crate::db::category_repository::{CategoryListing, CategoryStore};
use crate::db::connection::ExpenseStore;
use crate::error::{ImportError, StoreError};
use crate::models::expense::{ExpenseRecord, NewExpense};
use crate::models::filter::{ExpenseChanges, ExpenseFilter};
use crate::models::summary::CategoryTotal;
use crate::operations::add::{AddOutcome, add_expense};
use crate::operations::delete::{DeleteOutcome, delete_expenses};
use crate::operations::update::{UpdateOutcome, update_expense};
use crate::operations::{import, list, summarize};
use std::path::Path;

/// Entry point for every ledger operation.
///
/// Each call opens its own connection to the expense database and closes it
/// before returning, whichever way the call ends.
#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: ExpenseStore,
    categories: CategoryStore,
}

impl Ledger {
    /// Creates the expense table and the category file when they are missing.
    pub fn bootstrap(
        expenses: ExpenseStore,
        categories: CategoryStore,
    ) -> Result<Self, StoreError> {
        expenses.initialize()?;
        categories.initialize()?;
        Ok(Self {
            expenses,
            categories,
        })
    }

    pub fn add(&self, expense: &NewExpense) -> Result<AddOutcome, StoreError> {
        let mut conn = self.expenses.open()?;
        add_expense(&mut conn, expense)
    }

    pub fn list(&self, start_date: &str, end_date: &str) -> Result<Vec<ExpenseRecord>, StoreError> {
        let conn = self.expenses.open()?;
        list::list_expenses(&conn, start_date, end_date)
    }

    pub fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<&str>,
    ) -> Result<Vec<CategoryTotal>, StoreError> {
        let conn = self.expenses.open()?;
        summarize::summarize_expenses(&conn, start_date, end_date, category)
    }

    pub fn update(&self, id: i64, changes: &ExpenseChanges) -> Result<UpdateOutcome, StoreError> {
        let mut conn = self.expenses.open()?;
        update_expense(&mut conn, id, changes)
    }

    pub fn delete(&self, filter: ExpenseFilter) -> Result<DeleteOutcome, StoreError> {
        let mut conn = self.expenses.open()?;
        delete_expenses(&mut conn, filter)
    }

    pub fn categories(&self) -> CategoryListing {
        self.categories.list()
    }

    pub fn import(&self, path: &Path) -> Result<Vec<i64>, ImportError> {
        let mut conn = self.expenses.open()?;
        import::import_expenses(&mut conn, path)
    }
}
