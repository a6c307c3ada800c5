use crate::db::repository;
use crate::error::{StoreError, ValidationError};
use crate::models::expense::NewExpense;
use crate::operations::predicate::check_amount;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(i64),
    Rejected(ValidationError),
}

/// Inserts one expense and returns its id. Neither the date format nor the
/// amount sign is checked, only that the amount is finite.
pub fn add_expense(conn: &mut Connection, expense: &NewExpense) -> Result<AddOutcome, StoreError> {
    if let Err(err) = check_amount(expense.amount) {
        tracing::debug!(category = %expense.category, "add rejected: {err}");
        return Ok(AddOutcome::Rejected(err));
    }

    let tx = conn.transaction()?;
    let id = repository::insert_expense(&tx, expense)?;
    tx.commit()?;

    tracing::info!(id, category = %expense.category, "expense added");
    Ok(AddOutcome::Added(id))
}
