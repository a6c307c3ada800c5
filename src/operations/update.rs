use crate::db::repository;
use crate::error::{StoreError, ValidationError};
use crate::models::expense::ExpenseRecord;
use crate::models::filter::ExpenseChanges;
use crate::operations::predicate::compile_changes;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(ExpenseRecord),
    NotFound { id: i64 },
    Rejected(ValidationError),
}

/// Writes the supplied fields of `changes` to expense `id` and reads the row
/// back within the same transaction.
pub fn update_expense(
    conn: &mut Connection,
    id: i64,
    changes: &ExpenseChanges,
) -> Result<UpdateOutcome, StoreError> {
    let tx = conn.transaction()?;

    let clause = match compile_changes(changes) {
        Ok(clause) => clause,
        Err(err) => {
            tracing::debug!(id, "update rejected: {err}");
            return Ok(UpdateOutcome::Rejected(err));
        }
    };

    let affected = repository::apply_update(&tx, id, &clause)?;
    let updated = repository::get_expense_by_id(&tx, id)?;
    tx.commit()?;

    match updated {
        Some(record) => {
            tracing::info!(id, affected, "expense updated");
            Ok(UpdateOutcome::Updated(record))
        }
        None => Ok(UpdateOutcome::NotFound { id }),
    }
}
