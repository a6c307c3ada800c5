use crate::db::repository;
use crate::error::{StoreError, ValidationError};
use crate::models::filter::ExpenseFilter;
use crate::operations::predicate::compile_filter;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// `criteria` echoes every field the caller supplied.
    Deleted {
        deleted_count: usize,
        criteria: ExpenseFilter,
    },
    Rejected(ValidationError),
}

pub fn delete_expenses(
    conn: &mut Connection,
    filter: ExpenseFilter,
) -> Result<DeleteOutcome, StoreError> {
    let tx = conn.transaction()?;

    let predicate = match compile_filter(&filter) {
        Ok(predicate) => predicate,
        Err(err) => {
            tracing::debug!("delete rejected: {err}");
            return Ok(DeleteOutcome::Rejected(err));
        }
    };

    let deleted_count = repository::apply_delete(&tx, &predicate)?;
    tx.commit()?;

    tracing::info!(deleted_count, "expenses deleted");
    Ok(DeleteOutcome::Deleted {
        deleted_count,
        criteria: filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::db::repository::{get_expenses_in_range, insert_expense};
    use crate::models::expense::NewExpense;

    fn seed(conn: &Connection) {
        let rows = [
            ("2024-01-05", 12.5, "food"),
            ("2024-01-10", 7.5, "food"),
            ("2024-01-15", 40.0, "utilities"),
            ("2024-02-01", 3.0, "food"),
        ];
        for (date, amount, category) in rows {
            insert_expense(conn, &NewExpense::new(date.to_string(), amount, category.to_string()))
                .unwrap();
        }
    }

    fn count_all(conn: &Connection) -> usize {
        get_expenses_in_range(conn, "0000-00-00", "9999-99-99").unwrap().len()
    }

    #[test]
    fn test_delete_without_criteria_is_rejected() {
        let mut conn = establish_test_connection().unwrap();
        seed(&conn);

        let outcome = delete_expenses(&mut conn, ExpenseFilter::default()).unwrap();

        assert_eq!(outcome, DeleteOutcome::Rejected(ValidationError::NoFilterCriteria));
        assert_eq!(count_all(&conn), 4);
    }

    #[test]
    fn test_delete_with_half_range_is_rejected() {
        let mut conn = establish_test_connection().unwrap();
        seed(&conn);

        let filter = ExpenseFilter {
            start_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let outcome = delete_expenses(&mut conn, filter).unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Rejected(ValidationError::MissingRangeBound { missing: "end_date" })
        );
        assert_eq!(count_all(&conn), 4);
    }

    #[test]
    fn test_delete_by_category_and_range() {
        let mut conn = establish_test_connection().unwrap();
        seed(&conn);

        let filter = ExpenseFilter {
            category: Some("food".to_string()),
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            ..Default::default()
        };
        let outcome = delete_expenses(&mut conn, filter.clone()).unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                deleted_count: 2,
                criteria: filter,
            }
        );
        let remaining = get_expenses_in_range(&conn, "0000-00-00", "9999-99-99").unwrap();
        let dates: Vec<&str> = remaining.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-02-01"]);
    }

    #[test]
    fn test_delete_matching_nothing() {
        let mut conn = establish_test_connection().unwrap();
        seed(&conn);

        let filter = ExpenseFilter {
            category: Some("healthcare".to_string()),
            ..Default::default()
        };
        let outcome = delete_expenses(&mut conn, filter).unwrap();

        assert!(matches!(outcome, DeleteOutcome::Deleted { deleted_count: 0, .. }));
        assert_eq!(count_all(&conn), 4);
    }
}
