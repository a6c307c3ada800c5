use crate::db::repository;
use crate::error::StoreError;
use crate::models::expense::ExpenseRecord;
use rusqlite::Connection;

pub fn list_expenses(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<ExpenseRecord>, StoreError> {
    let expenses = repository::get_expenses_in_range(conn, start_date, end_date)?;
    tracing::debug!(start_date, end_date, count = expenses.len(), "listed expenses");
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::db::repository::insert_expense;
    use crate::models::expense::NewExpense;

    #[test]
    fn test_list_expenses_empty() {
        let conn = establish_test_connection().unwrap();
        let expenses = list_expenses(&conn, "2024-01-01", "2024-12-31").unwrap();
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_list_expenses_bounds_are_inclusive() {
        let conn = establish_test_connection().unwrap();
        for date in ["2023-12-31", "2024-01-01", "2024-01-15", "2024-01-31", "2024-02-01"] {
            insert_expense(&conn, &NewExpense::new(date.to_string(), 1.0, "food".to_string()))
                .unwrap();
        }

        let expenses = list_expenses(&conn, "2024-01-01", "2024-01-31").unwrap();
        assert_eq!(expenses.len(), 3);
        assert!(expenses
            .iter()
            .all(|e| e.date.as_str() >= "2024-01-01" && e.date.as_str() <= "2024-01-31"));
    }

    #[test]
    fn test_list_expenses_inverted_range() {
        let conn = establish_test_connection().unwrap();
        insert_expense(&conn, &NewExpense::new("2024-01-15".to_string(), 1.0, "food".to_string()))
            .unwrap();

        let expenses = list_expenses(&conn, "2024-01-31", "2024-01-01").unwrap();
        assert!(expenses.is_empty());
    }
}
