use crate::models::expense::{ExpenseRecord, NewExpense};
use crate::models::summary::CategoryTotal;
use crate::operations::predicate::{Predicate, SetClause};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const SELECT_COLUMNS: &str = "SELECT id, date, amount, category, subcategory, note FROM expenses";

fn map_expense(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    Ok(ExpenseRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        subcategory: row.get(4)?,
        note: row.get(5)?,
    })
}

pub fn insert_expense(conn: &Connection, expense: &NewExpense) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO expenses (date, amount, category, subcategory, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            &expense.date,
            expense.amount,
            &expense.category,
            &expense.subcategory,
            &expense.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Dates are compared as strings, so bounds must be `YYYY-MM-DD` for the
/// range to be chronological.
pub fn get_expenses_in_range(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
) -> rusqlite::Result<Vec<ExpenseRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS} WHERE date BETWEEN ?1 AND ?2 ORDER BY id ASC"
    ))?;

    let expenses = stmt
        .query_map(params![start_date, end_date], map_expense)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(expenses)
}

pub fn get_expense_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<ExpenseRecord>> {
    conn.query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], map_expense)
        .optional()
}

pub fn apply_update(conn: &Connection, id: i64, clause: &SetClause) -> rusqlite::Result<usize> {
    let sql = format!("UPDATE expenses SET {} WHERE id = ?", clause.to_sql());
    tracing::debug!(%sql, "applying update");

    let params = clause
        .params()
        .iter()
        .cloned()
        .chain(std::iter::once(Value::Integer(id)));
    conn.execute(&sql, params_from_iter(params))
}

pub fn apply_delete(conn: &Connection, predicate: &Predicate) -> rusqlite::Result<usize> {
    let sql = format!("DELETE FROM expenses WHERE {}", predicate.to_sql());
    tracing::debug!(%sql, "applying delete");

    conn.execute(&sql, params_from_iter(predicate.params()))
}

/// Sums amounts per category over an inclusive date range, smallest total
/// first. An empty `category` applies no category filter. A sum SQLite
/// reports as NULL (rows holding both infinities) comes back as NaN.
pub fn get_category_totals(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
    category: &str,
) -> rusqlite::Result<Vec<CategoryTotal>> {
    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) AS total_amount FROM expenses
         WHERE date BETWEEN ?1 AND ?2 AND (?3 = '' OR category = ?3)
         GROUP BY category
         ORDER BY total_amount ASC, category ASC",
    )?;

    let totals = stmt
        .query_map(params![start_date, end_date, category], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total_amount: row.get::<_, Option<f64>>(1)?.unwrap_or(f64::NAN),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(totals)
}
