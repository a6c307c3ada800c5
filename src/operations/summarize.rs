use crate::db::repository;
use crate::error::StoreError;
use crate::models::summary::CategoryTotal;
use rusqlite::Connection;

/// Totals per category over `[start_date, end_date]`, ordered by ascending
/// total. `None` and `Some("")` both mean every category.
pub fn summarize_expenses(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
    category: Option<&str>,
) -> Result<Vec<CategoryTotal>, StoreError> {
    let category = category.unwrap_or_default();
    let totals = repository::get_category_totals(conn, start_date, end_date, category)?;
    tracing::debug!(start_date, end_date, category, groups = totals.len(), "summarized expenses");
    Ok(totals)
}
