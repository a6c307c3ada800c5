use crate::db::repository;
use crate::error::ImportError;
use crate::models::expense::NewExpense;
use rusqlite::Connection;
use std::fs::File;
use std::path::Path;

/// Imports `date,amount,category[,subcategory[,note]]` rows from a CSV file.
///
/// A first row whose amount column is not a number is treated as a header.
/// Either every row is stored or none is.
pub fn import_expenses(conn: &mut Connection, path: &Path) -> Result<Vec<i64>, ImportError> {
    let expenses = read_csv(path)?;

    let tx = conn.transaction()?;
    let mut ids = Vec::with_capacity(expenses.len());
    for expense in &expenses {
        ids.push(repository::insert_expense(&tx, expense)?);
    }
    tx.commit()?;

    tracing::info!(path = %path.display(), imported = ids.len(), "imported expenses");
    Ok(ids)
}

fn read_csv(path: &Path) -> Result<Vec<NewExpense>, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut expenses = Vec::new();

    for (line_index, result) in reader.records().enumerate() {
        let line = line_index + 1;
        let record = result.map_err(|source| ImportError::Csv { line, source })?;

        if record.len() < 3 || record.len() > 5 {
            return Err(ImportError::InvalidRow {
                line,
                reason: format!("expected 3 to 5 columns, got {}", record.len()),
            });
        }

        let amount_field = record.get(1).unwrap_or("");
        let amount = match amount_field.parse::<f64>() {
            Ok(amount) => amount,
            Err(_) if line == 1 => continue,
            Err(_) => {
                return Err(ImportError::InvalidRow {
                    line,
                    reason: format!("invalid amount '{amount_field}'"),
                });
            }
        };

        if !amount.is_finite() {
            return Err(ImportError::InvalidRow {
                line,
                reason: format!("invalid amount '{amount_field}'"),
            });
        }

        let date = record.get(0).unwrap_or("");
        let category = record.get(2).unwrap_or("");
        if date.is_empty() || category.is_empty() {
            return Err(ImportError::InvalidRow {
                line,
                reason: "date and category are required".to_string(),
            });
        }

        let expense = NewExpense::new(date.to_string(), amount, category.to_string())
            .with_subcategory(record.get(3).unwrap_or("").to_string())
            .with_note(record.get(4).unwrap_or("").to_string());
        expenses.push(expense);
    }

    Ok(expenses)
}
