use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Debug)]
#[command(name = "expenses", version, about = "Keep a ledger of expenses")]
pub struct Cli {
    /// SQLite database holding the expenses
    #[arg(long, env = "EXPENSES_DB", default_value = "expenses.db", global = true)]
    pub db: PathBuf,

    /// JSON document listing the known categories
    #[arg(
        long,
        env = "EXPENSES_CATEGORIES",
        default_value = "categories.json",
        global = true
    )]
    pub categories: PathBuf,

    /// Log filter, e.g. `info` or `expenses=debug`
    #[arg(long, env = "EXPENSES_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new expense
    Add {
        date: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        category: String,
        #[arg(long, default_value = "")]
        subcategory: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List expenses in a date range (defaults to the current month)
    List {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Total expenses per category in a date range (defaults to the current month)
    Summarize {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Change some fields of one expense
    Update {
        id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete every expense matching all given criteria
    Delete {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Show the known categories
    Categories,
    /// Import expenses from a CSV file
    Import { path: PathBuf },
}

/// Fills whichever bound is missing with the first or last day of the month
/// containing `today`.
pub fn resolve_range(
    start_date: Option<String>,
    end_date: Option<String>,
    today: NaiveDate,
) -> (String, String) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);

    (
        start_date.unwrap_or_else(|| first.format(DATE_FORMAT).to_string()),
        end_date.unwrap_or_else(|| last.format(DATE_FORMAT).to_string()),
    )
}

pub fn current_month_range(
    start_date: Option<String>,
    end_date: Option<String>,
) -> (String, String) {
    resolve_range(start_date, end_date, Local::now().date_naive())
}
