mod cli;
mod db;
mod error;
mod ledger;
mod models;
mod operations;
mod response;

use clap::Parser;
use cli::{Cli, Command};
use db::category_repository::CategoryStore;
use db::connection::ExpenseStore;
use ledger::Ledger;
use models::expense::NewExpense;
use models::filter::{ExpenseChanges, ExpenseFilter};
use response::Response;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let response = match Ledger::bootstrap(
        ExpenseStore::new(&cli.db),
        CategoryStore::new(&cli.categories),
    ) {
        Ok(ledger) => run_command(&ledger, cli.command),
        Err(err) => Response::from(err),
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("failed to encode response: {err}");
            return ExitCode::FAILURE;
        }
    }

    if response.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_command(ledger: &Ledger, command: Command) -> Response {
    match command {
        Command::Add {
            date,
            amount,
            category,
            subcategory,
            note,
        } => {
            let expense = NewExpense::new(date, amount, category)
                .with_subcategory(subcategory)
                .with_note(note);
            Response::added(ledger.add(&expense))
        }
        Command::List {
            start_date,
            end_date,
        } => {
            let (start_date, end_date) = cli::current_month_range(start_date, end_date);
            Response::records(ledger.list(&start_date, &end_date))
        }
        Command::Summarize {
            start_date,
            end_date,
            category,
        } => {
            let (start_date, end_date) = cli::current_month_range(start_date, end_date);
            Response::totals(ledger.summarize(&start_date, &end_date, Some(&category)))
        }
        Command::Update {
            id,
            date,
            amount,
            category,
            subcategory,
            note,
        } => {
            let changes = ExpenseChanges {
                date,
                amount,
                category,
                subcategory,
                note,
            };
            Response::updated(ledger.update(id, &changes))
        }
        Command::Delete {
            id,
            date,
            category,
            subcategory,
            amount,
            note,
            start_date,
            end_date,
        } => {
            let filter = ExpenseFilter {
                id,
                date,
                category,
                subcategory,
                amount,
                note,
                start_date,
                end_date,
            };
            Response::deleted(ledger.delete(filter))
        }
        Command::Categories => ledger.categories().into(),
        Command::Import { path } => Response::imported(ledger.import(&path)),
    }
}
