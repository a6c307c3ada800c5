pub mod add;
pub mod delete;
pub mod import;
pub mod list;
pub mod predicate;
pub mod summarize;
pub mod update;
