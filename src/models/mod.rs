pub mod expense;
pub mod filter;
pub mod summary;
