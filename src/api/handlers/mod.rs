pub mod budgets;
pub mod health;
pub mod operations;
pub mod summary;
