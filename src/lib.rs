// Public library interface for savy-back-end
pub mod action_router;
pub mod api;
pub mod budgets;
pub mod cli_helper;
pub mod cli_utils;
pub mod operations;
pub mod schema;
pub mod store;
pub mod utils;
