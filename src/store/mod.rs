//! Persistence seam for operations and budgets.
//!
//! Production runs on [`postgres::PgStore`]; [`memory::MemoryStore`] keeps the
//! same contract in process for tests and local runs.

pub mod memory;
pub mod postgres;

use crate::budgets::db_types::{BudgetRecord, CreateBudget};
use crate::operations::db_types::{CreateOperation, OperationRecord, OperationStatus};
use anyhow::Result;
use chrono::NaiveDate;

pub trait Store: Send + Sync {
    /// Operations stamped with exactly `bucket`, in ascending id order.
    fn operations_for_month(&self, bucket: NaiveDate) -> Result<Vec<OperationRecord>>;

    fn insert_operation(&self, input: &CreateOperation) -> Result<i32>;

    /// Inserts every operation or none of them.
    fn insert_operations(&self, input: &[CreateOperation]) -> Result<usize>;

    /// Returns the number of rows touched; zero when the id is unknown.
    fn update_operation_status(&self, operation_id: i32, new_status: OperationStatus) -> Result<usize>;

    fn delete_operation(&self, operation_id: i32) -> Result<usize>;

    /// All budgets in ascending id order.
    fn budgets(&self) -> Result<Vec<BudgetRecord>>;

    fn insert_budget(&self, input: &CreateBudget) -> Result<i32>;

    fn delete_budget(&self, budget_id: i32) -> Result<usize>;
}
