use serde::{Deserialize, Serialize};

use crate::budgets::db_types::BudgetRecord;
use crate::operations::db_types::OperationRecord;
use crate::operations::summary::MonthSummary;

#[derive(Serialize, Deserialize, Debug)]
pub struct OperationsResponse {
    pub operations: Vec<OperationRecord>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BudgetsResponse {
    pub budgets: Vec<BudgetRecord>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SummaryResponse {
    pub summary: MonthSummary,
}
