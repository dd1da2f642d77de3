use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use crate::budgets::db_types::BudgetRecord;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateBudgetInputArgs {
    pub label: String,
    pub amount: BigDecimal,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetsProcessorInput {
    List,
    Create(CreateBudgetInputArgs),
    Delete(i32),
    Transfer,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetsProcessorOutput {
    List(Vec<BudgetRecord>),
    Create(i32),
    Delete,
    /// Number of operations created
    Transfer(usize),
}
