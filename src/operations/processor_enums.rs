use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use crate::operations::db_types::{OperationRecord, OperationStatus};
use crate::operations::summary::MonthSummary;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateOperationInputArgs {
    pub label: String,
    pub amount: BigDecimal,
    pub status: Option<OperationStatus>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateOperationStatusInputArgs {
    pub operation_id: i32,
    pub status: OperationStatus,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum OperationsProcessorInput {
    ListCurrentMonth,
    Create(CreateOperationInputArgs),
    UpdateStatus(UpdateOperationStatusInputArgs),
    Delete(i32),
    Summary,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum OperationsProcessorOutput {
    ListCurrentMonth(Vec<OperationRecord>),
    Create(i32),
    UpdateStatus,
    Delete,
    Summary(MonthSummary),
}
