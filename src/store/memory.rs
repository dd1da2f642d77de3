use crate::budgets::db_types::{BudgetRecord, CreateBudget};
use crate::operations::db_types::{CreateOperation, OperationRecord, OperationStatus};
use crate::store::Store;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tables {
    operations: Vec<OperationRecord>,
    budgets: Vec<BudgetRecord>,
    operation_seq: i32,
    budget_seq: i32,
}

impl Tables {
    fn push_operation(&mut self, input: &CreateOperation) -> i32 {
        self.operation_seq += 1;
        self.operations.push(OperationRecord {
            id: self.operation_seq,
            label: input.label.clone(),
            amount: input.amount.clone(),
            status: input.status,
            month: input.month,
            from_budget: input.from_budget,
        });
        self.operation_seq
    }
}

/// Process-local store with serial ids, one lock per call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl Store for MemoryStore {
    fn operations_for_month(&self, bucket: NaiveDate) -> Result<Vec<OperationRecord>> {
        let tables = self.lock()?;
        Ok(tables
            .operations
            .iter()
            .filter(|op| op.month == bucket)
            .cloned()
            .collect())
    }

    fn insert_operation(&self, input: &CreateOperation) -> Result<i32> {
        let mut tables = self.lock()?;
        Ok(tables.push_operation(input))
    }

    fn insert_operations(&self, input: &[CreateOperation]) -> Result<usize> {
        let mut tables = self.lock()?;
        for op in input {
            tables.push_operation(op);
        }
        Ok(input.len())
    }

    fn update_operation_status(&self, operation_id: i32, new_status: OperationStatus) -> Result<usize> {
        let mut tables = self.lock()?;
        let mut touched = 0;
        for op in tables.operations.iter_mut().filter(|op| op.id == operation_id) {
            op.status = new_status;
            touched += 1;
        }
        Ok(touched)
    }

    fn delete_operation(&self, operation_id: i32) -> Result<usize> {
        let mut tables = self.lock()?;
        let before = tables.operations.len();
        tables.operations.retain(|op| op.id != operation_id);
        Ok(before - tables.operations.len())
    }

    fn budgets(&self) -> Result<Vec<BudgetRecord>> {
        Ok(self.lock()?.budgets.clone())
    }

    fn insert_budget(&self, input: &CreateBudget) -> Result<i32> {
        let mut tables = self.lock()?;
        tables.budget_seq += 1;
        let budget_id = tables.budget_seq;
        tables.budgets.push(BudgetRecord {
            id: budget_id,
            label: input.label.clone(),
            amount: input.amount.clone(),
        });
        Ok(budget_id)
    }

    fn delete_budget(&self, budget_id: i32) -> Result<usize> {
        let mut tables = self.lock()?;
        let before = tables.budgets.len();
        tables.budgets.retain(|budget| budget.id != budget_id);
        Ok(before - tables.budgets.len())
    }
}
