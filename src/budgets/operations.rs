use crate::budgets::db_types::{BudgetRecord, CreateBudget};
use crate::budgets::processor_enums::CreateBudgetInputArgs;
use crate::operations::db_types::{CreateOperation, OperationStatus};
use crate::store::Store;
use crate::utils::ordering::credits_then_debits;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

pub async fn list_budgets(store: &dyn Store) -> Result<Vec<BudgetRecord>> {
    let res = store.budgets()?;
    Ok(credits_then_debits(res))
}

pub async fn create_budget(store: &dyn Store, input: CreateBudgetInputArgs) -> Result<i32> {
    if input.label.trim().is_empty() {
        return Err(anyhow!("budget label cannot be empty"));
    }

    let data = CreateBudget {
        label: input.label,
        amount: input.amount,
    };

    let budget_id = store.insert_budget(&data)?;
    tracing::debug!(budget_id, "budget created");

    Ok(budget_id)
}

pub async fn delete_budget(store: &dyn Store, budget_id: i32) -> Result<()> {
    let deleted = store.delete_budget(budget_id)?;
    if deleted == 0 {
        tracing::warn!(budget_id, "delete matched no budget");
    }

    Ok(())
}

/// Pending operation materialised from a budget template.
pub fn budget_operation(budget: &BudgetRecord, current_month: NaiveDate) -> CreateOperation {
    CreateOperation {
        label: budget.label.clone(),
        amount: budget.amount.clone(),
        status: OperationStatus::Pending,
        month: current_month,
        from_budget: true,
    }
}

/// Copies every budget into `current_month` as one batch. Budgets are only
/// read; either all operations are written or the error is returned.
pub async fn transfer_budgets(store: &dyn Store, current_month: NaiveDate) -> Result<usize> {
    let budgets = store.budgets()?;

    let batch: Vec<CreateOperation> = budgets
        .iter()
        .map(|budget| budget_operation(budget, current_month))
        .collect();

    let inserted = store.insert_operations(&batch)?;
    tracing::info!(inserted, month = %current_month, "budgets transferred");

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::db_types::OperationRecord;
    use crate::operations::operations::list_current_month;
    use crate::store::memory::MemoryStore;
    use bigdecimal::BigDecimal;

    fn may() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn budget(label: &str, amount: i64) -> CreateBudgetInputArgs {
        CreateBudgetInputArgs {
            label: label.to_string(),
            amount: BigDecimal::from(amount),
        }
    }

    /// Memory store whose batch insert always fails.
    struct BrokenBatchStore(MemoryStore);

    impl Store for BrokenBatchStore {
        fn operations_for_month(&self, bucket: NaiveDate) -> Result<Vec<OperationRecord>> {
            self.0.operations_for_month(bucket)
        }
        fn insert_operation(&self, input: &CreateOperation) -> Result<i32> {
            self.0.insert_operation(input)
        }
        fn insert_operations(&self, _input: &[CreateOperation]) -> Result<usize> {
            Err(anyhow!("transaction rolled back"))
        }
        fn update_operation_status(&self, operation_id: i32, new_status: OperationStatus) -> Result<usize> {
            self.0.update_operation_status(operation_id, new_status)
        }
        fn delete_operation(&self, operation_id: i32) -> Result<usize> {
            self.0.delete_operation(operation_id)
        }
        fn budgets(&self) -> Result<Vec<BudgetRecord>> {
            self.0.budgets()
        }
        fn insert_budget(&self, input: &CreateBudget) -> Result<i32> {
            self.0.insert_budget(input)
        }
        fn delete_budget(&self, budget_id: i32) -> Result<usize> {
            self.0.delete_budget(budget_id)
        }
    }

    #[tokio::test]
    async fn list_orders_credits_before_debits() {
        let store = MemoryStore::new();
        create_budget(&store, budget("Rent", -1000)).await.unwrap();
        create_budget(&store, budget("Food", -400)).await.unwrap();
        create_budget(&store, budget("Salary", 3000)).await.unwrap();
        create_budget(&store, budget("Gym", -400)).await.unwrap();

        let labels: Vec<String> = list_budgets(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Salary", "Rent", "Food", "Gym"]);
    }

    #[tokio::test]
    async fn blank_label_is_rejected() {
        let store = MemoryStore::new();
        assert!(create_budget(&store, budget("", 10)).await.is_err());
        assert!(list_budgets(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let rent = create_budget(&store, budget("Rent", -1000)).await.unwrap();
        create_budget(&store, budget("Salary", 3000)).await.unwrap();

        delete_budget(&store, rent).await.unwrap();
        delete_budget(&store, rent).await.unwrap();

        let left = list_budgets(&store).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].label, "Salary");
    }

    #[tokio::test]
    async fn transfer_creates_one_pending_operation_per_budget() {
        let store = MemoryStore::new();
        create_budget(&store, budget("Rent", -1000)).await.unwrap();
        create_budget(&store, budget("Salary", 3000)).await.unwrap();
        let before = list_budgets(&store).await.unwrap();

        let inserted = transfer_budgets(&store, may()).await.unwrap();
        assert_eq!(inserted, 2);

        let ops = list_current_month(&store, may()).await.unwrap();
        let labels: Vec<&str> = ops.iter().map(|op| op.label.as_str()).collect();
        assert_eq!(labels, vec!["Salary", "Rent"]);
        for op in &ops {
            assert_eq!(op.status, OperationStatus::Pending);
            assert!(op.from_budget);
            assert_eq!(op.month, may());
        }
        assert_eq!(ops[0].amount, BigDecimal::from(3000));
        assert_eq!(ops[1].amount, BigDecimal::from(-1000));

        assert_eq!(list_budgets(&store).await.unwrap(), before);
    }

    #[tokio::test]
    async fn transfer_without_budgets_creates_nothing() {
        let store = MemoryStore::new();
        assert_eq!(transfer_budgets(&store, may()).await.unwrap(), 0);
        assert!(list_current_month(&store, may()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_transfer_is_reported_and_leaves_no_operations() {
        let store = BrokenBatchStore(MemoryStore::new());
        create_budget(&store, budget("Rent", -1000)).await.unwrap();

        assert!(transfer_budgets(&store, may()).await.is_err());
        assert!(list_current_month(&store, may()).await.unwrap().is_empty());
        assert_eq!(list_budgets(&store).await.unwrap().len(), 1);
    }
}
