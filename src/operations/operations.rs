use crate::operations::db_types::{CreateOperation, OperationRecord};
use crate::operations::processor_enums::{CreateOperationInputArgs, UpdateOperationStatusInputArgs};
use crate::operations::summary::{MonthSummary, summarize};
use crate::store::Store;
use crate::utils::ordering::credits_then_debits;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Operations of `current_month`, credits first, largest amounts first.
pub async fn list_current_month(
    store: &dyn Store,
    current_month: NaiveDate,
) -> Result<Vec<OperationRecord>> {
    let res = store.operations_for_month(current_month)?;
    Ok(credits_then_debits(res))
}

pub async fn create_operation(
    store: &dyn Store,
    current_month: NaiveDate,
    input: CreateOperationInputArgs,
) -> Result<i32> {
    if input.label.trim().is_empty() {
        return Err(anyhow!("operation label cannot be empty"));
    }

    let data = CreateOperation {
        label: input.label,
        amount: input.amount,
        status: input.status.unwrap_or_default(),
        month: current_month,
        from_budget: false,
    };

    let operation_id = store.insert_operation(&data)?;
    tracing::debug!(operation_id, month = %current_month, "operation created");

    Ok(operation_id)
}

pub async fn update_operation_status(
    store: &dyn Store,
    input: UpdateOperationStatusInputArgs,
) -> Result<()> {
    let updated = store.update_operation_status(input.operation_id, input.status)?;
    if updated == 0 {
        tracing::warn!(operation_id = input.operation_id, "status update matched no operation");
    }

    Ok(())
}

pub async fn delete_operation(store: &dyn Store, operation_id: i32) -> Result<()> {
    let deleted = store.delete_operation(operation_id)?;
    if deleted == 0 {
        tracing::warn!(operation_id, "delete matched no operation");
    }

    Ok(())
}

pub async fn get_summary(
    store: &dyn Store,
    current_month: NaiveDate,
    today: NaiveDate,
) -> Result<MonthSummary> {
    let res = store.operations_for_month(current_month)?;
    Ok(summarize(&res, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::db_types::OperationStatus;
    use crate::store::memory::MemoryStore;
    use bigdecimal::BigDecimal;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn args(label: &str, amount: i64) -> CreateOperationInputArgs {
        CreateOperationInputArgs {
            label: label.to_string(),
            amount: BigDecimal::from(amount),
            status: None,
        }
    }

    #[tokio::test]
    async fn create_stamps_month_and_defaults_to_pending() {
        let store = MemoryStore::new();
        let id = create_operation(&store, month(2024, 5), args("Groceries", -80))
            .await
            .unwrap();

        let listed = list_current_month(&store, month(2024, 5)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].month, month(2024, 5));
        assert_eq!(listed[0].status, OperationStatus::Pending);
        assert!(!listed[0].from_budget);
    }

    #[tokio::test]
    async fn create_keeps_explicit_status() {
        let store = MemoryStore::new();
        let mut input = args("Salary", 3000);
        input.status = Some(OperationStatus::Checked);
        create_operation(&store, month(2024, 5), input).await.unwrap();

        let listed = list_current_month(&store, month(2024, 5)).await.unwrap();
        assert_eq!(listed[0].status, OperationStatus::Checked);
    }

    #[tokio::test]
    async fn blank_label_is_rejected_without_persisting() {
        let store = MemoryStore::new();
        assert!(create_operation(&store, month(2024, 5), args("  ", 10)).await.is_err());
        assert!(list_current_month(&store, month(2024, 5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_ignores_other_months_and_orders_by_sign_then_magnitude() {
        let store = MemoryStore::new();
        create_operation(&store, month(2024, 4), args("April", 999)).await.unwrap();
        create_operation(&store, month(2024, 5), args("Coffee", -3)).await.unwrap();
        create_operation(&store, month(2024, 5), args("Refund", 20)).await.unwrap();
        create_operation(&store, month(2024, 5), args("Rent", -1000)).await.unwrap();
        create_operation(&store, month(2024, 5), args("Salary", 3000)).await.unwrap();
        create_operation(&store, month(2023, 5), args("Last year", 5)).await.unwrap();

        let labels: Vec<String> = list_current_month(&store, month(2024, 5))
            .await
            .unwrap()
            .into_iter()
            .map(|op| op.label)
            .collect();
        assert_eq!(labels, vec!["Salary", "Refund", "Rent", "Coffee"]);
    }

    #[tokio::test]
    async fn operations_keep_their_bucket_after_the_month_ends() {
        let store = MemoryStore::new();
        create_operation(&store, month(2024, 5), args("May", 1)).await.unwrap();

        assert!(list_current_month(&store, month(2024, 6)).await.unwrap().is_empty());
        let may = list_current_month(&store, month(2024, 5)).await.unwrap();
        assert_eq!(may[0].month, month(2024, 5));
    }

    #[tokio::test]
    async fn status_update_and_delete() {
        let store = MemoryStore::new();
        let id = create_operation(&store, month(2024, 5), args("Gym", -30)).await.unwrap();

        update_operation_status(
            &store,
            UpdateOperationStatusInputArgs {
                operation_id: id,
                status: OperationStatus::Checked,
            },
        )
        .await
        .unwrap();
        let listed = list_current_month(&store, month(2024, 5)).await.unwrap();
        assert_eq!(listed[0].status, OperationStatus::Checked);

        delete_operation(&store, id).await.unwrap();
        assert!(list_current_month(&store, month(2024, 5)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_ids_are_no_ops() {
        let store = MemoryStore::new();
        update_operation_status(
            &store,
            UpdateOperationStatusInputArgs {
                operation_id: 7,
                status: OperationStatus::Checked,
            },
        )
        .await
        .unwrap();
        delete_operation(&store, 7).await.unwrap();
    }

    #[tokio::test]
    async fn summary_only_counts_the_current_month() {
        let store = MemoryStore::new();
        let mut checked = args("Salary", 100);
        checked.status = Some(OperationStatus::Checked);
        create_operation(&store, month(2024, 5), checked).await.unwrap();
        create_operation(&store, month(2024, 5), args("Phone", -50)).await.unwrap();
        create_operation(&store, month(2024, 4), args("Old", 10_000)).await.unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let summary = get_summary(&store, month(2024, 5), today).await.unwrap();
        assert_eq!(summary.credit.current, BigDecimal::from(100));
        assert_eq!(summary.credit.forecast, BigDecimal::from(100));
        assert_eq!(summary.debit.current, BigDecimal::from(0));
        assert_eq!(summary.debit.forecast, BigDecimal::from(-50));
        assert_eq!(summary.balance.current, BigDecimal::from(100));
        assert_eq!(summary.balance.forecast, BigDecimal::from(50));
        assert_eq!(summary.completion, 100);
    }
}
