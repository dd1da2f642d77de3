use crate::budgets::db_types::{BudgetRecord, CreateBudget};
use crate::operations::db_types::{CreateOperation, OperationRecord, OperationStatus};
use crate::schema::budgets as BudgetsTable;
use crate::schema::operations as OperationsTable;
use crate::store::Store;
use crate::utils::db::get_conn;
use anyhow::Result;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;

#[derive(Debug, Clone)]
pub struct PgStore {
    pub pool: Pool<ConnectionManager<PgConnection>>,
}

impl PgStore {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::new(manager)?;

        Ok(Self::new(pool))
    }
}

impl Store for PgStore {
    fn operations_for_month(&self, bucket: NaiveDate) -> Result<Vec<OperationRecord>> {
        use crate::schema::operations::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let res = operations
            .filter(month.eq(bucket))
            .order(id.asc())
            .get_results::<OperationRecord>(&mut conn)?;

        Ok(res)
    }

    fn insert_operation(&self, input: &CreateOperation) -> Result<i32> {
        use crate::schema::operations::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let operation_id = diesel::insert_into(OperationsTable::table)
            .values(input)
            .returning(id)
            .get_result::<i32>(&mut conn)?;

        Ok(operation_id)
    }

    fn insert_operations(&self, input: &[CreateOperation]) -> Result<usize> {
        if input.is_empty() {
            return Ok(0);
        }

        let mut conn = get_conn(self.pool.clone())?;

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(|tx| {
            diesel::insert_into(OperationsTable::table)
                .values(input)
                .execute(tx)
        })?;

        Ok(inserted)
    }

    fn update_operation_status(&self, operation_id: i32, new_status: OperationStatus) -> Result<usize> {
        use crate::schema::operations::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let updated = diesel::update(OperationsTable::table)
            .filter(id.eq(operation_id))
            .set(status.eq(new_status))
            .execute(&mut conn)?;

        Ok(updated)
    }

    fn delete_operation(&self, operation_id: i32) -> Result<usize> {
        use crate::schema::operations::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let deleted = diesel::delete(operations.filter(id.eq(operation_id))).execute(&mut conn)?;

        Ok(deleted)
    }

    fn budgets(&self) -> Result<Vec<BudgetRecord>> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let res = budgets.order(id.asc()).get_results::<BudgetRecord>(&mut conn)?;

        Ok(res)
    }

    fn insert_budget(&self, input: &CreateBudget) -> Result<i32> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let budget_id = diesel::insert_into(BudgetsTable::table)
            .values(input)
            .returning(id)
            .get_result::<i32>(&mut conn)?;

        Ok(budget_id)
    }

    fn delete_budget(&self, budget_id: i32) -> Result<usize> {
        use crate::schema::budgets::dsl::*;
        let mut conn = get_conn(self.pool.clone())?;

        let deleted = diesel::delete(budgets.filter(id.eq(budget_id))).execute(&mut conn)?;

        Ok(deleted)
    }
}
