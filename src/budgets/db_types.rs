use crate::schema::budgets as BudgetsTable;
use crate::utils::ordering::SignedEntry;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = BudgetsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BudgetRecord {
    pub id: i32,
    pub label: String,
    pub amount: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = BudgetsTable)]
pub struct CreateBudget {
    pub label: String,
    pub amount: BigDecimal,
}

impl SignedEntry for BudgetRecord {
    fn entry_id(&self) -> i32 {
        self.id
    }

    fn entry_amount(&self) -> &BigDecimal {
        &self.amount
    }
}
