use crate::schema::operations as OperationsTable;
use crate::utils::ordering::SignedEntry;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::OperationStatus"]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Pending,
    Checked,
}

impl Default for OperationStatus {
    fn default() -> Self {
        OperationStatus::Pending
    }
}

impl FromStr for OperationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OperationStatus::Pending),
            "checked" => Ok(OperationStatus::Checked),
            other => Err(anyhow::anyhow!("unknown operation status {:?}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = OperationsTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OperationRecord {
    pub id: i32,
    pub label: String,
    pub amount: BigDecimal,
    pub status: OperationStatus,
    pub month: NaiveDate,
    pub from_budget: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = OperationsTable)]
pub struct CreateOperation {
    pub label: String,
    pub amount: BigDecimal,
    pub status: OperationStatus,
    pub month: NaiveDate,
    pub from_budget: bool,
}

impl SignedEntry for OperationRecord {
    fn entry_id(&self) -> i32 {
        self.id
    }

    fn entry_amount(&self) -> &BigDecimal {
        &self.amount
    }
}
