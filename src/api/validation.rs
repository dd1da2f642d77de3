use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use std::str::FromStr;

use crate::api::error::{codes, ApiError};
use crate::budgets::processor_enums::CreateBudgetInputArgs;
use crate::operations::db_types::OperationStatus;
use crate::operations::processor_enums::{CreateOperationInputArgs, UpdateOperationStatusInputArgs};

/// Reads an amount given either as a JSON number or a numeric string,
/// parsing the literal text so no binary float rounding creeps in.
/// `null` and `""` read as absent.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => BigDecimal::from_str(&n.to_string())
            .map(Some)
            .map_err(D::Error::custom),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => BigDecimal::from_str(s.trim())
            .map(Some)
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("invalid amount {}", other))),
    }
}

pub fn validate_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(codes::INVALID_ID))
}

pub fn validate_not_empty(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::unprocessable(codes::MISSING_PARAMETERS)),
    }
}

pub fn validate_present<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::unprocessable(codes::MISSING_PARAMETERS))
}

pub fn validate_status(raw: &str) -> Result<OperationStatus, ApiError> {
    raw.parse::<OperationStatus>()
        .map_err(|_| ApiError::unprocessable(codes::INVALID_STATUS))
}

pub fn validate_create_operation(
    label: Option<String>,
    amount: Option<BigDecimal>,
    status: Option<String>,
) -> Result<CreateOperationInputArgs, ApiError> {
    let label = validate_not_empty(label)?;
    let amount = validate_present(amount)?;
    let status = match status.filter(|s| !s.is_empty()) {
        Some(raw) => Some(validate_status(&raw)?),
        None => None,
    };

    Ok(CreateOperationInputArgs { label, amount, status })
}

pub fn validate_create_budget(
    label: Option<String>,
    amount: Option<BigDecimal>,
) -> Result<CreateBudgetInputArgs, ApiError> {
    let label = validate_not_empty(label)?;
    let amount = validate_present(amount)?;

    Ok(CreateBudgetInputArgs { label, amount })
}

pub fn validate_status_update(
    raw_id: &str,
    status: Option<String>,
) -> Result<UpdateOperationStatusInputArgs, ApiError> {
    let operation_id = validate_id(raw_id)?;
    let status = validate_not_empty(status)?;
    let status = validate_status(&status)?;

    Ok(UpdateOperationStatusInputArgs { operation_id, status })
}
