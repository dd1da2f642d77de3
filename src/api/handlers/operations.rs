use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::{codes, ApiError},
        extractors::JsonBody,
        response::OperationsResponse,
        validation::{deserialize_amount, validate_create_operation, validate_id, validate_status_update},
    },
    map_to_api_error,
    operations::{
        db_types::OperationRecord,
        processor_enums::{OperationsProcessorInput, OperationsProcessorOutput},
    },
    utils::app_config::AppConfig,
};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateOperationBody {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<BigDecimal>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateStatusBody {
    pub status: Option<String>,
}

pub(crate) async fn current_month_operations(app_config: AppConfig) -> anyhow::Result<Vec<OperationRecord>> {
    let action = ActionRouterInput::Operations(OperationsProcessorInput::ListCurrentMonth);

    match action.process(app_config).await? {
        ActionRouterOutput::Operations(OperationsProcessorOutput::ListCurrentMonth(operations)) => Ok(operations),
        _ => Err(anyhow!("Unexpected response type")),
    }
}

/// Re-read the current month after a write; failures here mean the write itself went through.
pub(crate) async fn operations_response(
    app_config: AppConfig,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    let operations = map_to_api_error!(
        current_month_operations(app_config).await,
        codes::COULD_NOT_GET_ALL_MONTH_OPERATIONS
    )?;

    Ok((StatusCode::OK, Json(OperationsResponse { operations })))
}

/// GET /operations/current-month
pub async fn get_current_month_operations(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    operations_response(app_config).await
}

/// POST /operations - Create an operation in the current month
pub async fn create_operation(
    State(app_config): State<AppConfig>,
    JsonBody(body): JsonBody<CreateOperationBody>,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    let args = validate_create_operation(body.label, body.amount, body.status)?;

    let action = ActionRouterInput::Operations(OperationsProcessorInput::Create(args));
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_CREATE_OPERATION
    )?;

    operations_response(app_config).await
}

/// PATCH /operations/{id} - Set the status of an operation
pub async fn update_operation_status(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateStatusBody>,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    let args = validate_status_update(&id, body.status)?;

    let action = ActionRouterInput::Operations(OperationsProcessorInput::UpdateStatus(args));
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_UPDATE_OPERATION
    )?;

    operations_response(app_config).await
}

/// DELETE /operations/{id}
pub async fn delete_operation(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    let operation_id = validate_id(&id)?;

    let action = ActionRouterInput::Operations(OperationsProcessorInput::Delete(operation_id));
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_DELETE_OPERATION
    )?;

    operations_response(app_config).await
}
