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
        handlers::operations::operations_response,
        response::{BudgetsResponse, OperationsResponse},
        validation::{deserialize_amount, validate_create_budget, validate_id},
    },
    budgets::{
        db_types::BudgetRecord,
        processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput},
    },
    map_to_api_error,
    utils::app_config::AppConfig,
};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateBudgetBody {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<BigDecimal>,
}

async fn all_budgets(app_config: AppConfig) -> anyhow::Result<Vec<BudgetRecord>> {
    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::List);

    match action.process(app_config).await? {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::List(budgets)) => Ok(budgets),
        _ => Err(anyhow!("Unexpected response type")),
    }
}

async fn budgets_response(
    app_config: AppConfig,
) -> Result<(StatusCode, Json<BudgetsResponse>), ApiError> {
    let budgets = map_to_api_error!(all_budgets(app_config).await, codes::COULD_NOT_GET_BUDGETS)?;

    Ok((StatusCode::OK, Json(BudgetsResponse { budgets })))
}

/// GET /budgets
pub async fn get_budgets(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<BudgetsResponse>), ApiError> {
    budgets_response(app_config).await
}

/// POST /budgets
pub async fn create_budget(
    State(app_config): State<AppConfig>,
    JsonBody(body): JsonBody<CreateBudgetBody>,
) -> Result<(StatusCode, Json<BudgetsResponse>), ApiError> {
    let args = validate_create_budget(body.label, body.amount)?;

    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::Create(args));
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_CREATE_BUDGET
    )?;

    budgets_response(app_config).await
}

/// DELETE /budgets/{id}
pub async fn delete_budget(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<BudgetsResponse>), ApiError> {
    let budget_id = validate_id(&id)?;

    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::Delete(budget_id));
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_DELETE_BUDGET
    )?;

    budgets_response(app_config).await
}

/// POST /transfer-budgets - Copy every budget into this month as pending operations
pub async fn transfer_budgets(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<OperationsResponse>), ApiError> {
    let action = ActionRouterInput::Budgets(BudgetsProcessorInput::Transfer);
    map_to_api_error!(
        action.process(app_config.clone()).await,
        codes::COULD_NOT_TRANSFER_BUDGETS
    )?;

    operations_response(app_config).await
}
