use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, Json};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::{codes, ApiError},
        response::SummaryResponse,
    },
    map_to_api_error,
    operations::{
        processor_enums::{OperationsProcessorInput, OperationsProcessorOutput},
        summary::MonthSummary,
    },
    utils::app_config::AppConfig,
};

async fn month_summary(app_config: AppConfig) -> anyhow::Result<MonthSummary> {
    let action = ActionRouterInput::Operations(OperationsProcessorInput::Summary);

    match action.process(app_config).await? {
        ActionRouterOutput::Operations(OperationsProcessorOutput::Summary(summary)) => Ok(summary),
        _ => Err(anyhow!("Unexpected response type")),
    }
}

/// GET /summary - Current and forecast figures for the current month
pub async fn get_summary(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<SummaryResponse>), ApiError> {
    let summary = map_to_api_error!(month_summary(app_config).await, codes::COULD_NOT_GET_SUMMARY)?;

    Ok((StatusCode::OK, Json(SummaryResponse { summary })))
}
