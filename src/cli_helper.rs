use anyhow::Result;
use crate::utils::app_config::AppConfig;
use crate::action_router::{ActionRouterInput, ActionRouterOutput};

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config() -> Result<AppConfig> {
    AppConfig::from_env()
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(input: ActionRouterInput, app_config: AppConfig) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}
