use crate::budgets::config::BudgetsConfig;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::operations::config::OperationsConfig;
use crate::operations::processor_enums::{OperationsProcessorInput, OperationsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::month::month_bucket;
use crate::utils::traits::ActionProcessor;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ActionRouterInput {
    Operations(OperationsProcessorInput),
    Budgets(BudgetsProcessorInput),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ActionRouterOutput {
    Operations(OperationsProcessorOutput),
    Budgets(BudgetsProcessorOutput),
}

impl ActionRouterInput {

    pub async fn process(&self, app_config: AppConfig)-> Result<ActionRouterOutput> {
        // month is resolved once per action so a call never straddles two buckets
        let today = app_config.today();
        let current_month = month_bucket(today);
        let store = app_config.store.clone();

        match self {
            ActionRouterInput::Operations(processor) => {
                let mut config = OperationsConfig {
                    current_month,
                    today,
                };

                let res = processor.process(&mut app_config.clone(), &mut config, store.as_ref()).await?;

                Ok(ActionRouterOutput::Operations(res))
            }
            ActionRouterInput::Budgets(processor) => {
                let mut config = BudgetsConfig {
                    current_month,
                };

                let res = processor.process(&mut app_config.clone(), &mut config, store.as_ref()).await?;

                Ok(ActionRouterOutput::Budgets(res))
            }
        }
    }
}
