use crate::budgets::config::BudgetsConfig;
use crate::budgets::operations::{create_budget, delete_budget, list_budgets, transfer_budgets};
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::store::Store;
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<BudgetsConfig, BudgetsProcessorOutput> for BudgetsProcessorInput {
    async fn process(&self, _app_config: &mut AppConfig, local_config: &mut BudgetsConfig, store: &dyn Store) -> anyhow::Result<BudgetsProcessorOutput> {
        match self {
            BudgetsProcessorInput::List => {
                let res = list_budgets(store).await?;
                Ok(BudgetsProcessorOutput::List(res))
            }
            BudgetsProcessorInput::Create(args) => {
                let res = create_budget(store, args.clone()).await?;
                Ok(BudgetsProcessorOutput::Create(res))
            }
            BudgetsProcessorInput::Delete(budget_id) => {
                delete_budget(store, *budget_id).await?;
                Ok(BudgetsProcessorOutput::Delete)
            }
            BudgetsProcessorInput::Transfer => {
                let res = transfer_budgets(store, local_config.current_month).await?;
                Ok(BudgetsProcessorOutput::Transfer(res))
            }
        }
    }
}
