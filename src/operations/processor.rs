use crate::operations::config::OperationsConfig;
use crate::operations::operations::{
    create_operation, delete_operation, get_summary, list_current_month, update_operation_status,
};
use crate::operations::processor_enums::{OperationsProcessorInput, OperationsProcessorOutput};
use crate::store::Store;
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<OperationsConfig, OperationsProcessorOutput> for OperationsProcessorInput {
    async fn process(&self, _app_config: &mut AppConfig, local_config: &mut OperationsConfig, store: &dyn Store) -> anyhow::Result<OperationsProcessorOutput> {
        match self {
            OperationsProcessorInput::ListCurrentMonth => {
                let res = list_current_month(store, local_config.current_month).await?;
                Ok(OperationsProcessorOutput::ListCurrentMonth(res))
            }
            OperationsProcessorInput::Create(args) => {
                let res = create_operation(store, local_config.current_month, args.clone()).await?;
                Ok(OperationsProcessorOutput::Create(res))
            }
            OperationsProcessorInput::UpdateStatus(args) => {
                update_operation_status(store, args.clone()).await?;
                Ok(OperationsProcessorOutput::UpdateStatus)
            }
            OperationsProcessorInput::Delete(operation_id) => {
                delete_operation(store, *operation_id).await?;
                Ok(OperationsProcessorOutput::Delete)
            }
            OperationsProcessorInput::Summary => {
                let res = get_summary(store, local_config.current_month, local_config.today).await?;
                Ok(OperationsProcessorOutput::Summary(res))
            }
        }
    }
}
