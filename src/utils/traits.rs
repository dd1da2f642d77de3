use anyhow::Result;
use crate::store::Store;
use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Config, Output> {
    async fn process(&self, app_config: &mut AppConfig, local_config: &mut Config, store: &dyn Store)->Result<Output>;
}
