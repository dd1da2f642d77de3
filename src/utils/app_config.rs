use crate::store::Store;
use crate::store::postgres::PgStore;
use crate::utils::month::{Clock, SystemClock, month_bucket};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use dotenvy::dotenv;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppConfig {
    pub store: Arc<dyn Store>,
    pub clock: Arc<dyn Clock>,
}

impl AppConfig {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL must be set in .env file or environment variables"))?;
        let store = PgStore::connect(&database_url)?;

        Ok(Self::new(Arc::new(store), Arc::new(SystemClock)))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Month bucket operations created right now would be stamped with.
    pub fn current_month(&self) -> NaiveDate {
        month_bucket(self.today())
    }
}
