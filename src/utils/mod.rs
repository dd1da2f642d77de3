pub mod app_config;
pub mod commons;
pub mod db;
pub mod month;
pub mod ordering;
pub mod traits;
