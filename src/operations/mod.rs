pub mod config;
pub mod db_types;
#[allow(clippy::module_inception)]
pub mod operations;
pub mod processor;
pub mod processor_enums;
pub mod summary;
