pub mod app_config;
pub mod catalog;
pub mod config;
pub mod content;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{Catalogue, CatalogueMeta, CategoryInfo, CategorySlug, Product, SpecMap};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{ContentItem, ContentStatus, ContentType};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
