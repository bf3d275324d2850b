use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod edit;

pub use app_config::{AppConfig, Environment};
pub use catalog::{AttributeGroup, AttributeItem, CategoryRecord, ProductRecord, ProductStub};
pub use config::{load_app_config, load_app_config_from_env};
pub use edit::{rename_category, update_product_field, EditError, ProductField};

/// Errors produced while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
