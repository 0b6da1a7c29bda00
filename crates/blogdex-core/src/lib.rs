//! Shared types and configuration for blogdex.
//!
//! Every wire record the pipeline produces lives here so the scraper,
//! scorer, server, and CLI crates agree on one schema.

mod app_config;
mod config;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
