//! Shared domain types and configuration for the medassist workspace.

pub mod app_config;
pub mod config;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, LlmProvider};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    AdviceQuery, AdviceResult, Coordinates, HomeRemedy, NearbyChemist, OtcMedicine, VideoLink,
};

/// Errors from loading or validating application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
