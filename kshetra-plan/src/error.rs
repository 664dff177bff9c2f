//! Error types for kshetra-plan

use kshetra::{ConfigLoadError, PlanError};
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum PlanAppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Planning failed [{code}]: {0}", code = .0.code())]
    Plan(#[from] PlanError),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<toml::de::Error> for PlanAppError {
    fn from(e: toml::de::Error) -> Self {
        PlanAppError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for PlanAppError {
    fn from(e: serde_yaml::Error) -> Self {
        PlanAppError::Config(e.to_string())
    }
}

impl From<ConfigLoadError> for PlanAppError {
    fn from(e: ConfigLoadError) -> Self {
        PlanAppError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanAppError>;
