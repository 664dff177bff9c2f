//! Configuration loading for kshetra-plan

use std::path::Path;

use kshetra::SurveyConfig;
use serde::Deserialize;

use crate::error::{PlanAppError, Result};

/// Application configuration: a survey plus output settings
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlanConfig {
    #[serde(flatten)]
    pub survey: SurveyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path of the waypoint file (default: output/plan.yaml)
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "output/plan.yaml".to_string()
}

impl PlanConfig {
    /// Load from a `.toml`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanAppError::Config(format!("Failed to read config file: {}", e)))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("yaml" | "yml") => Self::from_yaml(&content),
            other => Err(PlanAppError::Config(format!(
                "Unsupported config extension: {:?}",
                other
            ))),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
