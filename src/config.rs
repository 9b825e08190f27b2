use std::path::PathBuf;

use thiserror::Error;

use crate::api::MomoApiClient;
use crate::services::chart_service::ChartOutput;

const DEFAULT_CHART_WIDTH: u32 = 800;
const DEFAULT_CHART_HEIGHT: u32 = 480;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    /// Charts are only drawn to disk when this is set
    pub chart_output: Option<ChartOutput>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup("MOMO_API_BASE_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty("MOMO_API_BASE_URL"))
            }
            Some(url) => url.trim().to_string(),
            None => MomoApiClient::DEFAULT_BASE_URL.to_string(),
        };

        let chart_output = match lookup("MOMO_CHART_DIR").filter(|d| !d.trim().is_empty()) {
            Some(dir) => Some(ChartOutput {
                dir: PathBuf::from(dir.trim()),
                width: parse_dimension(&lookup, "MOMO_CHART_WIDTH", DEFAULT_CHART_WIDTH)?,
                height: parse_dimension(&lookup, "MOMO_CHART_HEIGHT", DEFAULT_CHART_HEIGHT)?,
            }),
            None => None,
        };

        Ok(Self {
            api_base_url,
            chart_output,
        })
    }
}

fn parse_dimension<F>(lookup: &F, name: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or(ConfigError::InvalidNumber { name, value }),
    }
}
