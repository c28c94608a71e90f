use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_DATABASE_PATH: &str = "countries.db";
pub const DEFAULT_TABLE_NAME: &str = "countries";
pub const DEFAULT_JSON_PATH: &str = "data.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Settings for one run. The binary always uses [`PipelineConfig::default`];
/// TOML loading is there for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    /// `None` waits forever.
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub database_path: String,
    pub table_name: String,
    pub json_path: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            json_path: DEFAULT_JSON_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl PipelineConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigError {
            message: format!("Failed to parse TOML: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        validation::validate_path("load.database_path", &self.load.database_path)?;
        validation::validate_table_name("load.table_name", &self.load.table_name)?;
        validation::validate_path("load.json_path", &self.load.json_path)?;

        Ok(())
    }
}

impl ConfigProvider for PipelineConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn database_path(&self) -> &str {
        &self.load.database_path
    }

    fn table_name(&self) -> &str {
        &self.load.table_name
    }

    fn json_path(&self) -> &str {
        &self.load.json_path
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
