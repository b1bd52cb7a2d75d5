//! Configuration utilities

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset settings
    pub dataset: DatasetSettings,
    /// Analysis settings
    pub analysis: AnalysisSettings,
    /// Report output settings
    pub report: ReportSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Dataset-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// CSV file with one post per row
    pub path: PathBuf,
    /// Header name of the column holding post text
    pub text_column: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DATASET_PATH),
            text_column: defaults::TEXT_COLUMN.to_string(),
        }
    }
}

/// Analysis-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Upper bound on the number of posts analyzed per run
    pub max_sample_size: usize,
    /// Optional CSV lexicon merged over the built-in one
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_sample_size: defaults::MAX_SAMPLE_SIZE,
            lexicon_path: None,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Directory receiving the charts and the PDF
    pub output_dir: PathBuf,
    /// Number of bins in the polarity histogram
    pub histogram_bins: usize,
    /// Column width for wrapped summary text
    pub wrap_width: usize,
    /// Polarity histogram file name
    pub polarity_chart: String,
    /// Subjectivity pie chart file name
    pub subjectivity_chart: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            histogram_bins: defaults::HISTOGRAM_BINS,
            wrap_width: defaults::WRAP_WIDTH,
            polarity_chart: defaults::POLARITY_CHART.to_string(),
            subjectivity_chart: defaults::SUBJECTIVITY_CHART.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let content = match ext {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content)
        .map_err(|e| ConfigError::FileError(e.to_string()))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
