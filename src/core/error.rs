use thiserror::Error;

/// Rejected configuration input. Raised only at the configuration boundary;
/// the session itself never fails.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid grid size: {0} (expected 1..=200)")]
    InvalidGridSize(String),

    #[error("Invalid blocked count: {0}")]
    InvalidBlockedCount(String),

    #[error("Invalid zoom bounds: min {min}, max {max}")]
    InvalidZoomBounds { min: f32, max: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
