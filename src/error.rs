use thiserror::Error;

/// A tool name coming from the host that is not one of the fixed tools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0:?} (expected Rectangle, Oval, Line or Pencil)")]
pub struct UnknownTool(pub String);

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
