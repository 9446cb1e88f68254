//! Engine configuration: board dimensions and win length.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest supported board side.
pub const MAX_DIMENSION: usize = 64;

/// Board dimensions and the run length needed to win.
///
/// Always valid: every constructor and the TOML loader check the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "EngineConfigFile")]
pub struct EngineConfig {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Contiguous marks required to win (K).
    win_length: usize,
}

/// On-disk shape of [`EngineConfig`], before validation.
#[derive(Debug, Clone, Deserialize)]
struct EngineConfigFile {
    #[serde(default = "default_rows")]
    rows: usize,
    #[serde(default = "default_cols")]
    cols: usize,
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_rows() -> usize {
    15
}

fn default_cols() -> usize {
    15
}

fn default_win_length() -> usize {
    5
}

impl TryFrom<EngineConfigFile> for EngineConfig {
    type Error = ConfigError;

    fn try_from(file: EngineConfigFile) -> Result<Self, Self::Error> {
        EngineConfig::new(file.rows, file.cols, file.win_length)
    }
}

impl EngineConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::new(format!(
                "board must have at least one row and one column (got {rows}x{cols})"
            )));
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ConfigError::new(format!(
                "board sides are limited to {MAX_DIMENSION} (got {rows}x{cols})"
            )));
        }
        if win_length == 0 {
            return Err(ConfigError::new("win_length must be at least 1"));
        }
        if win_length > rows.max(cols) {
            return Err(ConfigError::new(format!(
                "win_length {win_length} cannot fit on a {rows}x{cols} board"
            )));
        }
        Ok(Self {
            rows,
            cols,
            win_length,
        })
    }

    /// Classic 3x3 tic-tac-toe.
    pub fn tic_tac_toe() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_length: 3,
        }
    }

    /// Free-style gomoku: 15x15, five in a row.
    pub fn gomoku() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            win_length: default_win_length(),
        }
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            win_length = config.win_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::gomoku()
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
