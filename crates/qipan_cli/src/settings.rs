//! Effective engine configuration: defaults, then file, then flags.

use crate::cli::BoardArgs;
use qipan::{ConfigError, EngineConfig};
use tracing::{debug, instrument};

/// Resolves the configuration for a run.
#[instrument]
pub fn resolve(args: &BoardArgs) -> Result<EngineConfig, ConfigError> {
    let base = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    debug!(?base, "Base config");

    EngineConfig::new(
        args.rows.unwrap_or(*base.rows()),
        args.cols.unwrap_or(*base.cols()),
        args.win_length.unwrap_or(*base.win_length()),
    )
}

/// Renders the effective configuration as TOML.
pub fn render(args: &BoardArgs) -> Result<String, ConfigError> {
    resolve(args)?.to_toml_string()
}
