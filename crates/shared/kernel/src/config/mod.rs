use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failures while loading or deserializing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from `<path>.toml` (or another supported
///    format), defaulting to `server` in the working directory. The file is
///    optional; a missing file falls back to struct defaults.
/// 2. **Environment overrides**: values from variables prefixed with
///    `WICHTEL__`, nested via double underscores (e.g. `WICHTEL__SERVER__PORT`
///    maps to `server.port`).
///
/// # Errors
/// Returns [`ConfigError`] if the file or environment values are malformed or
/// do not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("WICHTEL")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()?
        .try_deserialize::<T>()?;

    Ok(config)
}
