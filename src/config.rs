//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for every path no route claims (videos, images).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `public`
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("ASSETS_DIR").ok().as_deref())
    }

    fn from_values(port: Option<&str>, assets_dir: Option<&str>) -> Result<Self, ServerConfigError> {
        let port = match port.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ServerConfigError::InvalidPort { value: raw.to_owned(), source })?,
            None => DEFAULT_PORT,
        };
        let assets_dir = assets_dir
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        Ok(Self { port, assets_dir })
    }
}
