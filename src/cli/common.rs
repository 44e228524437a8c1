//! Shared CLI plumbing: error type, exit codes and content loading.

use thiserror::Error;

use crate::config::Config;
use crate::content::{ContentStore, Language};
use crate::views::AssetCatalog;

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    /// Command succeeded
    pub const SUCCESS: i32 = 0;
    /// Content invalid or lookup failed
    pub const VALIDATION: i32 = 1;
    /// Reading, parsing or writing failed
    pub const IO: i32 = 2;
}

/// Error reported by a CLI command.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Process exit code
    pub exit_code: i32,
}

impl CliError {
    /// Validation or lookup failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::VALIDATION,
        }
    }

    /// I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IO,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the validated content store.
pub fn load_content() -> CliResult<ContentStore> {
    ContentStore::load().map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Requested language, or the configured default.
pub fn language_or_default(requested: Option<Language>) -> CliResult<Language> {
    match requested {
        Some(lang) => Ok(lang),
        None => Config::load()
            .map(|config| config.site.default_language)
            .map_err(|e| CliError::io(format!("Failed to load config: {e:#}"))),
    }
}

/// Serializes a value as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

/// Assets the server would serve, so CLI output matches the API.
#[cfg(feature = "web")]
pub fn asset_catalog() -> &'static dyn AssetCatalog {
    &crate::web::static_files::EmbeddedAssets
}

/// Assets the server would serve, so CLI output matches the API.
#[cfg(not(feature = "web"))]
pub fn asset_catalog() -> &'static dyn AssetCatalog {
    &crate::views::NoAssets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code, ExitCode::VALIDATION);
        assert_eq!(CliError::io("x").exit_code, ExitCode::IO);
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_explicit_language_wins() {
        assert_eq!(language_or_default(Some(Language::Ua)).unwrap(), Language::Ua);
    }
}
