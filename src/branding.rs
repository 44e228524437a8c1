//! Branding and site identity.
//!
//! Centralizes names and paths so the site can be rebranded in one place.

/// Title suffix used on every page.
pub const SITE_TITLE: &str = "Anastasiia Hrytsai · UI/UX Portfolio";

/// Meta description for every page.
pub const TAGLINE: &str = "UI/UX design case studies in English, Japanese and Ukrainian";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "folio";

/// Package version reported by `/health` and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
