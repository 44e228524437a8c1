//! CLI command handlers.
//!
//! Headless access to the site content for authors and CI: validate it,
//! list projects, inspect resolved case studies and manage the server
//! configuration.

pub mod check;
pub mod common;
pub mod config;
pub mod projects;
pub mod show;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use projects::ProjectsArgs;
pub use show::ShowArgs;
