//! Content validation command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{to_json, CliError, CliResult};
use crate::content::{load_embedded, ContentValidator, ValidationIssue};

/// Validate the embedded site content
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Validation result.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// True when there are no errors
    pub valid: bool,
    /// Number of projects checked
    pub projects: usize,
    /// Blocking problems
    pub errors: Vec<ValidationIssue>,
    /// Non-blocking inconsistencies
    pub warnings: Vec<ValidationIssue>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let (site, projects) =
            load_embedded().map_err(|e| CliError::io(format!("Failed to load content: {e:#}")))?;
        let report = ContentValidator::new(&site, &projects).validate();

        let response = CheckResponse {
            valid: report.is_valid(),
            projects: projects.len(),
            errors: report.errors.clone(),
            warnings: report.warnings.clone(),
        };

        if self.json {
            println!("{}", to_json(&response)?);
        } else {
            if response.valid {
                println!("✓ Content is valid ({} projects)", response.projects);
            } else {
                println!("✗ Content validation failed");
            }
            if !report.errors.is_empty() || !report.warnings.is_empty() {
                println!("{}", report.format_message());
            }
        }

        if !response.valid {
            return Err(CliError::validation("Content validation failed"));
        }
        if self.strict && !response.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
