//! Project listing command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{language_or_default, load_content, to_json, CliResult};
use crate::content::Language;

/// List projects in gallery order
#[derive(Debug, Clone, Args)]
pub struct ProjectsArgs {
    /// Language to resolve titles in (en, jp, ua)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the listing.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    /// Project identifier
    pub id: String,
    /// Title in the requested language
    pub title: String,
    /// Category in the requested language
    pub category: String,
    /// Whether a prototype link exists
    pub has_prototype: bool,
    /// Whether a design system is documented
    pub has_design_system: bool,
}

impl ProjectsArgs {
    /// Execute the projects command
    pub fn execute(&self) -> CliResult<()> {
        let lang = language_or_default(self.lang)?;
        let store = load_content()?;

        let summaries: Vec<ProjectSummary> = store
            .registry()
            .list()
            .iter()
            .map(|project| {
                let content = project.content_for(lang);
                ProjectSummary {
                    id: project.id.clone(),
                    title: content.title.clone(),
                    category: content.category.clone(),
                    has_prototype: project.figma_url.is_some(),
                    has_design_system: project.design_system.is_some(),
                }
            })
            .collect();

        if self.json {
            println!("{}", to_json(&summaries)?);
            return Ok(());
        }

        let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
        for summary in &summaries {
            println!(
                "{:<width$}  {}  ({})",
                summary.id, summary.title, summary.category
            );
        }
        Ok(())
    }
}
