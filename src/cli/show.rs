//! Case-study inspection command.

use clap::Args;

use crate::cli::common::{
    asset_catalog, language_or_default, load_content, to_json, CliError, CliResult,
};
use crate::content::Language;
use crate::views::CaseStudyView;

/// Print a project's resolved case study as JSON
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Project identifier (see `folio projects`)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Language to resolve the case study in (en, jp, ua)
    #[arg(short, long)]
    pub lang: Option<Language>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let lang = language_or_default(self.lang)?;
        let store = load_content()?;

        let project = store.registry().find(&self.id).ok_or_else(|| {
            CliError::validation(format!("Project not found: '{}'", self.id))
        })?;

        let view = CaseStudyView::new(project, store.site(), lang, asset_catalog());
        println!("{}", to_json(&view)?);
        Ok(())
    }
}
