//! Portfolio content model and lookup.
//!
//! Content is authored as JSON next to this module and embedded in the
//! binary at compile time. [`ContentStore::load`] parses it, runs the
//! [`ContentValidator`] and refuses content with errors, so every page
//! rendered afterwards can resolve any label in any [`Language`].

pub mod language;
pub mod localized;
pub mod project;
pub mod registry;
pub mod site;
pub mod validate;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

pub use language::Language;
pub use localized::{resolve, Localized, LocalizedList, LocalizedText};
pub use project::{
    CaseStudyContent, ColorSwatch, DesignSystem, Insight, Metric, Persona, Project,
    ProjectContent, TypographyEntry,
};
pub use registry::{Neighbors, ProjectRegistry};
pub use site::SiteContent;
pub use validate::{ContentValidator, IssueKind, ValidationIssue, ValidationReport};

/// Schema of the embedded projects.json.
#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
}

/// Parses the embedded content without validating it.
pub fn load_embedded() -> Result<(SiteContent, Vec<Project>)> {
    let site: SiteContent = serde_json::from_str(include_str!("site.json"))
        .context("Failed to parse embedded site.json")?;
    let file: ProjectsFile = serde_json::from_str(include_str!("projects.json"))
        .context("Failed to parse embedded projects.json")?;
    Ok((site, file.projects))
}

/// Validated, immutable site content.
#[derive(Debug, Clone)]
pub struct ContentStore {
    site: SiteContent,
    registry: ProjectRegistry,
    warnings: Vec<ValidationIssue>,
}

impl ContentStore {
    /// Loads and validates the embedded content.
    pub fn load() -> Result<Self> {
        let (site, projects) = load_embedded()?;
        Self::from_parts(site, projects)
    }

    /// Validates content and builds the store.
    ///
    /// Fails if the validation report has errors; warnings are kept and
    /// logged.
    pub fn from_parts(site: SiteContent, projects: Vec<Project>) -> Result<Self> {
        let report = ContentValidator::new(&site, &projects).validate();
        if !report.is_valid() {
            anyhow::bail!("Content validation failed\n{}", report.format_message());
        }
        for warning in &report.warnings {
            warn!("content: {warning}");
        }

        let registry = ProjectRegistry::new(projects)?;
        debug!("Loaded {} projects", registry.len());

        Ok(Self {
            site,
            registry,
            warnings: report.warnings,
        })
    }

    /// Site labels and profile.
    #[must_use]
    pub const fn site(&self) -> &SiteContent {
        &self.site
    }

    /// Project registry.
    #[must_use]
    pub const fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Validation warnings found while loading.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }
}
