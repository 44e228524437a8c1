//! Content validation run before the site is served.
//!
//! Missing translations cannot get this far (every localized record has a
//! required field per language), so this pass looks for what the type
//! system cannot see: empty strings, malformed or duplicated identifiers,
//! and per-language lists that drifted apart while editing.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

use super::{Language, Project, SiteContent};

/// Validation result with errors and warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Problems that make the content unusable
    pub errors: Vec<ValidationIssue>,
    /// Inconsistencies worth fixing that do not break a page
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error.
    pub fn add_error(&mut self, kind: IssueKind, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue::new(kind, path, message));
    }

    /// Adds a warning.
    pub fn add_warning(
        &mut self,
        kind: IssueKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.warnings.push(ValidationIssue::new(kind, path, message));
    }

    /// Formats the report for terminal output.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("✗ {} content errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("⚠ {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// What kind of problem an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A displayed string is empty for some language
    EmptyText,
    /// Project identifier is not kebab-case
    InvalidId,
    /// Two projects share an identifier
    DuplicateId,
    /// The registry has no projects
    NoProjects,
    /// A list has different lengths across languages
    LengthMismatch,
    /// An optional section exists in some languages only
    SectionMismatch,
    /// A skill level is outside 0-100
    SkillLevel,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Kind of finding
    pub kind: IssueKind,
    /// Location in the content tree (e.g., "projects.vegwam.jp.case_study.overview")
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Kebab-case: lowercase letters and digits in hyphen-separated words.
fn is_kebab_case(id: &str) -> bool {
    !id.is_empty()
        && id.split('-').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Checks site content and projects for authoring defects.
pub struct ContentValidator<'a> {
    site: &'a SiteContent,
    projects: &'a [Project],
}

impl<'a> ContentValidator<'a> {
    /// Creates a validator over borrowed content.
    #[must_use]
    pub const fn new(site: &'a SiteContent, projects: &'a [Project]) -> Self {
        Self { site, projects }
    }

    /// Runs every check.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_site(&mut report);
        self.check_ids(&mut report);
        for project in self.projects {
            Self::check_project(project, &mut report);
        }

        report
    }

    fn check_site(&self, report: &mut ValidationReport) {
        match serde_json::to_value(self.site) {
            Ok(value) => collect_empty_strings(&value, "site", report),
            Err(e) => report.add_error(IssueKind::EmptyText, "site", e.to_string()),
        }

        for skill in &self.site.skills {
            if skill.level > 100 {
                report.add_warning(
                    IssueKind::SkillLevel,
                    format!("site.skills.{}", skill.name),
                    format!("Level {} is above 100", skill.level),
                );
            }
        }
    }

    fn check_ids(&self, report: &mut ValidationReport) {
        if self.projects.is_empty() {
            report.add_warning(IssueKind::NoProjects, "projects", "No projects to show");
        }

        let mut seen = HashSet::new();
        for project in self.projects {
            if !is_kebab_case(&project.id) {
                report.add_error(
                    IssueKind::InvalidId,
                    format!("projects.{}", project.id),
                    format!(
                        "Project id '{}' must be kebab-case (lowercase letters, digits, hyphens)",
                        project.id
                    ),
                );
            }
            if !seen.insert(project.id.as_str()) {
                report.add_error(
                    IssueKind::DuplicateId,
                    format!("projects.{}", project.id),
                    format!("Project id '{}' is used more than once", project.id),
                );
            }
        }
    }

    fn check_project(project: &Project, report: &mut ValidationReport) {
        let base = format!("projects.{}", project.id);

        for field in [&project.thumbnail, &project.accent_color] {
            if field.trim().is_empty() {
                report.add_error(IssueKind::EmptyText, &base, "Thumbnail and accent color are required");
            }
        }

        let mut per_language = Vec::with_capacity(Language::ALL.len());
        for (lang, content) in project.content.iter() {
            match serde_json::to_value(content) {
                Ok(value) => {
                    collect_empty_strings(&value, &format!("{base}.{lang}"), report);
                    per_language.push((lang, value));
                }
                Err(e) => report.add_error(IssueKind::EmptyText, &base, e.to_string()),
            }
        }

        // Compare every language against the first one
        if let Some(((first_lang, first), rest)) = per_language.split_first() {
            for (lang, value) in rest {
                compare_shapes(first, value, &format!("{base}.{first_lang}~{lang}"), report);
            }
        }
    }
}

/// Reports every empty string below `value`.
fn collect_empty_strings(value: &Value, path: &str, report: &mut ValidationReport) {
    match value {
        Value::String(s) if s.trim().is_empty() => {
            report.add_error(IssueKind::EmptyText, path, "Text is empty");
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect_empty_strings(item, &format!("{path}[{idx}]"), report);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                collect_empty_strings(item, &format!("{path}.{key}"), report);
            }
        }
        _ => {}
    }
}

/// Reports lists and optional sections that differ between two languages.
fn compare_shapes(a: &Value, b: &Value, path: &str, report: &mut ValidationReport) {
    match (a, b) {
        (Value::Array(left), Value::Array(right)) => {
            if left.len() != right.len() {
                report.add_warning(
                    IssueKind::LengthMismatch,
                    path,
                    format!("List has {} items in one language and {} in another", left.len(), right.len()),
                );
            }
            for (idx, (l, r)) in left.iter().zip(right).enumerate() {
                compare_shapes(l, r, &format!("{path}[{idx}]"), report);
            }
        }
        (Value::Object(left), Value::Object(right)) => {
            for (key, l) in left {
                match right.get(key) {
                    Some(r) => compare_shapes(l, r, &format!("{path}.{key}"), report),
                    None => report.add_warning(
                        IssueKind::SectionMismatch,
                        format!("{path}.{key}"),
                        "Section is missing in one language",
                    ),
                }
            }
            for key in right.keys().filter(|key| !left.contains_key(*key)) {
                report.add_warning(
                    IssueKind::SectionMismatch,
                    format!("{path}.{key}"),
                    "Section is missing in one language",
                );
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, Persona};

    fn embedded() -> ContentStore {
        ContentStore::load().unwrap()
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let store = embedded();
        let report = ContentValidator::new(store.site(), store.registry().list()).validate();
        assert!(report.is_valid(), "{}", report.format_message());
        assert!(report.warnings.is_empty(), "{}", report.format_message());
    }

    #[test]
    fn test_empty_translation_is_error() {
        let store = embedded();
        let mut projects = store.registry().list().to_vec();
        projects[0].content.ua.case_study.overview = "   ".to_string();

        let report = ContentValidator::new(store.site(), &projects).validate();
        assert!(!report.is_valid());
        let issue = &report.errors[0];
        assert_eq!(issue.kind, IssueKind::EmptyText);
        assert_eq!(
            issue.path,
            format!("projects.{}.ua.case_study.overview", projects[0].id)
        );
    }

    #[test]
    fn test_empty_site_label_is_error() {
        let store = embedded();
        let mut site = store.site().clone();
        site.labels.nav.work.en.clear();

        let report = ContentValidator::new(&site, store.registry().list()).validate();
        assert!(report
            .errors
            .iter()
            .any(|e| e.path == "site.labels.nav.work.en"));
    }

    #[test]
    fn test_invalid_and_duplicate_ids() {
        let store = embedded();
        let mut projects = store.registry().list().to_vec();
        projects[0].id = "Veg Wam".to_string();
        projects[1].id = projects[2].id.clone();

        let report = ContentValidator::new(store.site(), &projects).validate();
        let kinds: Vec<IssueKind> = report.errors.iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&IssueKind::InvalidId));
        assert!(kinds.contains(&IssueKind::DuplicateId));
    }

    #[test]
    fn test_list_length_mismatch_is_warning() {
        let store = embedded();
        let mut projects = store.registry().list().to_vec();
        projects[0].content.en.tags.push("Extra".to_string());

        let report = ContentValidator::new(store.site(), &projects).validate();
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.kind == IssueKind::LengthMismatch && w.path.ends_with(".tags")));
    }

    #[test]
    fn test_persona_in_one_language_only_is_warning() {
        let store = embedded();
        let mut projects = store.registry().list().to_vec();
        let target = projects
            .iter_mut()
            .find(|p| p.content.en.case_study.persona.is_none())
            .expect("fixture needs a project without persona");
        target.content.jp.case_study.persona = Some(Persona {
            name: "Test".to_string(),
            description: "Test persona".to_string(),
            quote: None,
            frustrations: vec!["One".to_string()],
            goals: vec!["Two".to_string()],
        });

        let report = ContentValidator::new(store.site(), &projects).validate();
        assert!(report
            .warnings
            .iter()
            .any(|w| w.kind == IssueKind::SectionMismatch && w.path.ends_with(".persona")));
    }

    #[test]
    fn test_is_kebab_case() {
        assert!(is_kebab_case("vegwam"));
        assert!(is_kebab_case("bicycle-navitime-2"));
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("-vegwam"));
        assert!(!is_kebab_case("veg--wam"));
        assert!(!is_kebab_case("VegWam"));
        assert!(!is_kebab_case("veg_wam"));
    }

    #[test]
    fn test_format_message_lists_issues() {
        let mut report = ValidationReport::new();
        report.add_error(IssueKind::EmptyText, "site.copyright", "Text is empty");
        report.add_warning(IssueKind::SkillLevel, "site.skills.Figma", "Level 120 is above 100");

        let message = report.format_message();
        assert!(message.contains("1 content errors"));
        assert!(message.contains("1. site.copyright: Text is empty"));
        assert!(message.contains("1 warnings"));
    }
}
