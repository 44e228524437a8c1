//! Ordered project registry with identifier lookup.

use anyhow::Result;
use std::collections::HashMap;

use super::Project;

/// The projects in authored display order.
///
/// Order drives the home gallery and previous/next navigation. Lookup by
/// identifier goes through a precomputed index and is exact: no case
/// folding, no trimming.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    /// Projects in authored order
    projects: Vec<Project>,
    /// Identifier to position in `projects`
    lookup: HashMap<String, usize>,
}

/// Projects adjacent to a given one in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    /// Project shown before, if any
    pub previous: Option<&'a Project>,
    /// Project shown after, if any
    pub next: Option<&'a Project>,
}

impl ProjectRegistry {
    /// Builds the registry, rejecting duplicate identifiers.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(projects.len());

        for (idx, project) in projects.iter().enumerate() {
            if let Some(first) = lookup.insert(project.id.clone(), idx) {
                anyhow::bail!(
                    "Duplicate project id '{}' (entries {} and {})",
                    project.id,
                    first + 1,
                    idx + 1
                );
            }
        }

        Ok(Self { projects, lookup })
    }

    /// Finds a project by exact identifier.
    ///
    /// Returns `None` for unknown identifiers, including `""` and
    /// identifiers that differ only in case.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Project> {
        let idx = self.lookup.get(id)?;
        self.projects.get(*idx)
    }

    /// Returns true if a project with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// All projects in authored order.
    #[must_use]
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the registry holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Previous and next projects around `id`; `None` if `id` is unknown.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<Neighbors<'_>> {
        let idx = *self.lookup.get(id)?;
        Some(Neighbors {
            previous: idx.checked_sub(1).and_then(|prev| self.projects.get(prev)),
            next: self.projects.get(idx + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CaseStudyContent, Localized, ProjectContent};

    fn project(id: &str) -> Project {
        let content = ProjectContent {
            title: id.to_uppercase(),
            category: "Category".to_string(),
            description: "Description".to_string(),
            tags: vec!["tag".to_string()],
            case_study: CaseStudyContent {
                role: "Designer".to_string(),
                timeline: "1 Week".to_string(),
                tools: vec!["Figma".to_string()],
                overview: "Overview".to_string(),
                problem: "Problem".to_string(),
                solution: "Solution".to_string(),
                process: vec!["Research".to_string()],
                persona: None,
                results: "Results".to_string(),
                logo_concept: None,
                insights: Vec::new(),
                metrics: Vec::new(),
                next_steps: Vec::new(),
            },
        };
        Project {
            id: id.to_string(),
            thumbnail: format!("/{id}.png"),
            accent_color: "#000000".to_string(),
            figma_url: None,
            content: Localized::uniform(content),
            design_system: None,
        }
    }

    fn registry() -> ProjectRegistry {
        ProjectRegistry::new(vec![project("alpha"), project("beta"), project("gamma")]).unwrap()
    }

    #[test]
    fn test_find_exact_match() {
        let registry = registry();
        assert_eq!(registry.find("beta").map(|p| p.id.as_str()), Some("beta"));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let registry = registry();
        assert!(registry.find("Beta").is_none());
        assert!(registry.find("BETA").is_none());
        assert!(registry.find(" beta").is_none());
        assert!(registry.find("").is_none());
    }

    #[test]
    fn test_find_returns_same_entry_each_time() {
        let registry = registry();
        let first = registry.find("gamma").unwrap();
        let second = registry.find("gamma").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_list_keeps_authored_order() {
        let registry = registry();
        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ProjectRegistry::new(vec![project("alpha"), project("alpha")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate project id 'alpha'"));
    }

    #[test]
    fn test_neighbors() {
        let registry = registry();

        let first = registry.neighbors("alpha").unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|p| p.id.as_str()), Some("beta"));

        let middle = registry.neighbors("beta").unwrap();
        assert_eq!(middle.previous.map(|p| p.id.as_str()), Some("alpha"));
        assert_eq!(middle.next.map(|p| p.id.as_str()), Some("gamma"));

        let last = registry.neighbors("gamma").unwrap();
        assert_eq!(last.previous.map(|p| p.id.as_str()), Some("beta"));
        assert!(last.next.is_none());

        assert!(registry.neighbors("delta").is_none());
    }
}
