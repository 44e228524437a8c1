//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Each test binary uses a different subset

use folio::config::Config;
use folio::content::{
    CaseStudyContent, ContentStore, Language, Localized, Project, ProjectContent,
};
use folio::views::DetailPresentation;

/// Embedded content, validated.
pub fn content() -> ContentStore {
    ContentStore::load().expect("embedded content should be valid")
}

/// Default config with the given presentation and default language.
pub fn config_with(presentation: DetailPresentation, default_language: Language) -> Config {
    let mut config = Config::new();
    config.site.detail_presentation = presentation;
    config.site.default_language = default_language;
    config
}

/// Minimal case study with every required field filled.
pub fn case_study(label: &str) -> CaseStudyContent {
    CaseStudyContent {
        role: format!("{label} role"),
        timeline: "1 Week".to_string(),
        tools: vec!["Figma".to_string()],
        overview: format!("{label} overview"),
        problem: format!("{label} problem"),
        solution: format!("{label} solution"),
        process: vec!["Research".to_string(), "Design".to_string()],
        persona: None,
        results: format!("{label} results"),
        logo_concept: None,
        insights: Vec::new(),
        metrics: Vec::new(),
        next_steps: Vec::new(),
    }
}

/// Project with the same text in every language, prefixed by language code.
pub fn test_project(id: &str) -> Project {
    let content = |lang: &str| ProjectContent {
        title: format!("{id} ({lang})"),
        category: format!("Category ({lang})"),
        description: format!("Description ({lang})"),
        tags: vec!["UX".to_string(), "Mobile".to_string()],
        case_study: case_study(lang),
    };

    Project {
        id: id.to_string(),
        thumbnail: format!("https://placehold.co/600x400?text={id}"),
        accent_color: "#123456".to_string(),
        figma_url: None,
        content: Localized::new(content("en"), content("jp"), content("ua")),
        design_system: None,
    }
}
