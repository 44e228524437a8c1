//! Case-study projects shown in the gallery and on detail pages.

use serde::{Deserialize, Serialize};

use super::{Language, Localized};

/// One portfolio case study.
///
/// # Validation
///
/// - `id` must be unique within the registry and kebab-case; it is the
///   routing key (`/project/{id}`)
/// - every language entry of `content` must carry non-empty text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier (e.g., "vegwam")
    pub id: String,
    /// Thumbnail image: a local asset path ("/vegwam-thumbnail.png") or a URI
    pub thumbnail: String,
    /// Accent color token (CSS color, e.g. "#F1683C")
    pub accent_color: String,
    /// Interactive prototype link, passed through unmodified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_url: Option<String>,
    /// Content per language
    pub content: Localized<ProjectContent>,
    /// Brand colors and typography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_system: Option<DesignSystem>,
}

impl Project {
    /// Content for one language.
    #[must_use]
    pub const fn content_for(&self, lang: Language) -> &ProjectContent {
        self.content.get(lang)
    }
}

/// Project text authored in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContent {
    /// Display title
    pub title: String,
    /// Category line (e.g., "App Redesign")
    pub category: String,
    /// One-sentence description for the gallery card
    pub description: String,
    /// Tags in display order
    pub tags: Vec<String>,
    /// Case-study narrative
    pub case_study: CaseStudyContent,
}

/// Case-study narrative in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyContent {
    /// Designer's role on the project
    pub role: String,
    /// Duration (e.g., "2 Weeks")
    pub timeline: String,
    /// Tools in display order
    pub tools: Vec<String>,
    /// Context paragraph
    pub overview: String,
    /// Problem statement
    pub problem: String,
    /// Solution statement
    pub solution: String,
    /// Process steps in chronological order
    pub process: Vec<String>,
    /// Target user persona
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    /// Outcome paragraph
    pub results: String,
    /// Logo / brand concept note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_concept: Option<String>,
    /// Research insights
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<Insight>,
    /// Headline metrics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
    /// Planned follow-up work
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

/// User persona from research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Persona name and age band
    pub name: String,
    /// Role / short description
    pub description: String,
    /// Representative quote from interviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Pain points in display order
    pub frustrations: Vec<String>,
    /// Goals in display order
    pub goals: Vec<String>,
}

/// Research insight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Overline (e.g., "INSIGHT 01")
    pub label: String,
    /// Insight title
    pub title: String,
    /// Insight body
    pub body: String,
}

/// Headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Value as displayed (e.g., "95%")
    pub value: String,
    /// What the value measures
    pub label: String,
}

/// Descriptive brand metadata. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSystem {
    /// Color swatches in display order
    pub colors: Vec<ColorSwatch>,
    /// Typefaces in display order
    pub typography: Vec<TypographyEntry>,
}

/// Named brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// Color as written by the author (usually "#RRGGBB")
    pub hex: String,
    /// Swatch name
    pub name: String,
}

/// Typeface and where it is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyEntry {
    /// Typeface name
    pub name: String,
    /// Usage (e.g., "Headings")
    pub usage: String,
}
