//! Site-wide labels and profile content.

use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// Everything on the site that is not a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Fixed UI labels
    pub labels: Labels,
    /// Designer profile
    pub profile: Profile,
    /// Tool and craft skills with proficiency (0-100)
    pub skills: Vec<Skill>,
    /// Spoken languages with proficiency notes
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Personal interests, shown as chips
    pub interests: Vec<LocalizedText>,
    /// Footer copyright line
    pub copyright: String,
}

/// All fixed UI labels, grouped by page region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Top navigation
    pub nav: NavLabels,
    /// Home hero block
    pub hero: HeroLabels,
    /// Home section headings
    pub sections: SectionLabels,
    /// Experience tile
    pub experience: ExperienceLabels,
    /// Case-study headings (modal and routed page)
    pub case_study: CaseStudyLabels,
    /// Routed page chrome
    pub page: PageLabels,
    /// Not-found view
    pub not_found: NotFoundLabels,
}

/// Top navigation labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLabels {
    /// Link to the gallery
    pub work: LocalizedText,
    /// Link to the about grid
    pub about: LocalizedText,
    /// Link to the footer
    pub contact: LocalizedText,
}

/// Home hero labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLabels {
    /// Availability badge
    pub status: LocalizedText,
    /// First headline line
    pub title_prefix: LocalizedText,
    /// Highlighted second headline line
    pub title_suffix: LocalizedText,
    /// Introduction paragraph
    pub intro: LocalizedText,
    /// Call-to-action button
    pub cta: LocalizedText,
    /// Specialty badge on the portrait
    pub specialty: LocalizedText,
}

/// Home section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLabels {
    /// Gallery heading
    pub work: LocalizedText,
    /// About heading
    pub about: LocalizedText,
    /// Contact heading
    pub contact: LocalizedText,
    /// Skills tile heading
    pub skills: LocalizedText,
    /// Spoken languages tile heading
    pub languages: LocalizedText,
    /// Interests tile heading
    pub interests: LocalizedText,
}

/// Experience tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceLabels {
    /// Tile heading
    pub title: LocalizedText,
    /// Headline
    pub role: LocalizedText,
    /// Detail line
    pub description: LocalizedText,
}

/// Case-study section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyLabels {
    /// Role meta field
    pub role: LocalizedText,
    /// Timeline meta field
    pub timeline: LocalizedText,
    /// Tools meta field
    pub tools: LocalizedText,
    /// Overview heading
    pub overview: LocalizedText,
    /// Problem heading
    pub problem: LocalizedText,
    /// Solution heading
    pub solution: LocalizedText,
    /// Process heading
    pub process: LocalizedText,
    /// Persona heading
    pub persona: LocalizedText,
    /// Persona goals list
    pub goals: LocalizedText,
    /// Persona pain-point list
    pub frustrations: LocalizedText,
    /// Insights heading
    pub insights: LocalizedText,
    /// Metrics heading
    pub metrics: LocalizedText,
    /// Outcome heading
    pub outcome: LocalizedText,
    /// Next steps heading
    pub next_steps: LocalizedText,
    /// Brand identity heading
    pub brand: LocalizedText,
    /// Design system heading
    pub design_system: LocalizedText,
    /// Design system colors column
    pub colors: LocalizedText,
    /// Design system typography column
    pub typography: LocalizedText,
    /// Prototype heading
    pub prototype: LocalizedText,
    /// Hint under the embedded prototype
    pub prototype_hint: LocalizedText,
    /// Outbound prototype link
    pub view_prototype: LocalizedText,
    /// Modal close control
    pub close: LocalizedText,
}

/// Routed page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLabels {
    /// Back link in the floating nav
    pub back_home: LocalizedText,
    /// Previous project link
    pub previous: LocalizedText,
    /// Next project link
    pub next: LocalizedText,
    /// Footer call to action
    pub footer_title: LocalizedText,
    /// Scroll-to-top button
    pub scroll_top: LocalizedText,
}

/// Not-found view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundLabels {
    /// Heading
    pub title: LocalizedText,
    /// Explanation
    pub message: LocalizedText,
    /// Link back to the listing
    pub back: LocalizedText,
}

/// Designer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name per language
    pub name: LocalizedText,
    /// Contact email
    pub email: String,
    /// LinkedIn profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Portrait image path
    pub photo: String,
    /// Long biography
    pub bio: LocalizedText,
}

/// A skill bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (not translated)
    pub name: String,
    /// Proficiency 0-100
    pub level: u8,
}

/// A spoken language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    /// Language name per site language
    pub name: LocalizedText,
    /// Proficiency note (e.g., "N2", "Native")
    pub level: String,
}
