//! View models: content resolved for one language, ready to render.
//!
//! Everything here is a pure function of the content store, the UI state
//! and the asset catalog. Ordered sequences (tags, tools, process steps,
//! persona lists) are copied in authored order; optional sections stay
//! `None` or empty so renderers can omit them entirely.

use serde::{Deserialize, Serialize};

use super::assets::{AssetCatalog, ImageSource};
use crate::content::site::{CaseStudyLabels, Skill};
use crate::content::{
    resolve, ContentStore, DesignSystem, Insight, Language, Metric, Project, SiteContent,
};
use crate::state::{Route, UiState};

/// How gallery cards open a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailPresentation {
    /// Overlay on the home page (`/?open={id}`)
    Modal,
    /// Routed full page (`/project/{id}`)
    #[default]
    Page,
}

/// Builds a same-site link carrying the language.
#[must_use]
pub fn href(route: &Route, lang: Language) -> String {
    format!("{}?lang={}", route.path(), lang.code())
}

/// Home link that opens the overlay for a project.
#[must_use]
pub fn modal_href(id: &str, lang: Language) -> String {
    format!("/?lang={}&open={}", lang.code(), urlencoding::encode(id))
}

/// Figma embed URL for a prototype link.
#[must_use]
pub fn figma_embed_url(figma_url: &str) -> String {
    format!(
        "https://www.figma.com/embed?embed_host=share&url={}",
        urlencoding::encode(figma_url)
    )
}

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Language code
    pub code: Language,
    /// Native label
    pub label: &'static str,
    /// Flag emoji
    pub flag: &'static str,
    /// Link to the current page in this language
    pub href: String,
    /// Whether this is the current language
    pub selected: bool,
}

/// Language selector entries for the current page.
///
/// `link` builds the URL of the current page in a given language.
pub fn language_options(current: Language, link: impl Fn(Language) -> String) -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|lang| LanguageOption {
            code: lang,
            label: lang.label(),
            flag: lang.flag(),
            href: link(lang),
            selected: lang == current,
        })
        .collect()
}

/// In-page navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Fragment target (`work`, `about`, `contact`)
    pub anchor: &'static str,
    /// Label
    pub label: String,
}

/// Gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Project identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Category line
    pub category: String,
    /// Description
    pub description: String,
    /// Tags in authored order
    pub tags: Vec<String>,
    /// Thumbnail
    pub thumbnail: ImageSource,
    /// Accent color
    pub accent_color: String,
    /// Where the card leads
    pub href: String,
}

impl ProjectCard {
    /// Resolves a project into a card.
    pub fn new(
        project: &Project,
        lang: Language,
        presentation: DetailPresentation,
        assets: &dyn AssetCatalog,
    ) -> Self {
        let content = project.content_for(lang);
        let href = match presentation {
            DetailPresentation::Modal => modal_href(&project.id, lang),
            DetailPresentation::Page => href(&Route::Project(project.id.clone()), lang),
        };

        Self {
            id: project.id.clone(),
            title: content.title.clone(),
            category: content.category.clone(),
            description: content.description.clone(),
            tags: content.tags.clone(),
            thumbnail: ImageSource::resolve(&project.thumbnail, &content.title, assets),
            accent_color: project.accent_color.clone(),
            href,
        }
    }
}

/// Numbered process step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    /// 1-based position in the authored sequence
    pub number: usize,
    /// Step title
    pub title: String,
}

/// Persona card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaView {
    /// Section heading
    pub heading: String,
    /// Persona name
    pub name: String,
    /// Persona description
    pub description: String,
    /// Interview quote
    pub quote: Option<String>,
    /// Goals heading
    pub goals_heading: String,
    /// Goals in authored order
    pub goals: Vec<String>,
    /// Pain points heading
    pub frustrations_heading: String,
    /// Pain points in authored order
    pub frustrations: Vec<String>,
}

/// Embedded prototype section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrototypeView {
    /// Section heading
    pub heading: String,
    /// Hint under the frame
    pub hint: String,
    /// Outbound link label
    pub link_label: String,
    /// Prototype URI as authored
    pub url: String,
    /// Frame source wrapping `url`
    pub embed_url: String,
}

/// Design system section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSystemView {
    /// Section heading
    pub heading: String,
    /// Colors column heading
    pub colors_heading: String,
    /// Typography column heading
    pub typography_heading: String,
    /// Swatches and typefaces as authored
    pub system: DesignSystem,
}

/// Resolved case-study headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyHeadings {
    /// Role meta field
    pub role: String,
    /// Timeline meta field
    pub timeline: String,
    /// Tools meta field
    pub tools: String,
    /// Overview heading
    pub overview: String,
    /// Problem heading
    pub problem: String,
    /// Solution heading
    pub solution: String,
    /// Process heading
    pub process: String,
    /// Insights heading
    pub insights: String,
    /// Metrics heading
    pub metrics: String,
    /// Outcome heading
    pub outcome: String,
    /// Next steps heading
    pub next_steps: String,
    /// Brand heading
    pub brand: String,
    /// Close control
    pub close: String,
}

impl CaseStudyHeadings {
    fn resolve(labels: &CaseStudyLabels, lang: Language) -> Self {
        Self {
            role: resolve(&labels.role, lang).clone(),
            timeline: resolve(&labels.timeline, lang).clone(),
            tools: resolve(&labels.tools, lang).clone(),
            overview: resolve(&labels.overview, lang).clone(),
            problem: resolve(&labels.problem, lang).clone(),
            solution: resolve(&labels.solution, lang).clone(),
            process: resolve(&labels.process, lang).clone(),
            insights: resolve(&labels.insights, lang).clone(),
            metrics: resolve(&labels.metrics, lang).clone(),
            outcome: resolve(&labels.outcome, lang).clone(),
            next_steps: resolve(&labels.next_steps, lang).clone(),
            brand: resolve(&labels.brand, lang).clone(),
            close: resolve(&labels.close, lang).clone(),
        }
    }
}

/// Case study shown in the overlay or on the routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyView {
    /// Project identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Category line
    pub category: String,
    /// Description
    pub description: String,
    /// Tags in authored order
    pub tags: Vec<String>,
    /// Accent color
    pub accent_color: String,
    /// Hero image
    pub hero_image: ImageSource,
    /// Designer's role
    pub role: String,
    /// Duration
    pub timeline: String,
    /// Tools in authored order
    pub tools: Vec<String>,
    /// Overview paragraph
    pub overview: String,
    /// Problem statement
    pub problem: String,
    /// Solution statement
    pub solution: String,
    /// Numbered process steps
    pub process: Vec<ProcessStep>,
    /// Persona card
    pub persona: Option<PersonaView>,
    /// Insight cards
    pub insights: Vec<Insight>,
    /// Headline metrics
    pub metrics: Vec<Metric>,
    /// Outcome paragraph
    pub results: String,
    /// Follow-up work
    pub next_steps: Vec<String>,
    /// Brand concept note
    pub logo_concept: Option<String>,
    /// Prototype section
    pub prototype: Option<PrototypeView>,
    /// Design system section
    pub design_system: Option<DesignSystemView>,
    /// Section headings
    pub headings: CaseStudyHeadings,
}

impl CaseStudyView {
    /// Resolves a project's case study for one language.
    pub fn new(
        project: &Project,
        site: &SiteContent,
        lang: Language,
        assets: &dyn AssetCatalog,
    ) -> Self {
        let content = project.content_for(lang);
        let study = &content.case_study;
        let labels = &site.labels.case_study;

        let persona = study.persona.as_ref().map(|persona| PersonaView {
            heading: resolve(&labels.persona, lang).clone(),
            name: persona.name.clone(),
            description: persona.description.clone(),
            quote: persona.quote.clone(),
            goals_heading: resolve(&labels.goals, lang).clone(),
            goals: persona.goals.clone(),
            frustrations_heading: resolve(&labels.frustrations, lang).clone(),
            frustrations: persona.frustrations.clone(),
        });

        let prototype = project.figma_url.as_ref().map(|url| PrototypeView {
            heading: resolve(&labels.prototype, lang).clone(),
            hint: resolve(&labels.prototype_hint, lang).clone(),
            link_label: resolve(&labels.view_prototype, lang).clone(),
            url: url.clone(),
            embed_url: figma_embed_url(url),
        });

        let design_system = project
            .design_system
            .as_ref()
            .map(|system| DesignSystemView {
                heading: resolve(&labels.design_system, lang).clone(),
                colors_heading: resolve(&labels.colors, lang).clone(),
                typography_heading: resolve(&labels.typography, lang).clone(),
                system: system.clone(),
            });

        Self {
            id: project.id.clone(),
            title: content.title.clone(),
            category: content.category.clone(),
            description: content.description.clone(),
            tags: content.tags.clone(),
            accent_color: project.accent_color.clone(),
            hero_image: ImageSource::resolve(&project.thumbnail, &content.title, assets),
            role: study.role.clone(),
            timeline: study.timeline.clone(),
            tools: study.tools.clone(),
            overview: study.overview.clone(),
            problem: study.problem.clone(),
            solution: study.solution.clone(),
            process: study
                .process
                .iter()
                .enumerate()
                .map(|(idx, title)| ProcessStep {
                    number: idx + 1,
                    title: title.clone(),
                })
                .collect(),
            persona,
            insights: study.insights.clone(),
            metrics: study.metrics.clone(),
            results: study.results.clone(),
            next_steps: study.next_steps.clone(),
            logo_concept: study.logo_concept.clone(),
            prototype,
            design_system,
            headings: CaseStudyHeadings::resolve(labels, lang),
        }
    }
}

/// Hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    /// Designer's name
    pub name: String,
    /// Availability badge
    pub status: String,
    /// First headline line
    pub title_prefix: String,
    /// Second headline line
    pub title_suffix: String,
    /// Introduction
    pub intro: String,
    /// Call to action
    pub cta: String,
    /// Specialty badge
    pub specialty: String,
    /// Portrait
    pub photo: ImageSource,
}

/// Spoken language row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpokenLanguageView {
    /// Language name
    pub name: String,
    /// Proficiency note
    pub level: String,
}

/// About grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    /// Section heading
    pub heading: String,
    /// Biography
    pub bio: String,
    /// Experience tile heading
    pub experience_title: String,
    /// Experience headline
    pub experience_role: String,
    /// Experience detail
    pub experience_description: String,
    /// Skills tile heading
    pub skills_heading: String,
    /// Skill bars
    pub skills: Vec<Skill>,
    /// Languages tile heading
    pub languages_heading: String,
    /// Spoken languages
    pub languages: Vec<SpokenLanguageView>,
    /// Interests tile heading
    pub interests_heading: String,
    /// Interests
    pub interests: Vec<String>,
}

/// Contact footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    /// Footer heading
    pub heading: String,
    /// Contact email
    pub email: String,
    /// LinkedIn URL
    pub linkedin: Option<String>,
    /// Copyright line
    pub copyright: String,
}

impl ContactView {
    fn new(site: &SiteContent, heading: String) -> Self {
        Self {
            heading,
            email: site.profile.email.clone(),
            linkedin: site.profile.linkedin.clone(),
            copyright: site.copyright.clone(),
        }
    }
}

/// Overlay shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    /// Case study content
    pub case_study: CaseStudyView,
    /// Link that closes the overlay
    pub close_href: String,
}

/// Home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Page language
    pub language: Language,
    /// Language selector
    pub languages: Vec<LanguageOption>,
    /// In-page navigation
    pub nav: Vec<NavItem>,
    /// Hero block
    pub hero: HeroView,
    /// Gallery heading
    pub work_heading: String,
    /// Gallery cards in authored order
    pub projects: Vec<ProjectCard>,
    /// About grid
    pub about: AboutView,
    /// Contact footer
    pub contact: ContactView,
    /// Open overlay, if any
    pub modal: Option<ModalView>,
    /// Whether the page behind the overlay may scroll
    pub scrollable: bool,
}

impl HomeView {
    /// Resolves the home page for the given state.
    pub fn new(
        store: &ContentStore,
        state: &UiState,
        presentation: DetailPresentation,
        assets: &dyn AssetCatalog,
    ) -> Self {
        let site = store.site();
        let labels = &site.labels;
        let lang = state.language();
        let open = state.detail().open_project();

        let languages = language_options(lang, |option| match open {
            Some(id) => modal_href(id, option),
            None => href(&Route::Home, option),
        });

        let nav = vec![
            NavItem {
                anchor: "work",
                label: resolve(&labels.nav.work, lang).clone(),
            },
            NavItem {
                anchor: "about",
                label: resolve(&labels.nav.about, lang).clone(),
            },
            NavItem {
                anchor: "contact",
                label: resolve(&labels.nav.contact, lang).clone(),
            },
        ];

        let name = resolve(&site.profile.name, lang).clone();
        let hero = HeroView {
            photo: ImageSource::resolve(&site.profile.photo, &name, assets),
            name,
            status: resolve(&labels.hero.status, lang).clone(),
            title_prefix: resolve(&labels.hero.title_prefix, lang).clone(),
            title_suffix: resolve(&labels.hero.title_suffix, lang).clone(),
            intro: resolve(&labels.hero.intro, lang).clone(),
            cta: resolve(&labels.hero.cta, lang).clone(),
            specialty: resolve(&labels.hero.specialty, lang).clone(),
        };

        let projects = store
            .registry()
            .list()
            .iter()
            .map(|project| ProjectCard::new(project, lang, presentation, assets))
            .collect();

        let about = AboutView {
            heading: resolve(&labels.sections.about, lang).clone(),
            bio: resolve(&site.profile.bio, lang).clone(),
            experience_title: resolve(&labels.experience.title, lang).clone(),
            experience_role: resolve(&labels.experience.role, lang).clone(),
            experience_description: resolve(&labels.experience.description, lang).clone(),
            skills_heading: resolve(&labels.sections.skills, lang).clone(),
            skills: site.skills.clone(),
            languages_heading: resolve(&labels.sections.languages, lang).clone(),
            languages: site
                .spoken_languages
                .iter()
                .map(|spoken| SpokenLanguageView {
                    name: resolve(&spoken.name, lang).clone(),
                    level: spoken.level.clone(),
                })
                .collect(),
            interests_heading: resolve(&labels.sections.interests, lang).clone(),
            interests: site
                .interests
                .iter()
                .map(|interest| resolve(interest, lang).clone())
                .collect(),
        };

        let modal = open
            .and_then(|id| store.registry().find(id))
            .map(|project| ModalView {
                case_study: CaseStudyView::new(project, site, lang, assets),
                close_href: href(&Route::Home, lang),
            });

        Self {
            language: lang,
            languages,
            nav,
            hero,
            work_heading: resolve(&labels.sections.work, lang).clone(),
            projects,
            about,
            contact: ContactView::new(site, resolve(&labels.sections.contact, lang).clone()),
            modal,
            scrollable: state.viewport().is_scrollable(),
        }
    }
}

/// Link to another project on the routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    /// Direction label ("Previous", "Next")
    pub label: String,
    /// Project title
    pub title: String,
    /// Page link
    pub href: String,
}

/// Routed case-study page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPageView {
    /// Page language
    pub language: Language,
    /// Language selector
    pub languages: Vec<LanguageOption>,
    /// Back link label
    pub back_label: String,
    /// Back link target
    pub home_href: String,
    /// Case study content
    pub case_study: CaseStudyView,
    /// Previous project
    pub previous: Option<ProjectLink>,
    /// Next project
    pub next: Option<ProjectLink>,
    /// Scroll-to-top label
    pub scroll_top: String,
    /// Footer
    pub contact: ContactView,
}

impl ProjectPageView {
    /// Resolves the routed page for a project.
    pub fn new(
        store: &ContentStore,
        project: &Project,
        lang: Language,
        assets: &dyn AssetCatalog,
    ) -> Self {
        let site = store.site();
        let labels = &site.labels.page;
        let route = Route::Project(project.id.clone());

        let link = |target: &Project, label: &crate::content::LocalizedText| ProjectLink {
            label: resolve(label, lang).clone(),
            title: target.content_for(lang).title.clone(),
            href: href(&Route::Project(target.id.clone()), lang),
        };

        let (previous, next) = store
            .registry()
            .neighbors(&project.id)
            .map(|n| {
                (
                    n.previous.map(|p| link(p, &labels.previous)),
                    n.next.map(|p| link(p, &labels.next)),
                )
            })
            .unwrap_or_default();

        Self {
            language: lang,
            languages: language_options(lang, |option| href(&route, option)),
            back_label: resolve(&labels.back_home, lang).clone(),
            home_href: href(&Route::Home, lang),
            case_study: CaseStudyView::new(project, site, lang, assets),
            previous,
            next,
            scroll_top: resolve(&labels.scroll_top, lang).clone(),
            contact: ContactView::new(site, resolve(&labels.footer_title, lang).clone()),
        }
    }
}

/// Not-found page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// Page language
    pub language: Language,
    /// Language selector
    pub languages: Vec<LanguageOption>,
    /// Heading
    pub title: String,
    /// Explanation
    pub message: String,
    /// Link label back to the listing
    pub back_label: String,
    /// Link back to the listing
    pub back_href: String,
}

impl NotFoundView {
    /// Resolves the not-found page. The language selector links back to
    /// `route`, the route that was requested (home when the path named none).
    pub fn new(site: &SiteContent, lang: Language, route: &Route) -> Self {
        let labels = &site.labels.not_found;
        Self {
            language: lang,
            languages: language_options(lang, |option| href(route, option)),
            title: resolve(&labels.title, lang).clone(),
            message: resolve(&labels.message, lang).clone(),
            back_label: resolve(&labels.back, lang).clone(),
            back_href: format!("{}#work", href(&Route::Home, lang)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::assets::NoAssets;

    fn store() -> ContentStore {
        ContentStore::load().unwrap()
    }

    #[test]
    fn test_cards_follow_registry_order() {
        let store = store();
        let state = UiState::new(Language::En);
        let view = HomeView::new(&store, &state, DetailPresentation::Page, &NoAssets);

        let ids: Vec<&str> = view.projects.iter().map(|c| c.id.as_str()).collect();
        let expected: Vec<&str> = store.registry().list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_card_links_follow_presentation() {
        let store = store();
        let state = UiState::new(Language::Ua);

        let page = HomeView::new(&store, &state, DetailPresentation::Page, &NoAssets);
        assert_eq!(page.projects[0].href, "/project/vegwam?lang=ua");

        let modal = HomeView::new(&store, &state, DetailPresentation::Modal, &NoAssets);
        assert_eq!(modal.projects[0].href, "/?lang=ua&open=vegwam");
    }

    #[test]
    fn test_process_steps_numbered_in_order() {
        let store = store();
        let project = store.registry().find("navitime").unwrap();
        let view = CaseStudyView::new(project, store.site(), Language::En, &NoAssets);

        let steps: Vec<(usize, &str)> = view
            .process
            .iter()
            .map(|s| (s.number, s.title.as_str()))
            .collect();
        assert_eq!(
            steps,
            [(1, "Heuristic Analysis"), (2, "Wireframing"), (3, "Prototyping")]
        );
    }

    #[test]
    fn test_optional_sections_absent() {
        let store = store();
        let project = store.registry().find("relaxon").unwrap();
        let view = CaseStudyView::new(project, store.site(), Language::Jp, &NoAssets);

        assert!(view.prototype.is_none());
        assert!(view.design_system.is_none());
        assert!(view.persona.is_none());
        assert!(view.insights.is_empty());
    }

    #[test]
    fn test_prototype_embed_wraps_original_url() {
        let store = store();
        let project = store.registry().find("vegwam").unwrap();
        let view = CaseStudyView::new(project, store.site(), Language::En, &NoAssets);

        let prototype = view.prototype.unwrap();
        assert_eq!(Some(&prototype.url), project.figma_url.as_ref());
        assert!(prototype
            .embed_url
            .starts_with("https://www.figma.com/embed?embed_host=share&url=https%3A%2F%2Fwww.figma.com"));
    }

    #[test]
    fn test_modal_only_when_open() {
        let store = store();
        let mut state = UiState::new(Language::En);

        let closed = HomeView::new(&store, &state, DetailPresentation::Modal, &NoAssets);
        assert!(closed.modal.is_none());
        assert!(closed.scrollable);

        state.open_project(store.registry(), "navitime").unwrap();
        let open = HomeView::new(&store, &state, DetailPresentation::Modal, &NoAssets);
        let modal = open.modal.unwrap();
        assert_eq!(modal.case_study.title, "Bicycle NAVITIME");
        assert_eq!(modal.close_href, "/?lang=en");
        assert!(!open.scrollable);
        assert!(open
            .languages
            .iter()
            .any(|o| o.href == "/?lang=jp&open=navitime"));
    }

    #[test]
    fn test_neighbors_on_project_page() {
        let store = store();
        let first = store.registry().find("vegwam").unwrap();
        let view = ProjectPageView::new(&store, first, Language::En, &NoAssets);

        assert!(view.previous.is_none());
        let next = view.next.unwrap();
        assert_eq!(next.title, "Bicycle NAVITIME");
        assert_eq!(next.href, "/project/navitime?lang=en");
        assert_eq!(next.label, "Next");
    }

    #[test]
    fn test_language_round_trip_is_stable() {
        let store = store();
        let project = store.registry().find("vegwam").unwrap();

        let en = CaseStudyView::new(project, store.site(), Language::En, &NoAssets);
        let jp = CaseStudyView::new(project, store.site(), Language::Jp, &NoAssets);
        let en_again = CaseStudyView::new(project, store.site(), Language::En, &NoAssets);

        assert_ne!(en, jp);
        assert_eq!(en, en_again);
    }

    #[test]
    fn test_not_found_links_back_to_listing() {
        let store = store();
        let view = NotFoundView::new(store.site(), Language::En, &Route::Project("nope".into()));
        assert_eq!(view.back_href, "/?lang=en#work");
        assert_eq!(view.title, "Project not found");
        assert_eq!(view.languages[0].href, "/project/nope?lang=jp");
    }

    #[test]
    fn test_not_found_selector_escapes_project_id() {
        let store = store();
        let route = Route::Project("/evil.example?x".into());
        let view = NotFoundView::new(store.site(), Language::En, &route);
        for option in &view.languages {
            assert!(option.href.starts_with("/project/%2Fevil.example%3Fx?lang="));
        }
    }
}
