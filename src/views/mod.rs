//! View layer: resolves content for the current UI state and renders pages.
//!
//! [`model`] turns content plus [`crate::state::UiState`] into plain view
//! models; [`pages`] turns those into HTML. Both detail presentations share
//! one [`model::CaseStudyView`].

pub mod assets;
pub mod html;
pub mod model;
pub mod pages;

pub use assets::{AssetCatalog, ImageSource, NoAssets};
pub use model::{
    CaseStudyView, DetailPresentation, HomeView, LanguageOption, NotFoundView, ProjectCard,
    ProjectPageView,
};
pub use pages::{render_home, render_not_found, render_project_page};
