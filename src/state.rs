//! Navigation and language state for one page view.
//!
//! The site keeps exactly two pieces of UI state: the selected language and
//! which project detail (if any) is open as an overlay. Both live in a
//! [`UiState`] value that is built from a request, mutated only through the
//! methods below and then handed to the view layer. Nothing is persisted.
//!
//! While an overlay is open the page behind it must not scroll. The lock is
//! a [`ScrollLock`] guard owned by [`DetailState::Open`], so every way of
//! leaving the open state (closing, navigating, replacing or dropping the
//! state) releases it.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::content::{Language, ProjectRegistry};

/// Misuse of the detail state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No project with this identifier exists.
    #[error("Unknown project '{0}'")]
    UnknownProject(String),
    /// A detail view is already open; it must be closed first.
    #[error("Project '{0}' is already open; close it before opening another")]
    AlreadyOpen(String),
}

/// Logical routes of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Home page: hero, gallery, about, contact
    Home,
    /// Routed case-study page for a project identifier
    Project(String),
}

impl Route {
    /// Maps a request path to a route.
    ///
    /// `/project/{id}` yields the percent-decoded identifier without
    /// checking it exists; resolving it is the registry's job. Anything else
    /// that is not the root path is `None`, as is an id that does not
    /// decode to UTF-8.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }

        let id = trimmed.strip_prefix("/project/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        let id = urlencoding::decode(id).ok()?;
        Some(Self::Project(id.into_owned()))
    }

    /// Path for this route, with the id percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Project(id) => format!("/project/{}", urlencoding::encode(id)),
        }
    }
}

/// Page scroll state shared with the locks it hands out.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    locks: Rc<Cell<usize>>,
}

impl Viewport {
    /// Creates a scrollable viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no lock is held.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.locks.get() == 0
    }

    /// Suspends page scrolling until the returned guard is dropped.
    #[must_use]
    pub fn lock(&self) -> ScrollLock {
        self.locks.set(self.locks.get() + 1);
        ScrollLock {
            locks: Rc::clone(&self.locks),
        }
    }
}

/// Guard that keeps the page from scrolling while it is alive.
#[derive(Debug)]
pub struct ScrollLock {
    locks: Rc<Cell<usize>>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locks.set(self.locks.get().saturating_sub(1));
    }
}

/// Overlay detail view state.
#[derive(Debug, Default)]
pub enum DetailState {
    /// No overlay
    #[default]
    Closed,
    /// Overlay showing a project; holds the scroll lock
    Open {
        /// Identifier of the open project
        project_id: String,
        /// Released when this state is left
        lock: ScrollLock,
    },
}

impl DetailState {
    /// Identifier of the open project, if any.
    #[must_use]
    pub fn open_project(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { project_id, .. } => Some(project_id),
        }
    }
}

/// UI state for rendering one page.
#[derive(Debug)]
pub struct UiState {
    language: Language,
    detail: DetailState,
    viewport: Viewport,
}

impl UiState {
    /// Starts closed and scrollable in `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            detail: DetailState::Closed,
            viewport: Viewport::new(),
        }
    }

    /// Selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Overlay state.
    #[must_use]
    pub const fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Page scroll state.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switches language. An open overlay stays open and keeps its lock.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Opens the overlay for a project.
    ///
    /// Only valid from the closed state; switching projects means closing
    /// first.
    pub fn open_project(&mut self, registry: &ProjectRegistry, id: &str) -> Result<(), StateError> {
        if let Some(current) = self.detail.open_project() {
            return Err(StateError::AlreadyOpen(current.to_string()));
        }
        if !registry.contains(id) {
            return Err(StateError::UnknownProject(id.to_string()));
        }

        self.detail = DetailState::Open {
            project_id: id.to_string(),
            lock: self.viewport.lock(),
        };
        Ok(())
    }

    /// Closes the overlay. Closing an already closed overlay does nothing.
    pub fn close_project(&mut self) {
        self.detail = DetailState::Closed;
    }

    /// Follows a route change. Leaving the current page closes the overlay.
    pub fn navigate(&mut self, _route: &Route) {
        self.close_project();
    }
}
