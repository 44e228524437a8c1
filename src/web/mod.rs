//! HTTP front end for the portfolio.
//!
//! Pages are rendered on the server from the embedded content; a small
//! read-only JSON API exposes the same resolved content.
//!
//! # Endpoints
//!
//! - `GET /` - Home page (`?lang=`, `?open={id}` for the overlay)
//! - `GET /project/{id}` - Case-study page (`?lang=`)
//! - `GET /health` - Health check
//! - `GET /api/languages` - Supported languages
//! - `GET /api/projects` - Project cards (`?lang=`)
//! - `GET /api/projects/{id}` - Resolved case study (`?lang=`)
//!
//! Any other path serves an embedded asset or the not-found page.

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::branding;
use crate::config::Config;
use crate::content::{ContentStore, Language};
use crate::state::{Route, UiState};
use crate::views::{
    render_home, render_not_found, render_project_page, CaseStudyView, DetailPresentation,
    HomeView, NotFoundView, ProjectCard, ProjectPageView,
};
use static_files::EmbeddedAssets;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Validated content (immutable after load)
    content: Arc<ContentStore>,
    /// When the server started
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Loads the embedded content and creates the application state.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let content = ContentStore::load()?;
        Ok(Self::with_content(config, content))
    }

    /// Creates the application state around already loaded content.
    #[must_use]
    pub fn with_content(config: Config, content: ContentStore) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            started_at: Utc::now(),
        }
    }

    /// Requested language, or the configured default when absent or
    /// unsupported.
    fn language(&self, requested: Option<&str>) -> Language {
        requested
            .and_then(Language::from_code)
            .unwrap_or(self.config.site.default_language)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters accepted by pages and the API.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Language code
    pub lang: Option<String>,
    /// Project to show in the overlay (home page only)
    pub open: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
    /// Server start time (RFC 3339).
    pub started_at: DateTime<Utc>,
}

/// Language entry for the API.
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    /// Language code
    pub code: Language,
    /// Native label
    pub label: &'static str,
    /// Flag emoji
    pub flag: &'static str,
    /// Whether this is the configured default
    pub default: bool,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type PageResponse = (StatusCode, Html<String>);

/// Query parameters, or defaults when the query string does not parse
/// (e.g. a repeated `lang`).
fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> PageQuery {
    match query {
        Ok(Query(query)) => query,
        Err(err) => {
            debug!("Ignoring query string: {err}");
            PageQuery::default()
        }
    }
}

// ============================================================================
// Page rendering
// ============================================================================

fn not_found_page(state: &AppState, lang: Language, route: &Route) -> PageResponse {
    let view = NotFoundView::new(state.content.site(), lang, route);
    (StatusCode::NOT_FOUND, Html(render_not_found(&view)))
}

fn home_page(state: &AppState, query: &PageQuery) -> PageResponse {
    let lang = state.language(query.lang.as_deref());
    let presentation = state.config.site.detail_presentation;
    let mut ui = UiState::new(lang);

    // The overlay only exists in modal presentation
    let open = query.open.as_deref().filter(|id| !id.is_empty());
    if let Some(id) = open.filter(|_| presentation == DetailPresentation::Modal) {
        if let Err(err) = ui.open_project(state.content.registry(), id) {
            debug!("Cannot open overlay: {err}");
            return not_found_page(state, lang, &Route::Home);
        }
    }

    let view = HomeView::new(&state.content, &ui, presentation, &EmbeddedAssets);
    (StatusCode::OK, Html(render_home(&view)))
}

fn project_page(state: &AppState, id: &str, query: &PageQuery) -> PageResponse {
    let lang = state.language(query.lang.as_deref());
    match state.content.registry().find(id) {
        Some(project) => {
            let view = ProjectPageView::new(&state.content, project, lang, &EmbeddedAssets);
            (StatusCode::OK, Html(render_project_page(&view)))
        }
        None => {
            debug!("Unknown project '{id}'");
            not_found_page(state, lang, &Route::Project(id.to_string()))
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Home page.
async fn home(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> PageResponse {
    home_page(&state, &page_query(query))
}

/// GET /project/{id} - Routed case-study page.
async fn project(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> PageResponse {
    let query = page_query(query);
    match id {
        Ok(Path(id)) => project_page(&state, &id, &query),
        Err(err) => {
            debug!("Unreadable project id: {err}");
            let lang = state.language(query.lang.as_deref());
            not_found_page(&state, lang, &Route::Home)
        }
    }
}

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: branding::VERSION.to_string(),
        started_at: state.started_at,
    })
}

/// GET /api/languages - Supported languages in selector order.
async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    let default = state.config.site.default_language;
    Json(
        Language::ALL
            .into_iter()
            .map(|lang| LanguageInfo {
                code: lang,
                label: lang.label(),
                flag: lang.flag(),
                default: lang == default,
            })
            .collect(),
    )
}

/// GET /api/projects - Project cards in authored order.
async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Json<Vec<ProjectCard>> {
    let query = page_query(query);
    let lang = state.language(query.lang.as_deref());
    let presentation = state.config.site.detail_presentation;
    Json(
        state
            .content
            .registry()
            .list()
            .iter()
            .map(|project| ProjectCard::new(project, lang, presentation, &EmbeddedAssets))
            .collect(),
    )
}

/// GET /api/projects/{id} - Resolved case study.
async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CaseStudyView>, (StatusCode, Json<ApiError>)> {
    let lang = state.language(page_query(query).lang.as_deref());
    let Path(id) = id.map_err(|err| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details("Project not found", err.body_text())),
        )
    })?;
    let project = state.content.registry().find(&id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::with_details(
                "Project not found",
                format!("No project with id '{id}'"),
            )),
        )
    })?;

    Ok(Json(CaseStudyView::new(
        project,
        state.content.site(),
        lang,
        &EmbeddedAssets,
    )))
}

/// Everything else: embedded assets, trailing-slash routes, or not found.
async fn fallback(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let query = page_query(query);
    let path = uri.path();
    if let Some(response) = static_files::serve_asset(path, &headers) {
        return response;
    }

    match Route::parse(path) {
        Some(Route::Home) => home_page(&state, &query).into_response(),
        Some(Route::Project(id)) => project_page(&state, &id, &query).into_response(),
        None => {
            let lang = state.language(query.lang.as_deref());
            not_found_page(&state, lang, &Route::Home).into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Everything is read-only, so any origin may read the API
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(home))
        .route("/project/{id}", get(project))
        .route("/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// Loads the content first; invalid content stops startup.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let warnings = state.content.warnings().len();
    if warnings > 0 {
        info!("Content loaded with {warnings} warning(s); run `folio check` for details");
    }
    info!(
        "Serving {} projects (default language: {}, detail: {:?})",
        state.content.registry().len(),
        state.config.site.default_language,
        state.config.site.detail_presentation
    );

    let app = create_router(state);

    info!("Starting portfolio server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(config: Config) -> AppState {
        AppState::new(config).unwrap()
    }

    fn modal_state() -> AppState {
        let mut config = Config::new();
        config.site.detail_presentation = DetailPresentation::Modal;
        state(config)
    }

    #[test]
    fn test_language_falls_back_to_default() {
        let state = state(Config::new());
        assert_eq!(state.language(Some("en")), Language::En);
        assert_eq!(state.language(Some("xx")), Language::Jp);
        assert_eq!(state.language(Some("EN")), Language::Jp);
        assert_eq!(state.language(None), Language::Jp);
    }

    #[test]
    fn test_configured_default_language() {
        let mut config = Config::new();
        config.site.default_language = Language::Ua;
        let state = state(config);
        assert_eq!(state.language(Some("")), Language::Ua);
    }

    #[test]
    fn test_home_with_unknown_overlay_is_not_found() {
        let state = modal_state();
        let query = PageQuery {
            lang: Some("en".to_string()),
            open: Some("nope".to_string()),
        };
        let (status, Html(body)) = home_page(&state, &query);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Project not found"));
    }

    #[test]
    fn test_home_with_overlay_is_locked() {
        let state = modal_state();
        let query = PageQuery {
            lang: Some("en".to_string()),
            open: Some("relaxon".to_string()),
        };
        let (status, Html(body)) = home_page(&state, &query);
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<body class=\"scroll-locked\">"));
        assert!(body.contains("href=\"/?lang=en&amp;open=relaxon\""));
    }

    #[test]
    fn test_empty_open_is_ignored() {
        let state = state(Config::new());
        let query = PageQuery {
            lang: None,
            open: Some(String::new()),
        };
        let (status, Html(body)) = home_page(&state, &query);
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<body>\n"));
    }

    #[test]
    fn test_page_presentation_ignores_open() {
        let state = state(Config::new());
        for id in ["relaxon", "nope"] {
            let query = PageQuery {
                lang: Some("en".to_string()),
                open: Some(id.to_string()),
            };
            let (status, Html(body)) = home_page(&state, &query);
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("<body>\n"));
            assert!(!body.contains("modal-backdrop"));
        }
    }

    #[test]
    fn test_rejected_query_uses_defaults() {
        let parsed = Query::<PageQuery>::try_from_uri(&Uri::from_static("/?lang=en&lang=jp"));
        assert!(parsed.is_err());
        let query = page_query(parsed);
        assert!(query.lang.is_none());
        assert!(query.open.is_none());
    }

    #[test]
    fn test_project_page_unknown_id() {
        let state = state(Config::new());
        let (status, _) = project_page(&state, "VegWam", &PageQuery::default());
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
