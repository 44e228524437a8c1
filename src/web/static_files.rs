//! Static file serving for the portfolio site.
//!
//! Stylesheets, scripts and images are embedded in the binary from the
//! `assets/` directory at compile time. The same set answers the view
//! layer's question of whether a local image exists, so a page never
//! links to an asset the server cannot return.

use axum::{
    body::Body,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use sha2::{Digest, Sha256};

use crate::views::AssetCatalog;

/// Embedded site assets.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.jpg"]
#[include = "*.jpeg"]
#[include = "*.webp"]
#[include = "*.ico"]
#[include = "*.woff2"]
#[include = "img/*"]
pub struct StaticAssets;

/// Asset catalog backed by the embedded files.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetCatalog for EmbeddedAssets {
    fn contains(&self, path: &str) -> bool {
        StaticAssets::get(path).is_some()
    }
}

/// Serves an embedded asset, or `None` when no asset matches `path`.
///
/// Responses carry a strong ETag derived from the content; a matching
/// `If-None-Match` yields `304 Not Modified`.
pub fn serve_asset(path: &str, headers: &HeaderMap) -> Option<Response> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }

    let content = StaticAssets::get(path)?;
    let etag = etag_for(content.data.as_ref());

    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.split(',').any(|tag| tag.trim() == etag));
    if not_modified {
        return Some(
            Response::builder()
                .status(StatusCode::NOT_MODIFIED)
                .header(header::ETAG, &etag)
                .body(Body::empty())
                .unwrap_or_else(|_| StatusCode::NOT_MODIFIED.into_response()),
        );
    }

    Some(file_response(path, content.data.as_ref(), &etag))
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8], etag: &str) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .header(header::ETAG, etag)
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Quoted SHA-256 hex digest of `content`.
fn etag_for(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("\"{hex}\"")
}

/// Returns appropriate Cache-Control header based on file path.
///
/// - Images and fonts: long cache (1 week)
/// - Stylesheets and scripts: revalidate with the ETag
fn cache_control_for_path(path: &str) -> &'static str {
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("css" | "js") => "no-cache",
        _ => "public, max-age=604800",
    }
}
