//! Multilingual portfolio site.
//!
//! This library provides the content model (projects and site labels in
//! English, Japanese and Ukrainian), the navigation and language state,
//! the view layer that renders pages from both, and the HTTP server that
//! ties them together.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod content;
pub mod state;
pub mod views;

#[cfg(feature = "web")]
pub mod web;
