//! Image references and their placeholder fallback.

use serde::Serialize;

/// Answers whether a local asset path can be served.
pub trait AssetCatalog {
    /// Returns true if `path` (relative, no leading slash) is available.
    fn contains(&self, path: &str) -> bool;
}

/// Catalog with no local assets. Every local image renders as a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetCatalog for NoAssets {
    fn contains(&self, _path: &str) -> bool {
        false
    }
}

impl<const N: usize> AssetCatalog for [&str; N] {
    fn contains(&self, path: &str) -> bool {
        self.iter().any(|p| *p == path)
    }
}

/// Where an image comes from, decided at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    /// Embedded asset served by this site
    Local {
        /// Absolute URL path
        src: String,
        /// Alternative and placeholder text
        alt: String,
    },
    /// External URI passed through as authored
    Remote {
        /// Image URI
        src: String,
        /// Alternative and placeholder text
        alt: String,
    },
    /// Asset is missing: show text instead of a broken image
    Placeholder {
        /// Text shown in place of the image
        text: String,
    },
}

impl ImageSource {
    /// Resolves an authored image reference.
    ///
    /// References with a scheme (`https://...`) are remote and cannot be
    /// checked here; the rendered markup swaps them for the placeholder text
    /// if the browser fails to load them. Local paths missing from the
    /// catalog become placeholders right away.
    pub fn resolve(reference: &str, alt: &str, assets: &dyn AssetCatalog) -> Self {
        let reference = reference.trim();
        if reference.is_empty() {
            return Self::Placeholder {
                text: alt.to_string(),
            };
        }

        if reference.contains("://") || reference.starts_with("//") {
            return Self::Remote {
                src: reference.to_string(),
                alt: alt.to_string(),
            };
        }

        if assets.contains(reference.trim_start_matches('/')) {
            Self::Local {
                src: format!("/{}", reference.trim_start_matches('/')),
                alt: alt.to_string(),
            }
        } else {
            Self::Placeholder {
                text: alt.to_string(),
            }
        }
    }

    /// Text shown when the image is unavailable.
    #[must_use]
    pub fn fallback_text(&self) -> &str {
        match self {
            Self::Local { alt, .. } | Self::Remote { alt, .. } => alt,
            Self::Placeholder { text } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_passes_through() {
        let url = "https://placehold.co/1200x800/7c3aed/ffffff?text=RelaxON";
        let image = ImageSource::resolve(url, "RelaxON", &NoAssets);
        assert_eq!(
            image,
            ImageSource::Remote {
                src: url.to_string(),
                alt: "RelaxON".to_string()
            }
        );
    }

    #[test]
    fn test_missing_local_asset_becomes_placeholder() {
        let image = ImageSource::resolve("/vegwam-thumbnail.png", "VegWam", &NoAssets);
        assert_eq!(
            image,
            ImageSource::Placeholder {
                text: "VegWam".to_string()
            }
        );
    }

    #[test]
    fn test_present_local_asset() {
        let catalog = ["img/profile.jpg"];
        let image = ImageSource::resolve("img/profile.jpg", "Portrait", &catalog);
        assert_eq!(
            image,
            ImageSource::Local {
                src: "/img/profile.jpg".to_string(),
                alt: "Portrait".to_string()
            }
        );
    }

    #[test]
    fn test_empty_reference() {
        let image = ImageSource::resolve("  ", "Nothing", &NoAssets);
        assert_eq!(image.fallback_text(), "Nothing");
        assert!(matches!(image, ImageSource::Placeholder { .. }));
    }
}
