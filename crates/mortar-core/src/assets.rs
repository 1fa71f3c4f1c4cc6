//! Asset URL normalization.
//!
//! Image references from the content service come in several flavours:
//! absolute URLs, root-relative paths (`/uploads/a.jpg`), bare relative
//! paths (`uploads/a.jpg`), and paths damaged by the backend. Everything is
//! turned into one directly loadable URL here.

use serde::Serialize;

use crate::endpoint::{Endpoint, join_url};

/// Hero image bundled with the site, shown when a reference is missing or
/// broken.
pub const DEFAULT_PLACEHOLDER: &str = "/assets/services-hero.jpg";

/// Path segment produced when the backend interpolates an undefined field
/// into an upload path (`/uploads/undefined/a.jpg`).
// TODO: drop once the content service stops writing `undefined` into stored image paths.
const MALFORMED_SEGMENT: &str = "undefined";

/// A normalized image source plus the URL to switch to if it fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetUrl {
    src: String,
    fallback: String,
}

impl AssetUrl {
    /// URL to load first.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// URL to load after an image error.
    pub fn on_error(&self) -> &str {
        &self.fallback
    }

    /// Whether `src` already is the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.src == self.fallback
    }
}

/// Resolves asset references against the content service's asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNormalizer {
    asset_root: String,
    placeholder: String,
}

impl AssetNormalizer {
    /// Create a normalizer for an asset root and placeholder URL.
    pub fn new(asset_root: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            asset_root: asset_root.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Normalizer for a resolved endpoint.
    pub fn for_endpoint(endpoint: &Endpoint, placeholder: impl Into<String>) -> Self {
        Self::new(endpoint.asset_root.clone(), placeholder)
    }

    /// The placeholder URL.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Map a reference to a loadable URL. Never returns an empty string.
    ///
    /// 1. missing or blank → placeholder
    /// 2. `undefined` path segments are removed
    /// 3. `http://` / `https://` URLs are returned as they are
    /// 4. anything else is joined onto the asset root
    pub fn normalize(&self, reference: Option<&str>) -> String {
        let Some(raw) = reference.map(str::trim).filter(|r| !r.is_empty()) else {
            return self.placeholder.clone();
        };

        let cleaned = strip_malformed_segments(raw);
        if cleaned.is_empty() || cleaned == "/" {
            return self.placeholder.clone();
        }

        if has_http_scheme(&cleaned) {
            return cleaned;
        }

        join_url(&self.asset_root, &cleaned)
    }

    /// Normalize and attach the placeholder as the load-error fallback.
    pub fn resolve(&self, reference: Option<&str>) -> AssetUrl {
        AssetUrl {
            src: self.normalize(reference),
            fallback: self.placeholder.clone(),
        }
    }
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn strip_malformed_segments(path: &str) -> String {
    if !path.split('/').any(|segment| segment == MALFORMED_SEGMENT) {
        return path.to_string();
    }

    log::debug!("Stripping `{MALFORMED_SEGMENT}` segment from asset path {path:?}");
    path.split('/')
        .filter(|segment| *segment != MALFORMED_SEGMENT)
        .collect::<Vec<_>>()
        .join("/")
}
