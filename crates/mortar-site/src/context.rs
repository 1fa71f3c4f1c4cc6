//! Per-site inputs shared by every page loader.

use serde::Serialize;

use mortar_core::assets::AssetNormalizer;
use mortar_core::config::{ContentDefaults, SiteConfig};

/// Defaults and asset resolution for one site instance.
///
/// Owned by whoever renders pages; nothing here is global.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Records the remote content is merged into.
    pub defaults: ContentDefaults,
    /// Resolves image references for the active endpoint.
    pub assets: AssetNormalizer,
}

impl SiteContext {
    /// Create a context from explicit parts.
    pub fn new(defaults: ContentDefaults, assets: AssetNormalizer) -> Self {
        Self { defaults, assets }
    }

    /// Context for the endpoint, defaults and placeholder in `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let endpoint = config.endpoint();
        Self::new(config.defaults.clone(), config.asset_normalizer(&endpoint))
    }
}

/// Where a loaded piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    /// The content service answered; its values were merged over the defaults.
    Remote,
    /// The content service failed; only defaults are shown.
    Defaults,
}

impl ContentOrigin {
    /// Whether the page is running on defaults only.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ContentOrigin::Defaults)
    }
}
