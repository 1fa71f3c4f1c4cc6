//! About page: organization, owner and headline numbers.

use serde::Serialize;

use mortar_client::ContentSource;
use mortar_core::assets::{AssetNormalizer, AssetUrl};
use mortar_core::merge;
use mortar_core::types::ProfileRecord;

use crate::context::{ContentOrigin, SiteContext};
use crate::home::StatLabel;

/// Everything the about page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutPage {
    /// Merged profile.
    pub profile: ProfileRecord,
    /// Organization picture.
    pub organization_image: AssetUrl,
    /// Owner portrait.
    pub owner_image: AssetUrl,
    /// Headline counters, in display order.
    pub stats: Vec<StatLabel>,
    /// Whether remote content made it in.
    pub origin: ContentOrigin,
}

impl AboutPage {
    /// Fetch `/about` and merge it into the configured profile.
    ///
    /// Never fails. Any fetch or decode problem renders the defaults.
    pub async fn load<S>(source: &S, ctx: &SiteContext) -> Self
    where
        S: ContentSource + ?Sized,
    {
        let defaults = ctx.defaults.profile.clone();
        match source.fetch_profile().await {
            Ok(remote) => Self::build(merge(defaults, remote), ContentOrigin::Remote, &ctx.assets),
            Err(e) => {
                tracing::warn!(error = %e, "Profile unavailable, rendering defaults");
                Self::build(defaults, ContentOrigin::Defaults, &ctx.assets)
            }
        }
    }

    /// Page for an already merged profile.
    pub fn build(profile: ProfileRecord, origin: ContentOrigin, assets: &AssetNormalizer) -> Self {
        let organization_image = assets.resolve(Some(profile.organization.image.as_str()));
        let owner_image = assets.resolve(Some(profile.owner.image.as_str()));
        let stats = StatLabel::from_stats(&profile.stats);
        Self {
            profile,
            organization_image,
            owner_image,
            stats,
            origin,
        }
    }
}
