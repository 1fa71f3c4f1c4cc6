//! Landing page statistics.
//!
//! The landing page only needs `projectInfo` out of `GET /about`; the rest
//! of the payload is ignored.

use serde::Serialize;

use mortar_client::ContentSource;
use mortar_core::merge;
use mortar_core::types::ProjectStats;

use crate::context::ContentOrigin;

/// One rendered counter, e.g. `Happy Clients: 200+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLabel {
    /// Caption.
    pub label: &'static str,
    /// Value with the `+` suffix.
    pub value: String,
}

impl StatLabel {
    /// Labels for `stats` in display order.
    pub fn from_stats(stats: &ProjectStats) -> Vec<Self> {
        stats
            .labels()
            .into_iter()
            .map(|(label, value)| Self { label, value })
            .collect()
    }
}

/// Counters shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeStats {
    /// Merged counters.
    pub stats: ProjectStats,
    /// Whether remote content made it in.
    pub origin: ContentOrigin,
}

impl HomeStats {
    /// Rendered labels.
    pub fn labels(&self) -> Vec<StatLabel> {
        StatLabel::from_stats(&self.stats)
    }
}

/// Load the landing page counters, falling back to `defaults`.
pub async fn load_stats<S>(source: &S, defaults: ProjectStats) -> HomeStats
where
    S: ContentSource + ?Sized,
{
    match source.fetch_profile().await {
        Ok(about) => HomeStats {
            stats: merge(defaults, about.project_info.unwrap_or_default()),
            origin: ContentOrigin::Remote,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Statistics unavailable, rendering defaults");
            HomeStats {
                stats: defaults,
                origin: ContentOrigin::Defaults,
            }
        }
    }
}
