//! Company and owner profile served by `GET /about`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// The complete, always-renderable profile.
///
/// On the wire the fields are grouped into `constructionInfo`, `ownerInfo`
/// and `projectInfo`; the same grouping is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    /// The construction company itself.
    #[serde(rename = "constructionInfo")]
    pub organization: OrganizationInfo,

    /// Founder / managing director.
    #[serde(rename = "ownerInfo")]
    pub owner: OwnerInfo,

    /// Headline statistics.
    #[serde(rename = "projectInfo")]
    pub stats: ProjectStats,
}

/// Company name, blurb and picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationInfo {
    /// Company name.
    pub name: String,
    /// Company description.
    pub description: String,
    /// Asset reference; empty means "use the placeholder".
    pub image: String,
}

impl Default for OrganizationInfo {
    fn default() -> Self {
        Self {
            name: "RK Constructions".to_string(),
            description: "We deliver high-quality residential, commercial, and infrastructure \
                          projects through precise planning, premium materials, and professional \
                          execution."
                .to_string(),
            image: String::new(),
        }
    }
}

/// Owner details. Contact fields are only rendered when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerInfo {
    /// Owner name or title.
    pub name: String,
    /// Owner biography.
    pub description: String,
    /// Asset reference; empty means "use the placeholder".
    pub image: String,
    /// Direct phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Direct email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Office or city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Default for OwnerInfo {
    fn default() -> Self {
        Self {
            name: "Founder & Managing Director".to_string(),
            description: "A construction professional committed to quality, safety, and \
                          long-term client satisfaction through ethical leadership and \
                          innovation."
                .to_string(),
            image: String::new(),
            phone: None,
            email: None,
            location: None,
        }
    }
}

/// Headline counters shown on the home and about pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectStats {
    /// Number of completed projects.
    pub completed_projects: u32,
    /// Number of happy clients.
    pub happy_clients: u32,
    /// Years in business.
    pub experience_years: u32,
}

impl ProjectStats {
    /// Built-in baseline used whenever the remote value is missing or invalid.
    pub const BASELINE: ProjectStats = ProjectStats {
        completed_projects: 500,
        happy_clients: 200,
        experience_years: 20,
    };

    /// Label/value pairs in display order, e.g. `("Happy Clients", "200+")`.
    pub fn labels(&self) -> [(&'static str, String); 3] {
        [
            ("Happy Clients", format!("{}+", self.happy_clients)),
            ("Projects Completed", format!("{}+", self.completed_projects)),
            ("Years Experience", format!("{}+", self.experience_years)),
        ]
    }
}

impl Default for ProjectStats {
    fn default() -> Self {
        Self::BASELINE
    }
}

// ============================================================================
// Partial (remote) shapes
// ============================================================================

/// `GET /about` as it may actually arrive: every group and field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPayload {
    /// Partial `constructionInfo`.
    #[serde(default, deserialize_with = "lenient::object")]
    pub construction_info: Option<PartialOrganization>,
    /// Partial `ownerInfo`.
    #[serde(default, deserialize_with = "lenient::object")]
    pub owner_info: Option<PartialOwner>,
    /// Partial `projectInfo`.
    #[serde(default, deserialize_with = "lenient::object")]
    pub project_info: Option<PartialStats>,
}

/// Partial `constructionInfo`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOrganization {
    /// `name` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// `description` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    /// `image` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
}

/// Partial `ownerInfo`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOwner {
    /// `name` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// `description` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    /// `image` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    /// `phone` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    /// `email` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    /// `location` as sent.
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: Option<String>,
}

/// Partial `projectInfo`. Counters stay raw JSON until the merge engine
/// decides whether they are usable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialStats {
    /// `completed_projects` as sent.
    #[serde(default)]
    pub completed_projects: Option<Value>,
    /// `happy_clients` as sent.
    #[serde(default)]
    pub happy_clients: Option<Value>,
    /// `experience_years` as sent.
    #[serde(default)]
    pub experience_years: Option<Value>,
}

impl From<ProfileRecord> for AboutPayload {
    fn from(record: ProfileRecord) -> Self {
        Self {
            construction_info: Some(PartialOrganization {
                name: Some(record.organization.name),
                description: Some(record.organization.description),
                image: Some(record.organization.image),
            }),
            owner_info: Some(PartialOwner {
                name: Some(record.owner.name),
                description: Some(record.owner.description),
                image: Some(record.owner.image),
                phone: record.owner.phone,
                email: record.owner.email,
                location: record.owner.location,
            }),
            project_info: Some(record.stats.into()),
        }
    }
}

impl From<ProjectStats> for PartialStats {
    fn from(stats: ProjectStats) -> Self {
        Self {
            completed_projects: Some(stats.completed_projects.into()),
            happy_clients: Some(stats.happy_clients.into()),
            experience_years: Some(stats.experience_years.into()),
        }
    }
}
