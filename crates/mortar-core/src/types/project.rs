//! Portfolio projects served by `GET /projects`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::lenient;

/// The closed set of portfolio categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Houses and apartments.
    Residential,
    /// Offices, shops, towers.
    Commercial,
    /// Interior design and fit-out.
    Interior,
    /// Roads, bridges, utilities.
    Infrastructure,
    /// 3D house plan designs.
    #[serde(rename = "3D Plan")]
    ThreeDPlan,
    /// 2D line plan drawings.
    #[serde(rename = "Line Plan")]
    LinePlan,
}

impl Category {
    /// Categories in menu order.
    pub const ALL: [Category; 6] = [
        Category::Residential,
        Category::Commercial,
        Category::Interior,
        Category::Infrastructure,
        Category::ThreeDPlan,
        Category::LinePlan,
    ];

    /// Display and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
            Category::Interior => "Interior",
            Category::Infrastructure => "Infrastructure",
            Category::ThreeDPlan => "3D Plan",
            Category::LinePlan => "Line Plan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Exact, case-sensitive match on the wire name. Anything else is
    /// rejected rather than mapped to a "closest" category.
    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// A category selection in the listing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every project.
    #[default]
    All,
    /// Only projects of this category.
    Only(Category),
}

impl CategoryFilter {
    /// The filter menu: `All` followed by every category.
    pub fn menu() -> [CategoryFilter; 7] {
        let mut menu = [CategoryFilter::All; 7];
        for (slot, category) in menu.iter_mut().skip(1).zip(Category::ALL) {
            *slot = CategoryFilter::Only(category);
        }
        menu
    }

    /// Whether a project category passes this filter.
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

// Serialized by menu label: "All", "Residential", "3D Plan", ...
impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// One portfolio entry.
///
/// Decoding is forgiving: text fields that are missing, `null` or mistyped
/// become empty, and `images` keeps only its string elements. An entry is
/// rejected only when it has no id or its category is not one of
/// [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProject")]
pub struct ProjectRecord {
    /// Stable identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Site location.
    pub location: String,
    /// Portfolio category (`section` on the wire).
    #[serde(rename = "section")]
    pub category: Category,
    /// Asset references, in display order.
    #[serde(rename = "images")]
    pub image_refs: Vec<String>,
}

// Wire shape of a project. `_id` and `id` are read separately because
// backends that serialize virtuals send both.
#[derive(Deserialize)]
struct RawProject {
    #[serde(rename = "_id", default, deserialize_with = "lenient::string")]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    section: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    images: Vec<String>,
}

impl TryFrom<RawProject> for ProjectRecord {
    type Error = Error;

    fn try_from(raw: RawProject) -> Result<Self> {
        let id = raw
            .object_id
            .or(raw.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::validation_field("_id", "project has no id"))?;
        let category = raw
            .section
            .or(raw.category)
            .ok_or_else(|| Error::validation_field("section", "project has no category"))?
            .parse()?;
        Ok(Self {
            id,
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            category,
            image_refs: raw.images,
        })
    }
}

impl ProjectRecord {
    /// Reference of the card image: the first image, if any.
    pub fn cover(&self) -> Option<&str> {
        self.image_refs.first().map(String::as_str)
    }
}

/// `GET /projects` comes back either as a bare array or wrapped in an
/// object with a `projects` field, depending on the backend version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectsPayload {
    /// `[ {...}, {...} ]`
    List(Vec<Value>),
    /// `{ "projects": [ ... ] }`; a missing or null field means no projects.
    Wrapped {
        /// Raw project entries.
        #[serde(default)]
        projects: Option<Vec<Value>>,
    },
}

/// Outcome of decoding a project payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedProjects {
    /// Entries that decoded cleanly, in arrival order.
    pub projects: Vec<ProjectRecord>,
    /// Entries that were rejected, with the reason.
    pub rejected: Vec<String>,
}

impl ProjectsPayload {
    /// Raw entries regardless of envelope.
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            ProjectsPayload::List(entries) => entries,
            ProjectsPayload::Wrapped { projects } => projects.unwrap_or_default(),
        }
    }

    /// Decode every entry. Entries with an unknown category or without an id
    /// are rejected individually; the rest keep their order.
    pub fn decode(self) -> DecodedProjects {
        let mut decoded = DecodedProjects::default();
        for (index, entry) in self.into_entries().into_iter().enumerate() {
            match serde_json::from_value::<ProjectRecord>(entry) {
                Ok(project) => decoded.projects.push(project),
                Err(e) => decoded.rejected.push(format!("entry {index}: {e}")),
            }
        }
        decoded
    }
}

/// Decode a `GET /projects` body of either shape.
pub fn decode_projects(endpoint: &str, body: Value) -> Result<DecodedProjects> {
    let payload: ProjectsPayload = serde_json::from_value(body).map_err(|_| {
        Error::malformed(endpoint, "expected an array or an object with a `projects` array")
    })?;
    Ok(payload.decode())
}
