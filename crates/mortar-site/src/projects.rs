//! Project listing with the category menu.

use serde::Serialize;

use mortar_client::ContentSource;
use mortar_core::assets::{AssetNormalizer, AssetUrl};
use mortar_core::catalog::CatalogIndex;
use mortar_core::types::{Category, CategoryFilter, ProjectRecord};

use crate::context::{ContentOrigin, SiteContext};

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Project id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Site location.
    pub location: String,
    /// Category badge.
    pub category: Category,
    /// Card image.
    pub cover: AssetUrl,
}

impl ProjectCard {
    fn new(project: &ProjectRecord, assets: &AssetNormalizer) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            location: project.location.clone(),
            category: project.category,
            cover: assets.resolve(project.cover()),
        }
    }
}

/// One entry of the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Filter the entry selects.
    pub filter: CategoryFilter,
    /// Number of projects it shows.
    pub count: usize,
    /// Whether it is the current selection.
    pub selected: bool,
}

/// Serializable snapshot of the page for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    /// Current selection.
    pub selection: CategoryFilter,
    /// Category menu.
    pub menu: Vec<MenuEntry>,
    /// Cards for the selection.
    pub projects: Vec<ProjectCard>,
    /// Where the catalog came from.
    pub origin: ContentOrigin,
}

/// The projects page.
#[derive(Debug, Clone)]
pub struct ProjectsPage {
    catalog: CatalogIndex,
    selection: CategoryFilter,
    assets: AssetNormalizer,
    origin: ContentOrigin,
}

impl ProjectsPage {
    /// Fetch `/projects`. A failed fetch yields an empty catalog.
    pub async fn load<S>(source: &S, ctx: &SiteContext) -> Self
    where
        S: ContentSource + ?Sized,
    {
        let (catalog, origin) = match source.fetch_projects().await {
            Ok(decoded) => (CatalogIndex::new(decoded.projects), ContentOrigin::Remote),
            Err(e) => {
                tracing::warn!(error = %e, "Projects unavailable, rendering an empty catalog");
                (CatalogIndex::default(), ContentOrigin::Defaults)
            }
        };
        Self::new(catalog, ctx.assets.clone(), origin)
    }

    /// Page over an existing catalog, showing everything.
    pub fn new(catalog: CatalogIndex, assets: AssetNormalizer, origin: ContentOrigin) -> Self {
        Self {
            catalog,
            selection: CategoryFilter::All,
            assets,
            origin,
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Current menu selection.
    pub fn selection(&self) -> CategoryFilter {
        self.selection
    }

    /// Where the catalog came from.
    pub fn origin(&self) -> ContentOrigin {
        self.origin
    }

    /// Change the menu selection.
    pub fn select(&mut self, selection: CategoryFilter) {
        self.selection = selection;
    }

    /// Cards for the current selection, in catalog order.
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.catalog
            .filter(self.selection)
            .into_iter()
            .map(|project| ProjectCard::new(project, &self.assets))
            .collect()
    }

    /// The category menu, in fixed order.
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.catalog
            .counts()
            .into_iter()
            .map(|(filter, count)| MenuEntry {
                filter,
                count,
                selected: filter == self.selection,
            })
            .collect()
    }

    /// Snapshot of what is currently shown.
    pub fn view(&self) -> ProjectsView {
        ProjectsView {
            selection: self.selection,
            menu: self.menu(),
            projects: self.cards(),
            origin: self.origin,
        }
    }
}
