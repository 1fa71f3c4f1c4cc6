//! In-memory project catalog.
//!
//! Holds the project list exactly as it arrived (order is the display order
//! chosen in the admin UI) and answers category-filtered views. Every filter
//! call is a fresh linear scan over the full list; catalogs are a few dozen
//! entries.

use crate::types::{Category, CategoryFilter, ProjectRecord};

/// Category-filtered view over a slice of projects, in original order.
pub fn filter(projects: &[ProjectRecord], selection: CategoryFilter) -> Vec<&ProjectRecord> {
    projects
        .iter()
        .filter(|p| selection.accepts(p.category))
        .collect()
}

/// The fetched project list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    projects: Vec<ProjectRecord>,
}

impl CatalogIndex {
    /// Wrap a fetched list without reordering or deduplicating it.
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Every project, in arrival order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects passing `selection`, in arrival order.
    pub fn filter(&self, selection: CategoryFilter) -> Vec<&ProjectRecord> {
        filter(&self.projects, selection)
    }

    /// Number of projects per menu entry, in menu order.
    pub fn counts(&self) -> Vec<(CategoryFilter, usize)> {
        CategoryFilter::menu()
            .into_iter()
            .map(|selection| {
                let count = match selection {
                    CategoryFilter::All => self.len(),
                    CategoryFilter::Only(category) => self.count_of(category),
                };
                (selection, count)
            })
            .collect()
    }

    fn count_of(&self, category: Category) -> usize {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}

impl From<Vec<ProjectRecord>> for CatalogIndex {
    fn from(projects: Vec<ProjectRecord>) -> Self {
        Self::new(projects)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: &str, category: Category) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            location: "Pune".to_string(),
            category,
            image_refs: vec![],
        }
    }

    fn sample() -> CatalogIndex {
        CatalogIndex::new(vec![
            project("1", Category::Residential),
            project("2", Category::Commercial),
            project("3", Category::Residential),
            project("4", Category::ThreeDPlan),
            project("5", Category::Residential),
        ])
    }

    fn ids(projects: &[&ProjectRecord]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let catalog = sample();
        let all = catalog.filter(CategoryFilter::All);
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_category_filter_is_stable() {
        let catalog = sample();
        let residential = catalog.filter(Category::Residential.into());
        assert_eq!(ids(&residential), vec!["1", "3", "5"]);

        let plans = catalog.filter(CategoryFilter::Only(Category::ThreeDPlan));
        assert_eq!(ids(&plans), vec!["4"]);

        assert!(catalog.filter(Category::Interior.into()).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CatalogIndex::default();
        for selection in CategoryFilter::menu() {
            assert!(catalog.filter(selection).is_empty());
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let catalog = CatalogIndex::new(vec![
            project("1", Category::Interior),
            project("1", Category::Interior),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.filter(Category::Interior.into()).len(), 2);
    }

    #[test]
    fn test_counts() {
        let catalog = sample();
        let counts = catalog.counts();
        assert_eq!(counts[0], (CategoryFilter::All, 5));
        assert_eq!(counts[1], (CategoryFilter::Only(Category::Residential), 3));
        assert_eq!(counts[2], (CategoryFilter::Only(Category::Commercial), 1));
        assert_eq!(counts.len(), 7);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        proptest::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_filter_is_ordered_subsequence(
            categories in proptest::collection::vec(arb_category(), 0..40),
            wanted in arb_category(),
        ) {
            let projects: Vec<ProjectRecord> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| project(&i.to_string(), *c))
                .collect();

            let all = filter(&projects, CategoryFilter::All);
            prop_assert_eq!(all.len(), projects.len());

            let picked = filter(&projects, CategoryFilter::Only(wanted));
            prop_assert!(picked.iter().all(|p| p.category == wanted));
            prop_assert_eq!(
                picked.len(),
                projects.iter().filter(|p| p.category == wanted).count()
            );
            let positions: Vec<usize> = picked
                .iter()
                .map(|p| p.id.parse::<usize>().unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
