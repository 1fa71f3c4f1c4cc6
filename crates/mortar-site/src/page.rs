//! Combined load of everything a full page needs.

use mortar_client::ContentSource;

use crate::about::AboutPage;
use crate::contact::ContactSection;
use crate::context::SiteContext;
use crate::projects::ProjectsPage;

/// About, contact and projects content, loaded together.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Merged profile.
    pub about: AboutPage,
    /// Merged contact block.
    pub contact: ContactSection,
    /// Project catalog.
    pub projects: ProjectsPage,
}

impl PageContent {
    /// Issue the three reads concurrently. Each one falls back on its own;
    /// a slow or failing resource never holds back the others' defaults.
    pub async fn load<S>(source: &S, ctx: &SiteContext) -> Self
    where
        S: ContentSource + ?Sized,
    {
        let (about, contact, projects) = tokio::join!(
            AboutPage::load(source, ctx),
            ContactSection::load(source, ctx),
            ProjectsPage::load(source, ctx)
        );
        Self {
            about,
            contact,
            projects,
        }
    }

    /// Whether any part is running on defaults only.
    pub fn is_degraded(&self) -> bool {
        self.about.origin.is_degraded()
            || self.contact.origin.is_degraded()
            || self.projects.origin().is_degraded()
    }
}
