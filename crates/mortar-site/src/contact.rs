//! Contact section and footer links.

use serde::Serialize;

use mortar_client::ContentSource;
use mortar_core::merge;
use mortar_core::types::{ContactRecord, SocialChannel, whatsapp_chat_link};

use crate::context::{ContentOrigin, SiteContext};

/// Prefilled text of the floating WhatsApp button.
pub const CHAT_GREETING: &str = "Hello! I'm interested in your construction services.";

/// One social icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Channel the icon stands for.
    pub channel: SocialChannel,
    /// Link target.
    pub href: String,
}

/// Contact block as rendered on the contact page and in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSection {
    /// Merged contact record.
    pub contact: ContactRecord,
    /// `tel:` link, omitted when there is no phone.
    pub phone_href: Option<String>,
    /// `mailto:` link, omitted when there is no email.
    pub email_href: Option<String>,
    /// Icons for every configured channel.
    pub social: Vec<SocialLink>,
    /// Click-to-chat link for the floating button.
    pub chat_link: Option<String>,
    /// Whether remote content made it in.
    pub origin: ContentOrigin,
}

impl ContactSection {
    /// Fetch `/contact` and merge it into the configured contact block.
    pub async fn load<S>(source: &S, ctx: &SiteContext) -> Self
    where
        S: ContentSource + ?Sized,
    {
        let defaults = ctx.defaults.contact.clone();
        match source.fetch_contact().await {
            Ok(remote) => Self::build(merge(defaults, remote), ContentOrigin::Remote),
            Err(e) => {
                tracing::warn!(error = %e, "Contact details unavailable, rendering defaults");
                Self::build(defaults, ContentOrigin::Defaults)
            }
        }
    }

    /// Section for an already merged record.
    pub fn build(contact: ContactRecord, origin: ContentOrigin) -> Self {
        let social = contact
            .social
            .links()
            .into_iter()
            .map(|(channel, href)| SocialLink { channel, href })
            .collect();

        // The chat button prefers the WhatsApp number over the office line.
        let chat_number = contact
            .social
            .get(SocialChannel::WhatsApp)
            .unwrap_or(contact.phone.as_str());
        let chat_link = whatsapp_chat_link(chat_number, CHAT_GREETING);

        Self {
            phone_href: contact.phone_href(),
            email_href: contact.email_href(),
            social,
            chat_link,
            contact,
            origin,
        }
    }
}
