//! Contact details served by `GET /contact`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Base address for WhatsApp click-to-chat links.
const WHATSAPP_BASE: &str = "https://wa.me/";

/// The complete, always-renderable contact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    /// Office phone.
    pub phone: String,
    /// Office email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Opening hours, free text.
    pub working_time: String,
    /// Embeddable map URL; the map is omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    /// Social channels.
    pub social: SocialLinks,
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self {
            phone: "+91 70388 59141".to_string(),
            email: "info@rkconstructions.in".to_string(),
            address: "RK Constructions, Maharashtra, India".to_string(),
            working_time: "Mon - Sat: 9:00 AM - 7:00 PM".to_string(),
            map_url: None,
            social: SocialLinks {
                whatsapp: Some("917038859141".to_string()),
                ..SocialLinks::default()
            },
        }
    }
}

impl ContactRecord {
    /// `tel:` link for the office phone, if there is one.
    pub fn phone_href(&self) -> Option<String> {
        let phone = self.phone.trim();
        (!phone.is_empty()).then(|| format!("tel:{}", phone.replace(' ', "")))
    }

    /// `mailto:` link for the office email, if there is one.
    pub fn email_href(&self) -> Option<String> {
        let email = self.email.trim();
        (!email.is_empty()).then(|| format!("mailto:{email}"))
    }
}

/// Social channel → URL. A `None` channel is not rendered at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// Facebook page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Instagram profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Twitter / X profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// WhatsApp: either a full URL or a bare phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// The closed set of social channels the site knows icons for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialChannel {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// Twitter / X
    Twitter,
    /// WhatsApp
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

impl SocialChannel {
    /// Channels in icon order.
    pub const ALL: [SocialChannel; 4] = [
        SocialChannel::Facebook,
        SocialChannel::Instagram,
        SocialChannel::Twitter,
        SocialChannel::WhatsApp,
    ];

    /// Wire name of the channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialChannel::Facebook => "facebook",
            SocialChannel::Instagram => "instagram",
            SocialChannel::Twitter => "twitter",
            SocialChannel::WhatsApp => "whatsapp",
        }
    }
}

impl fmt::Display for SocialChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SocialLinks {
    /// Raw configured value for a channel, ignoring blank entries.
    pub fn get(&self, channel: SocialChannel) -> Option<&str> {
        let value = match channel {
            SocialChannel::Facebook => self.facebook.as_deref(),
            SocialChannel::Instagram => self.instagram.as_deref(),
            SocialChannel::Twitter => self.twitter.as_deref(),
            SocialChannel::WhatsApp => self.whatsapp.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Mutable slot for a channel.
    pub fn slot_mut(&mut self, channel: SocialChannel) -> &mut Option<String> {
        match channel {
            SocialChannel::Facebook => &mut self.facebook,
            SocialChannel::Instagram => &mut self.instagram,
            SocialChannel::Twitter => &mut self.twitter,
            SocialChannel::WhatsApp => &mut self.whatsapp,
        }
    }

    /// Link target for a channel. WhatsApp numbers become `wa.me` links.
    pub fn href(&self, channel: SocialChannel) -> Option<String> {
        let value = self.get(channel)?;
        match channel {
            SocialChannel::WhatsApp if !is_http_url(value) => {
                let digits = phone_digits(value);
                (!digits.is_empty()).then(|| format!("{WHATSAPP_BASE}{digits}"))
            }
            _ => Some(value.to_string()),
        }
    }

    /// Every channel that should get an icon, in icon order.
    pub fn links(&self) -> Vec<(SocialChannel, String)> {
        SocialChannel::ALL
            .into_iter()
            .filter_map(|channel| self.href(channel).map(|href| (channel, href)))
            .collect()
    }
}

/// Click-to-chat link with a prefilled message, as used by the floating
/// chat button. Returns `None` when `phone` has no digits.
pub fn whatsapp_chat_link(phone: &str, message: &str) -> Option<String> {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return None;
    }
    let base = format!("{WHATSAPP_BASE}{digits}");
    if message.is_empty() {
        return Some(base);
    }
    url::Url::parse_with_params(&base, &[("text", message)])
        .ok()
        .map(String::from)
}

fn phone_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// ============================================================================
// Partial (remote) shapes
// ============================================================================

/// `GET /contact` as it may actually arrive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialContact {
    /// Remote `phone`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    /// Remote `email`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    /// Remote `address`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    /// Remote `working_time`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub working_time: Option<String>,
    /// Remote `map_url`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub map_url: Option<String>,
    /// Remote `social`, if usable.
    #[serde(default, deserialize_with = "lenient::object")]
    pub social: Option<PartialSocial>,
}

/// Partial `social` group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialSocial {
    /// Remote `facebook`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub facebook: Option<String>,
    /// Remote `instagram`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub instagram: Option<String>,
    /// Remote `twitter`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub twitter: Option<String>,
    /// Remote `whatsapp`, if usable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub whatsapp: Option<String>,
}

impl PartialSocial {
    /// Remote value for a channel.
    pub fn take(&mut self, channel: SocialChannel) -> Option<String> {
        match channel {
            SocialChannel::Facebook => self.facebook.take(),
            SocialChannel::Instagram => self.instagram.take(),
            SocialChannel::Twitter => self.twitter.take(),
            SocialChannel::WhatsApp => self.whatsapp.take(),
        }
    }
}

impl From<ContactRecord> for PartialContact {
    fn from(record: ContactRecord) -> Self {
        Self {
            phone: Some(record.phone),
            email: Some(record.email),
            address: Some(record.address),
            working_time: Some(record.working_time),
            map_url: record.map_url,
            social: Some(PartialSocial {
                facebook: record.social.facebook,
                instagram: record.social.instagram,
                twitter: record.social.twitter,
                whatsapp: record.social.whatsapp,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_channel_is_not_rendered() {
        let social = SocialLinks {
            facebook: Some("   ".to_string()),
            instagram: Some("https://instagram.com/rk".to_string()),
            ..SocialLinks::default()
        };
        assert_eq!(social.get(SocialChannel::Facebook), None);
        assert_eq!(
            social.links(),
            vec![(
                SocialChannel::Instagram,
                "https://instagram.com/rk".to_string()
            )]
        );
    }

    #[test]
    fn test_whatsapp_number_becomes_link() {
        let social = SocialLinks {
            whatsapp: Some("+91 70388-59141".to_string()),
            ..SocialLinks::default()
        };
        assert_eq!(
            social.href(SocialChannel::WhatsApp).as_deref(),
            Some("https://wa.me/917038859141")
        );
    }

    #[test]
    fn test_whatsapp_url_kept() {
        let social = SocialLinks {
            whatsapp: Some("https://wa.me/123".to_string()),
            ..SocialLinks::default()
        };
        assert_eq!(
            social.href(SocialChannel::WhatsApp).as_deref(),
            Some("https://wa.me/123")
        );
    }

    #[test]
    fn test_whatsapp_without_digits_dropped() {
        let social = SocialLinks {
            whatsapp: Some("call us".to_string()),
            ..SocialLinks::default()
        };
        assert_eq!(social.href(SocialChannel::WhatsApp), None);
        assert!(social.links().is_empty());
    }

    #[test]
    fn test_chat_link_encodes_message() {
        let link = whatsapp_chat_link("7038859141", "Hello! I'm interested").unwrap();
        assert!(link.starts_with("https://wa.me/7038859141?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\''));
    }

    #[test]
    fn test_chat_link_requires_digits() {
        assert_eq!(whatsapp_chat_link("", "hi"), None);
        assert_eq!(
            whatsapp_chat_link("123", "").as_deref(),
            Some("https://wa.me/123")
        );
    }

    #[test]
    fn test_contact_hrefs() {
        let mut contact = ContactRecord::default();
        assert_eq!(contact.phone_href().as_deref(), Some("tel:+917038859141"));
        assert_eq!(
            contact.email_href().as_deref(),
            Some("mailto:info@rkconstructions.in")
        );
        contact.email = " ".to_string();
        assert_eq!(contact.email_href(), None);
    }

    #[test]
    fn test_channel_wire_names() {
        let json = serde_json::to_string(&SocialChannel::WhatsApp).unwrap();
        assert_eq!(json, "\"whatsapp\"");
        assert_eq!(SocialChannel::Twitter.to_string(), "twitter");
    }

    #[test]
    fn test_partial_contact_social_group() {
        let partial: PartialContact = serde_json::from_str(
            r#"{"phone": "1", "social": {"facebook": "https://fb.com/rk", "twitter": 5}}"#,
        )
        .unwrap();
        let mut social = partial.social.unwrap();
        assert_eq!(
            social.take(SocialChannel::Facebook).as_deref(),
            Some("https://fb.com/rk")
        );
        assert_eq!(social.take(SocialChannel::Twitter).as_deref(), Some("5"));
        assert_eq!(social.take(SocialChannel::Instagram), None);
    }
}
