//! Fallback merge engine.
//!
//! Combines a complete default record with whatever part of it the content
//! service managed to return. The rules are deliberately shallow:
//!
//! - text fields: the remote value wins if it is present and not blank;
//! - counters: the remote value wins if it parses as a finite number >= 0;
//! - nested groups (`ownerInfo`, `social`, ...): the same rules, one level
//!   down and no deeper.
//!
//! Merging never fails. A payload that cannot even be read as the partial
//! shape yields the default record untouched.
//!
//! # Usage
//!
//! ```rust
//! use mortar_core::merge::merge_value;
//! use mortar_core::types::ProfileRecord;
//!
//! let remote = serde_json::json!({ "projectInfo": { "happyClients": 50 } });
//! let profile = merge_value(ProfileRecord::default(), Some(&remote));
//!
//! assert_eq!(profile.stats.happy_clients, 50);
//! assert_eq!(profile.stats.completed_projects, 500);
//! ```

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{
    AboutPayload, ContactRecord, OrganizationInfo, OwnerInfo, PartialContact,
    PartialOrganization, PartialOwner, PartialStats, ProfileRecord, ProjectStats, SocialChannel,
};

/// A complete record that can absorb a partial remote version of itself.
pub trait FallbackMerge: Sized {
    /// The loosely-typed remote shape.
    type Partial: DeserializeOwned + Default;

    /// Overlay `remote` onto `self`, keeping `self`'s value wherever the
    /// remote one is missing or unusable.
    fn merge_partial(self, remote: Self::Partial) -> Self;
}

/// Merge a decoded partial record into its default.
pub fn merge<T: FallbackMerge>(default: T, remote: T::Partial) -> T {
    default.merge_partial(remote)
}

/// Merge a raw JSON payload into its default.
///
/// `None`, non-object payloads and anything else that does not decode as
/// `T::Partial` leave the default unchanged.
pub fn merge_value<T: FallbackMerge>(default: T, remote: Option<&Value>) -> T {
    let Some(value) = remote else {
        return default;
    };
    if !value.is_object() {
        log::warn!("Ignoring non-object remote payload, keeping defaults");
        return default;
    }
    match <T::Partial as Deserialize>::deserialize(value) {
        Ok(partial) => default.merge_partial(partial),
        Err(e) => {
            log::warn!("Ignoring unreadable remote payload, keeping defaults: {e}");
            default
        }
    }
}

/// Parse a remote counter.
///
/// Accepts JSON numbers and numeric strings. NaN, infinities, negatives and
/// values beyond `u32::MAX` are rejected; fractions are truncated.
pub fn parse_count(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n.trunc() as u32)
}

fn pick_text(default: String, remote: Option<String>) -> String {
    match remote {
        Some(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

fn pick_optional(default: Option<String>, remote: Option<String>) -> Option<String> {
    match remote {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => default,
    }
}

fn pick_count(default: u32, remote: Option<&Value>, field: &str) -> u32 {
    match remote {
        None | Some(Value::Null) => default,
        Some(value) => parse_count(value).unwrap_or_else(|| {
            log::warn!("Ignoring invalid {field} value {value}, keeping {default}");
            default
        }),
    }
}

// ============================================================================
// Profile
// ============================================================================

impl FallbackMerge for OrganizationInfo {
    type Partial = PartialOrganization;

    fn merge_partial(self, remote: PartialOrganization) -> Self {
        Self {
            name: pick_text(self.name, remote.name),
            description: pick_text(self.description, remote.description),
            image: pick_text(self.image, remote.image),
        }
    }
}

impl FallbackMerge for OwnerInfo {
    type Partial = PartialOwner;

    fn merge_partial(self, remote: PartialOwner) -> Self {
        Self {
            name: pick_text(self.name, remote.name),
            description: pick_text(self.description, remote.description),
            image: pick_text(self.image, remote.image),
            phone: pick_optional(self.phone, remote.phone),
            email: pick_optional(self.email, remote.email),
            location: pick_optional(self.location, remote.location),
        }
    }
}

impl FallbackMerge for ProjectStats {
    type Partial = PartialStats;

    fn merge_partial(self, remote: PartialStats) -> Self {
        Self {
            completed_projects: pick_count(
                self.completed_projects,
                remote.completed_projects.as_ref(),
                "completedProjects",
            ),
            happy_clients: pick_count(
                self.happy_clients,
                remote.happy_clients.as_ref(),
                "happyClients",
            ),
            experience_years: pick_count(
                self.experience_years,
                remote.experience_years.as_ref(),
                "experienceYears",
            ),
        }
    }
}

impl FallbackMerge for ProfileRecord {
    type Partial = AboutPayload;

    fn merge_partial(self, remote: AboutPayload) -> Self {
        Self {
            organization: merge_group(self.organization, remote.construction_info),
            owner: merge_group(self.owner, remote.owner_info),
            stats: merge_group(self.stats, remote.project_info),
        }
    }
}

fn merge_group<T: FallbackMerge>(default: T, remote: Option<T::Partial>) -> T {
    match remote {
        Some(partial) => default.merge_partial(partial),
        None => default,
    }
}

// ============================================================================
// Contact
// ============================================================================

impl FallbackMerge for ContactRecord {
    type Partial = PartialContact;

    fn merge_partial(self, remote: PartialContact) -> Self {
        let mut social = self.social;
        if let Some(mut remote_social) = remote.social {
            for channel in SocialChannel::ALL {
                let slot = social.slot_mut(channel);
                *slot = pick_optional(slot.take(), remote_social.take(channel));
            }
        }

        Self {
            phone: pick_text(self.phone, remote.phone),
            email: pick_text(self.email, remote.email),
            address: pick_text(self.address, remote.address),
            working_time: pick_text(self.working_time, remote.working_time),
            map_url: pick_optional(self.map_url, remote.map_url),
            social,
        }
    }
}
