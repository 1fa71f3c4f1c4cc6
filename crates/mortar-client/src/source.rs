//! Seams between page loaders and the content service.
//!
//! Page loaders only ever see these traits, so they can be driven by a
//! [`ContentClient`] in production and by in-memory doubles in tests.

use std::sync::Arc;

use async_trait::async_trait;

use mortar_core::Result;
use mortar_core::types::{AboutPayload, DecodedProjects, EnquiryRecord, PartialContact};

use crate::client::ContentClient;

/// Read side of the content service.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Partial profile from `GET /about`.
    async fn fetch_profile(&self) -> Result<AboutPayload>;

    /// Partial contact block from `GET /contact`.
    async fn fetch_contact(&self) -> Result<PartialContact>;

    /// Project list from `GET /projects`.
    async fn fetch_projects(&self) -> Result<DecodedProjects>;
}

/// Write side: where enquiries go.
#[async_trait]
pub trait EnquirySink: Send + Sync {
    /// Deliver one enquiry. No retry, no queueing.
    async fn submit_enquiry(&self, enquiry: &EnquiryRecord) -> Result<()>;
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn fetch_profile(&self) -> Result<AboutPayload> {
        ContentClient::fetch_profile(self).await
    }

    async fn fetch_contact(&self) -> Result<PartialContact> {
        ContentClient::fetch_contact(self).await
    }

    async fn fetch_projects(&self) -> Result<DecodedProjects> {
        ContentClient::fetch_projects(self).await
    }
}

#[async_trait]
impl EnquirySink for ContentClient {
    async fn submit_enquiry(&self, enquiry: &EnquiryRecord) -> Result<()> {
        ContentClient::submit_enquiry(self, enquiry).await
    }
}

#[async_trait]
impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    async fn fetch_profile(&self) -> Result<AboutPayload> {
        (**self).fetch_profile().await
    }

    async fn fetch_contact(&self) -> Result<PartialContact> {
        (**self).fetch_contact().await
    }

    async fn fetch_projects(&self) -> Result<DecodedProjects> {
        (**self).fetch_projects().await
    }
}

#[async_trait]
impl<T: EnquirySink + ?Sized> EnquirySink for Arc<T> {
    async fn submit_enquiry(&self, enquiry: &EnquiryRecord) -> Result<()> {
        (**self).submit_enquiry(enquiry).await
    }
}
