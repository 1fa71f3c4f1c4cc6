//! Test doubles and wiremock helpers for the site tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mortar_client::{ContentClient, ContentSource, EnquirySink};
use mortar_core::assets::{AssetNormalizer, DEFAULT_PLACEHOLDER};
use mortar_core::config::ContentDefaults;
use mortar_core::endpoint::{Endpoint, Environment};
use mortar_core::types::{
    AboutPayload, DecodedProjects, EnquiryField, EnquiryRecord, PartialContact,
};
use mortar_core::{Error, Result};
use mortar_site::SiteContext;
use serde_json::Value;
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ASSET_ROOT: &str = "https://backend.test";

/// Context with built-in defaults and a fixed asset root.
pub fn context() -> SiteContext {
    SiteContext::new(
        ContentDefaults::default(),
        AssetNormalizer::new(ASSET_ROOT, DEFAULT_PLACEHOLDER),
    )
}

/// Client against a mock server (`/api` base, server root for assets).
pub fn client_for(server: &MockServer) -> ContentClient {
    let endpoint = Endpoint {
        environment: Environment::Local,
        api_base: format!("{}/api", server.uri()),
        asset_root: server.uri(),
    };
    ContentClient::new(endpoint, Duration::from_secs(2)).unwrap()
}

/// Serve `body` as JSON for `GET /api<resource>`.
pub async fn mount_get(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer `GET /api<resource>` with a bare status code.
pub async fn mount_status(server: &MockServer, resource: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/api{resource}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// A source whose every read fails.
pub struct DownSource;

#[async_trait]
impl ContentSource for DownSource {
    async fn fetch_profile(&self) -> Result<AboutPayload> {
        Err(Error::unreachable("/about", "connection refused"))
    }

    async fn fetch_contact(&self) -> Result<PartialContact> {
        Err(Error::unreachable("/contact", "connection refused"))
    }

    async fn fetch_projects(&self) -> Result<DecodedProjects> {
        Err(Error::unreachable("/projects", "connection refused"))
    }
}

/// In-memory sink that records deliveries and answers with a fixed outcome.
pub struct RecordingSink {
    pub fail_with: Option<u16>,
    pub calls: AtomicUsize,
    pub delivered: Mutex<Vec<EnquiryRecord>>,
}

impl RecordingSink {
    pub fn accepting() -> Self {
        Self {
            fail_with: None,
            calls: AtomicUsize::new(0),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::accepting()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnquirySink for RecordingSink {
    async fn submit_enquiry(&self, enquiry: &EnquiryRecord) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.delivered.lock().unwrap().push(enquiry.clone());
        match self.fail_with {
            Some(status) => Err(Error::unreachable_status("/enquiry", status)),
            None => Ok(()),
        }
    }
}

/// Sink that holds every request until released.
pub struct GatedSink {
    pub gate: Notify,
}

impl GatedSink {
    pub fn new() -> Self {
        Self {
            gate: Notify::new(),
        }
    }
}

#[async_trait]
impl EnquirySink for GatedSink {
    async fn submit_enquiry(&self, _enquiry: &EnquiryRecord) -> Result<()> {
        self.gate.notified().await;
        Ok(())
    }
}

/// Fill every field of a form.
pub fn fill<S: EnquirySink>(form: &mortar_site::EnquiryForm<S>) {
    form.set_field(EnquiryField::Name, "Asha Kulkarni");
    form.set_field(EnquiryField::Email, "asha@example.com");
    form.set_field(EnquiryField::Phone, "+91 98220 00000");
    form.set_field(EnquiryField::Subject, "Row house");
    form.set_field(EnquiryField::Message, "Please call me about a 2BHK row house.");
}
