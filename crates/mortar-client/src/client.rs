//! reqwest-backed client for the content service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use mortar_core::config::SiteConfig;
use mortar_core::endpoint::Endpoint;
use mortar_core::types::{
    AboutPayload, DecodedProjects, EnquiryRecord, PartialContact, decode_projects,
};
use mortar_core::{Error, Result};

/// `GET` path of the profile resource.
pub const ABOUT_PATH: &str = "/about";
/// `GET` path of the contact resource.
pub const CONTACT_PATH: &str = "/contact";
/// `GET` path of the project list.
pub const PROJECTS_PATH: &str = "/projects";
/// `POST` path of the enquiry form.
pub const ENQUIRY_PATH: &str = "/enquiry";

/// Client for one resolved [`Endpoint`].
///
/// Each call issues exactly one request. Transport errors, timeouts and
/// non-2xx answers all become [`Error::Unreachable`]; bodies that are not
/// JSON of the expected shape become [`Error::MalformedPayload`].
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    timeout: Duration,
}

impl ContentClient {
    /// Create a client with a per-request timeout.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    /// Client for the endpoint and timeout in `config`.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(config.endpoint(), config.http.timeout())
    }

    /// The endpoint requests go to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `GET /about`, decoded as a partial profile.
    pub async fn fetch_profile(&self) -> Result<AboutPayload> {
        self.get_as(ABOUT_PATH).await
    }

    /// `GET /contact`, decoded as a partial contact block.
    pub async fn fetch_contact(&self) -> Result<PartialContact> {
        self.get_as(CONTACT_PATH).await
    }

    /// `GET /projects`, accepting either a bare array or a `projects`
    /// wrapper. Entries that do not decode are reported, not fatal.
    pub async fn fetch_projects(&self) -> Result<DecodedProjects> {
        let body = self.get_json(PROJECTS_PATH).await?;
        let decoded = decode_projects(PROJECTS_PATH, body)?;
        for rejected in &decoded.rejected {
            tracing::warn!(path = PROJECTS_PATH, "Skipping project {rejected}");
        }
        Ok(decoded)
    }

    /// `POST /enquiry`. Only the status code matters; the body is ignored.
    pub async fn submit_enquiry(&self, enquiry: &EnquiryRecord) -> Result<()> {
        let url = self.endpoint.api_url(ENQUIRY_PATH);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(enquiry)
            .send()
            .await
            .map_err(|e| self.transport_error(ENQUIRY_PATH, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::unreachable_status(ENQUIRY_PATH, status.as_u16()));
        }
        Ok(())
    }

    /// `GET` a resource and return the raw JSON body.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint.api_url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(path, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::unreachable_status(path, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(path, &e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::malformed(path, format!("response is not JSON: {e}")))
    }

    async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_json(path).await?;
        if !body.is_object() {
            return Err(Error::malformed(path, "expected a JSON object"));
        }
        serde_json::from_value(body).map_err(|e| Error::malformed(path, e.to_string()))
    }

    fn transport_error(&self, path: &str, e: &reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::unreachable(path, format!("timed out after {:?}", self.timeout))
        } else {
            Error::unreachable(path, e.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mortar_core::endpoint::Environment;

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = SiteConfig::from_toml_str("host = \"localhost\"\n[http]\ntimeout_secs = 3\n")
            .unwrap();
        let client = ContentClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint().environment, Environment::Local);
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_resource_urls() {
        let client =
            ContentClient::new(mortar_core::endpoint::resolve("localhost"), Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            client.endpoint().api_url(PROJECTS_PATH),
            "http://localhost:5000/api/projects"
        );
    }
}
