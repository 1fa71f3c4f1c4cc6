//! Site configuration.
//!
//! Everything has a built-in default, so an empty (or missing) config file
//! yields a working setup pointed at the real backend.
//!
//! ```toml
//! host = "localhost"
//!
//! [endpoints]
//! production_api = "https://construction-backend-wtf2.onrender.com/api"
//!
//! [http]
//! timeout_secs = 8
//!
//! [defaults.profile.projectInfo]
//! happyClients = 250
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetNormalizer, DEFAULT_PLACEHOLDER};
use crate::endpoint::{Endpoint, EndpointResolver};
use crate::error::{Error, Result};
use crate::types::{ContactRecord, ProfileRecord};

/// Project name used for config directories.
pub const PROJECT_NAME: &str = "mortar";

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "MORTAR_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Host name the site is served under; drives endpoint resolution.
    #[serde(default)]
    pub host: String,

    /// Content service addresses.
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Asset settings.
    #[serde(default)]
    pub assets: AssetConfig,

    /// Default records the remote content is merged into.
    #[serde(default)]
    pub defaults: ContentDefaults,
}

/// Local and production addresses of the content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Host names treated as local development.
    #[serde(default = "default_local_hosts")]
    pub local_hosts: Vec<String>,

    /// API base in local development.
    #[serde(default = "default_local_api")]
    pub local_api: String,

    /// Asset root in local development.
    #[serde(default = "default_local_assets")]
    pub local_assets: String,

    /// API base when deployed.
    #[serde(default = "default_production_api")]
    pub production_api: String,

    /// Asset root when deployed.
    #[serde(default = "default_production_assets")]
    pub production_assets: String,
}

fn default_local_hosts() -> Vec<String> {
    vec![
        "localhost".to_string(),
        "127.0.0.1".to_string(),
        "::1".to_string(),
    ]
}

fn default_local_api() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_local_assets() -> String {
    "http://localhost:5000".to_string()
}

fn default_production_api() -> String {
    "https://construction-backend-wtf2.onrender.com/api".to_string()
}

fn default_production_assets() -> String {
    "https://construction-backend-wtf2.onrender.com".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            local_hosts: default_local_hosts(),
            local_api: default_local_api(),
            local_assets: default_local_assets(),
            production_api: default_production_api(),
            production_assets: default_production_assets(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout; a hang past this counts as unreachable.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Asset settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Local image used when a reference is missing or fails to load.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

/// Default records, owned by whoever renders a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDefaults {
    /// Profile used before / instead of `GET /about`.
    #[serde(default)]
    pub profile: ProfileRecord,

    /// Contact block used before / instead of `GET /contact`.
    #[serde(default)]
    pub contact: ContactRecord,
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|e| Error::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Load from `path` (or the resolved default path).
    ///
    /// A missing file is not an error: the built-in defaults are used.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(path) else {
            log::debug!("No config directory available, using built-in defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("Config file {} not found, using built-in defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load from an existing file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }

    /// Config path: explicit argument, then `MORTAR_CONFIG`, then the
    /// platform config directory.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// `<config_dir>/mortar/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Reject configurations that cannot produce usable URLs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("endpoints.local_api", &self.endpoints.local_api),
            ("endpoints.local_assets", &self.endpoints.local_assets),
            ("endpoints.production_api", &self.endpoints.production_api),
            ("endpoints.production_assets", &self.endpoints.production_assets),
        ] {
            let url = url::Url::parse(value)
                .map_err(|e| Error::config(format!("{name} = {value:?} is not a URL: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::config(format!(
                    "{name} must be an http(s) URL, got {value:?}"
                )));
            }
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::config("http.timeout_secs must be greater than zero"));
        }
        if self.assets.placeholder.trim().is_empty() {
            return Err(Error::config("assets.placeholder must not be empty"));
        }
        Ok(())
    }

    /// Resolver built from the endpoint settings.
    pub fn resolver(&self) -> EndpointResolver {
        EndpointResolver::new(&self.endpoints)
    }

    /// Endpoint for the configured host.
    pub fn endpoint(&self) -> Endpoint {
        self.resolver().resolve(&self.host)
    }

    /// Asset normalizer for an endpoint, using the configured placeholder.
    pub fn asset_normalizer(&self, endpoint: &Endpoint) -> AssetNormalizer {
        AssetNormalizer::for_endpoint(endpoint, self.assets.placeholder.clone())
    }
}
