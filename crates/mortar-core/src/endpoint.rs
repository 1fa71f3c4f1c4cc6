//! Remote endpoint resolution.
//!
//! The same site build runs on a developer machine (talking to a backend on
//! `localhost:5000`) and in production (talking to the hosted backend). The
//! choice is made purely from the host name the site is served under.
//!
//! # Example
//!
//! ```
//! use mortar_core::endpoint::{Environment, resolve};
//!
//! assert_eq!(resolve("localhost:8080").environment, Environment::Local);
//! assert_eq!(resolve("rkconstructions.in").environment, Environment::Production);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EndpointConfig;

/// Where the content service lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer machine.
    Local,
    /// Deployed site.
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Local => write!(f, "local"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Resolved addresses of the content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Which environment was selected.
    pub environment: Environment,
    /// Base of the JSON API, e.g. `https://host/api`.
    pub api_base: String,
    /// Root that relative asset paths are served from, e.g. `https://host`.
    pub asset_root: String,
}

impl Endpoint {
    /// Absolute URL of an API resource such as `/about`.
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }
}

/// Join a base address and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Picks the local or production [`Endpoint`] for a host name.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    local_hosts: Vec<String>,
    local: Endpoint,
    production: Endpoint,
}

impl EndpointResolver {
    /// Build a resolver from configuration.
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            local_hosts: config
                .local_hosts
                .iter()
                .map(|h| normalize_host(h))
                .collect(),
            local: Endpoint {
                environment: Environment::Local,
                api_base: config.local_api.clone(),
                asset_root: config.local_assets.clone(),
            },
            production: Endpoint {
                environment: Environment::Production,
                api_base: config.production_api.clone(),
                asset_root: config.production_assets.clone(),
            },
        }
    }

    /// Whether `host` denotes a local development environment.
    ///
    /// Ports are ignored, case does not matter, and any `*.localhost` name
    /// counts as local.
    pub fn is_local(&self, host: &str) -> bool {
        let host = normalize_host(host);
        host == "localhost"
            || host.ends_with(".localhost")
            || self.local_hosts.iter().any(|h| *h == host)
    }

    /// Endpoint for `host`. Never fails; unknown hosts are production.
    pub fn resolve(&self, host: &str) -> Endpoint {
        if self.is_local(host) {
            self.local.clone()
        } else {
            self.production.clone()
        }
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(&EndpointConfig::default())
    }
}

/// Resolve `host` against the built-in addresses.
pub fn resolve(host: &str) -> Endpoint {
    EndpointResolver::default().resolve(host)
}

/// Lowercase, strip a trailing dot, brackets and any `:port` suffix.
fn normalize_host(host: &str) -> String {
    let host = host.trim().to_ascii_lowercase();

    let bare: &str = if let Some(rest) = host.strip_prefix('[') {
        // [::1] or [::1]:8080
        rest.split(']').next().unwrap_or(rest)
    } else if host.matches(':').count() == 1 {
        host.split(':').next().unwrap_or(host.as_str())
    } else {
        // bare IPv6 or no port at all
        host.as_str()
    };

    bare.trim_end_matches('.').to_string()
}
